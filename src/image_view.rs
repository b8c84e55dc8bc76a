use crate::errors::ImageBufferError;

/// An immutable view of grayscale image data used by engines as
/// source image.
///
/// A view describes a dense 2D array of u8 samples: `height` rows of
/// `width` samples each, where consecutive rows start `stride` samples
/// apart inside the buffer. `stride >= width` and every row is
/// contiguous.
#[derive(Debug, Clone, Copy)]
pub struct GrayImageView<'a> {
    buffer: &'a [u8],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> GrayImageView<'a> {
    pub fn new(buffer: &'a [u8], width: u32, height: u32) -> Result<Self, ImageBufferError> {
        Self::with_stride(buffer, width, height, width)
    }

    pub fn with_stride(
        buffer: &'a [u8],
        width: u32,
        height: u32,
        stride: u32,
    ) -> Result<Self, ImageBufferError> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::ZeroDimension);
        }
        if stride < width {
            return Err(ImageBufferError::InvalidStride);
        }
        if buffer.len() < min_buffer_size(width, height, stride) {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            buffer,
            width,
            height,
            stride,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline(always)]
    pub(crate) fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// Sample at (row, col). Both coordinates must be inside the view.
    #[inline(always)]
    pub(crate) fn get(&self, row: u32, col: u32) -> u8 {
        debug_assert!(row < self.height && col < self.width);
        self.buffer[row as usize * self.stride as usize + col as usize]
    }
}

/// A mutable view of grayscale image data used by engines as
/// destination image.
#[derive(Debug)]
pub struct GrayImageViewMut<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> GrayImageViewMut<'a> {
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32) -> Result<Self, ImageBufferError> {
        Self::with_stride(buffer, width, height, width)
    }

    pub fn with_stride(
        buffer: &'a mut [u8],
        width: u32,
        height: u32,
        stride: u32,
    ) -> Result<Self, ImageBufferError> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::ZeroDimension);
        }
        if stride < width {
            return Err(ImageBufferError::InvalidStride);
        }
        if buffer.len() < min_buffer_size(width, height, stride) {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            buffer,
            width,
            height,
            stride,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline(always)]
    pub(crate) fn buffer(&self) -> &[u8] {
        self.buffer
    }

    #[inline(always)]
    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer
    }
}

fn min_buffer_size(width: u32, height: u32, stride: u32) -> usize {
    // The last row doesn't need the stride padding.
    (height as usize - 1) * stride as usize + width as usize
}
