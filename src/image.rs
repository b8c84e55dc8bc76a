use crate::errors::ImageBufferError;
use crate::image_view::{GrayImageView, GrayImageViewMut};

/// Simple owned container for a grayscale image.
///
/// Samples are stored in row-major order without padding between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl GrayImage {
    /// Create zero-filled image with given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageBufferError> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::ZeroDimension);
        }
        Ok(Self::zeroed(width, height))
    }

    pub fn from_vec_u8(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, ImageBufferError> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::ZeroDimension);
        }
        if buffer.len() != width as usize * height as usize {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Dimensions must be non-zero.
    pub(crate) fn zeroed(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize],
        }
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer with image samples in row-major order.
    #[inline(always)]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[inline(always)]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    #[inline(always)]
    pub fn view(&self) -> GrayImageView<'_> {
        // Dimensions and buffer size are kept consistent by constructors.
        GrayImageView::new(&self.buffer, self.width, self.height).unwrap()
    }

    #[inline(always)]
    pub fn view_mut(&mut self) -> GrayImageViewMut<'_> {
        GrayImageViewMut::new(&mut self.buffer, self.width, self.height).unwrap()
    }
}
