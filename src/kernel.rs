use crate::errors::KernelError;

/// Dense matrix of convolution coefficients.
///
/// Both dimensions must be odd so the kernel has a well-defined
/// geometric center (the anchor). Coefficients are f64 and are not
/// normalized by this type or by the engines.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    coefficients: Vec<f64>,
}

impl Kernel {
    /// Create kernel from coefficients given in row-major order.
    pub fn new(width: u32, height: u32, coefficients: Vec<f64>) -> Result<Self, KernelError> {
        if width == 0 || height == 0 {
            return Err(KernelError::ZeroDimension);
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(KernelError::EvenDimension);
        }
        if coefficients.len() != width as usize * height as usize {
            return Err(KernelError::InvalidCoefficientsCount);
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(KernelError::NonFiniteCoefficient);
        }
        Ok(Self {
            width,
            height,
            coefficients,
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
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Kernel coordinate aligned with the output pixel.
    #[inline(always)]
    pub fn anchor(&self) -> (u32, u32) {
        (self.height / 2, self.width / 2)
    }

    #[inline(always)]
    pub(crate) fn get(&self, row: u32, col: u32) -> f64 {
        debug_assert!(row < self.height && col < self.width);
        self.coefficients[row as usize * self.width as usize + col as usize]
    }
}
