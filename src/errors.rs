use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Width and height of image must be greater than zero")]
    ZeroDimension,
    #[error("Row stride is smaller than image width")]
    InvalidStride,
    #[error("Size of buffer is smaller than required")]
    InvalidBufferSize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("Width and height of kernel must be greater than zero")]
    ZeroDimension,
    #[error("Width and height of kernel must be odd")]
    EvenDimension,
    #[error("Count of coefficients don't match to kernel dimensions")]
    InvalidCoefficientsCount,
    #[error("Kernel contains a non-finite coefficient")]
    NonFiniteCoefficient,
}

#[derive(Error, Debug)]
pub enum ConvolveError {
    #[error(
        "The dimensions of the source image are not equal to the dimensions of the destination image"
    )]
    DifferentDimensions,
    #[error("Buffers of the source and destination images overlap")]
    OverlappingBuffers,
    #[error("Convolution accumulator is NaN")]
    NanAccumulator,
    #[error("Tile size must be greater than zero")]
    InvalidBlockSize,
    #[error("Count of workers must be greater than zero")]
    InvalidWorkerCount,
    #[error("Failed to build worker thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
