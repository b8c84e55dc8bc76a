#![doc = include_str!("../README.md")]

pub use convolution::{
    apply_col, apply_grid, apply_pix, apply_row, apply_seq, convolve_into, ConvolveOptions, Mode,
};
pub use errors::*;
pub use image_view::{GrayImageView, GrayImageViewMut};
pub use kernel::Kernel;

pub use crate::image::GrayImage;

#[cfg(feature = "image")]
mod compat;
mod convolution;
mod errors;
pub mod filters;
mod image;
mod image_view;
mod kernel;
mod threading;
