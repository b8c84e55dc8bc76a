use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use grayconv::{GrayImage, Kernel};

pub fn random_image(width: u32, height: u32, seed: u64) -> GrayImage {
    let mut buffer = vec![0u8; width as usize * height as usize];
    StdRng::seed_from_u64(seed).fill_bytes(&mut buffer);
    GrayImage::from_vec_u8(width, height, buffer).unwrap()
}

/// Deterministic non-random test image, sample = (r*7 + c*11) % 256.
pub fn gradient_image(width: u32, height: u32) -> GrayImage {
    let buffer = (0..height)
        .flat_map(|row| (0..width).map(move |col| ((row * 7 + col * 11) % 256) as u8))
        .collect();
    GrayImage::from_vec_u8(width, height, buffer).unwrap()
}

pub fn square_kernel(side: u32, coefficients: &[f64]) -> Kernel {
    Kernel::new(side, side, coefficients.to_vec()).unwrap()
}

/// Reference convolution written independently of the engines:
/// zero-padding, f64 accumulator, half-away-from-zero rounding,
/// saturation to [0, 255].
pub fn reference_convolve(image: &GrayImage, kernel: &Kernel) -> Vec<u8> {
    let width = image.width() as i64;
    let height = image.height() as i64;
    let buffer = image.buffer();
    let anchor_row = (kernel.height() / 2) as i64;
    let anchor_col = (kernel.width() / 2) as i64;

    let mut out = Vec::with_capacity((width * height) as usize);
    for row in 0..height {
        for col in 0..width {
            let mut acc = 0.;
            for ki in 0..kernel.height() as i64 {
                for kj in 0..kernel.width() as i64 {
                    let src_row = row + ki - anchor_row;
                    let src_col = col + kj - anchor_col;
                    if src_row < 0 || src_col < 0 || src_row >= height || src_col >= width {
                        continue;
                    }
                    let coefficient =
                        kernel.coefficients()[(ki * kernel.width() as i64 + kj) as usize];
                    let sample = buffer[(src_row * width + src_col) as usize] as f64;
                    acc += coefficient * sample;
                }
            }
            out.push(acc.round().clamp(0., 255.) as u8);
        }
    }
    out
}
