use crate::errors::ConvolveError;
use crate::image_view::GrayImageView;
use crate::kernel::Kernel;

/// Sample with zero-padding: coordinates outside of the image
/// contribute 0 to the accumulator.
#[inline(always)]
fn sample(src: &GrayImageView, row: i64, col: i64) -> f64 {
    if row < 0 || col < 0 || row >= src.height() as i64 || col >= src.width() as i64 {
        0.
    } else {
        src.get(row as u32, col as u32) as f64
    }
}

/// Cross-correlation of the kernel with the source image at one
/// output coordinate.
///
/// The f64 accumulator is rounded half-away-from-zero and saturated
/// to `[0, 255]` before narrowing to u8.
#[inline]
pub(crate) fn convolve_pixel(
    src: &GrayImageView,
    kernel: &Kernel,
    row: u32,
    col: u32,
) -> Result<u8, ConvolveError> {
    let (anchor_row, anchor_col) = kernel.anchor();
    let top = row as i64 - anchor_row as i64;
    let left = col as i64 - anchor_col as i64;

    let mut acc = 0.;
    for kernel_row in 0..kernel.height() {
        let src_row = top + kernel_row as i64;
        for kernel_col in 0..kernel.width() {
            let src_col = left + kernel_col as i64;
            acc += kernel.get(kernel_row, kernel_col) * sample(src, src_row, src_col);
        }
    }

    if acc.is_nan() {
        return Err(ConvolveError::NanAccumulator);
    }
    // f64::round() rounds half-way cases away from zero.
    Ok(acc.round().clamp(0., 255.) as u8)
}
