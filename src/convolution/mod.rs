pub(crate) mod partition;
mod pixel;

use crate::errors::ConvolveError;
use crate::image::GrayImage;
use crate::image_view::{GrayImageView, GrayImageViewMut};
use crate::kernel::Kernel;
use crate::threading::{execute_units, OutputCells, Parallelism};

use self::partition::WorkUnit;
use self::pixel::convolve_pixel;

/// Strategy used to partition the output grid and dispatch the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One pass over the full grid on the calling thread.
    Seq,
    /// One work unit per output row, hardware-wide parallelism.
    Row,
    /// One work unit per output column, hardware-wide parallelism.
    Col,
    /// Square tiles consumed by a caller-sized worker pool.
    Grid,
    /// One work unit per output pixel, hardware-wide parallelism.
    ///
    /// Deliberately pathological: task dispatch overhead dominates
    /// the per-unit work. Exists as a contrast point for benchmarks.
    Pix,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Seq => "seq",
            Mode::Row => "row",
            Mode::Col => "col",
            Mode::Grid => "grid",
            Mode::Pix => "pix",
        }
    }
}

/// Options of convolution. Only the [Mode::Grid] engine reads
/// `block_size` and `x_workers`; all other modes ignore them.
#[derive(Debug, Clone, Copy)]
pub struct ConvolveOptions {
    pub mode: Mode,
    /// Side of the square tiles of the grid engine.
    pub block_size: u32,
    /// Count of workers of the grid engine.
    pub x_workers: usize,
}

impl Default for ConvolveOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Grid,
            block_size: 128,
            x_workers: rayon::current_num_threads(),
        }
    }
}

impl ConvolveOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// Convolve the source image into an already allocated destination
/// image of identical dimensions.
///
/// All validation happens before the first write to the destination;
/// on error the destination content is unspecified but no pixel is
/// ever written by two workers.
pub fn convolve_into(
    src_view: &GrayImageView,
    dst_view: &mut GrayImageViewMut,
    kernel: &Kernel,
    options: &ConvolveOptions,
) -> Result<(), ConvolveError> {
    if src_view.width() != dst_view.width() || src_view.height() != dst_view.height() {
        return Err(ConvolveError::DifferentDimensions);
    }
    if buffers_overlap(src_view, dst_view) {
        return Err(ConvolveError::OverlappingBuffers);
    }

    let height = src_view.height();
    let width = src_view.width();
    let (units, parallelism) = match options.mode {
        Mode::Seq => (partition::full_grid(height, width), Parallelism::CallerThread),
        Mode::Row => (partition::per_row(height, width), Parallelism::HardwareWide),
        Mode::Col => (partition::per_col(height, width), Parallelism::HardwareWide),
        Mode::Pix => (partition::per_pixel(height, width), Parallelism::HardwareWide),
        Mode::Grid => {
            if options.block_size == 0 {
                return Err(ConvolveError::InvalidBlockSize);
            }
            if options.x_workers == 0 {
                return Err(ConvolveError::InvalidWorkerCount);
            }
            (
                partition::tiles(height, width, options.block_size),
                Parallelism::Fixed(options.x_workers),
            )
        }
    };

    let cells = OutputCells::new(dst_view);
    execute_units(units, parallelism, |unit: WorkUnit| {
        for row in unit.row_start..unit.row_end {
            for col in unit.col_start..unit.col_end {
                let value = convolve_pixel(src_view, kernel, row, col)?;
                // Units are pairwise disjoint, so this cell has
                // exactly one writer.
                unsafe { cells.write(row, col, value) };
            }
        }
        Ok(())
    })
}

/// Sequential baseline: the full grid is computed on the calling
/// thread.
pub fn apply_seq(src_view: &GrayImageView, kernel: &Kernel) -> Result<GrayImage, ConvolveError> {
    apply(src_view, kernel, &ConvolveOptions::new(Mode::Seq))
}

/// Row-partitioned engine: one work unit per output row, executed on
/// the global rayon pool.
pub fn apply_row(src_view: &GrayImageView, kernel: &Kernel) -> Result<GrayImage, ConvolveError> {
    apply(src_view, kernel, &ConvolveOptions::new(Mode::Row))
}

/// Column-partitioned engine: one work unit per output column,
/// executed on the global rayon pool.
pub fn apply_col(src_view: &GrayImageView, kernel: &Kernel) -> Result<GrayImage, ConvolveError> {
    apply(src_view, kernel, &ConvolveOptions::new(Mode::Col))
}

/// Grid-partitioned engine: `block_size`×`block_size` tiles consumed
/// by a dedicated pool of `x_workers` threads.
pub fn apply_grid(
    src_view: &GrayImageView,
    kernel: &Kernel,
    block_size: u32,
    x_workers: usize,
) -> Result<GrayImage, ConvolveError> {
    let options = ConvolveOptions {
        mode: Mode::Grid,
        block_size,
        x_workers,
    };
    apply(src_view, kernel, &options)
}

/// Pixel-partitioned engine: one work unit per output pixel.
pub fn apply_pix(src_view: &GrayImageView, kernel: &Kernel) -> Result<GrayImage, ConvolveError> {
    apply(src_view, kernel, &ConvolveOptions::new(Mode::Pix))
}

fn apply(
    src_view: &GrayImageView,
    kernel: &Kernel,
    options: &ConvolveOptions,
) -> Result<GrayImage, ConvolveError> {
    // View dimensions are non-zero by construction.
    let mut dst_image = GrayImage::zeroed(src_view.width(), src_view.height());
    convolve_into(src_view, &mut dst_image.view_mut(), kernel, options)?;
    Ok(dst_image)
}

fn buffers_overlap(src_view: &GrayImageView, dst_view: &GrayImageViewMut) -> bool {
    let src = src_view.buffer().as_ptr_range();
    let dst = dst_view.buffer().as_ptr_range();
    src.start < dst.end && dst.start < src.end
}
