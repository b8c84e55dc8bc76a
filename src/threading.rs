use std::marker::PhantomData;

use rayon::prelude::*;

use crate::convolution::partition::WorkUnit;
use crate::errors::ConvolveError;
use crate::image_view::GrayImageViewMut;

/// How a set of work units is dispatched across threads.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Parallelism {
    /// Execute every unit on the calling thread.
    CallerThread,
    /// Execute units on the global rayon pool, which is lazily
    /// created, process-scoped and sized to the hardware thread count.
    HardwareWide,
    /// Execute units on a dedicated pool with the given thread count,
    /// built for this invocation only.
    Fixed(usize),
}

/// Execute all units and block until every one has completed. The
/// first observed failure is returned after the join; no unit is ever
/// executed twice.
pub(crate) fn execute_units<F>(
    units: Vec<WorkUnit>,
    parallelism: Parallelism,
    task: F,
) -> Result<(), ConvolveError>
where
    F: Fn(WorkUnit) -> Result<(), ConvolveError> + Send + Sync,
{
    match parallelism {
        Parallelism::CallerThread => units.into_iter().try_for_each(task),
        Parallelism::HardwareWide => {
            // with_max_len(1) keeps one rayon job per work unit, so
            // the unit granularity chosen by the partitioner is what
            // the pool actually schedules.
            units
                .into_par_iter()
                .with_max_len(1)
                .try_for_each(|unit| task(unit))
        }
        Parallelism::Fixed(num_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?;
            pool.install(|| {
                units
                    .into_par_iter()
                    .with_max_len(1)
                    .try_for_each(|unit| task(unit))
            })
        }
    }
}

/// Shared handle for concurrent writes into one destination image.
///
/// Soundness rests on the partitioner's guarantee that work units are
/// pairwise disjoint: no two workers ever write the same pixel, and
/// the join at the end of [execute_units] publishes all writes to the
/// caller.
pub(crate) struct OutputCells<'a> {
    ptr: *mut u8,
    stride: usize,
    width: u32,
    height: u32,
    _marker: PhantomData<&'a mut [u8]>,
}

unsafe impl Send for OutputCells<'_> {}
unsafe impl Sync for OutputCells<'_> {}

impl<'a> OutputCells<'a> {
    pub fn new(view: &'a mut GrayImageViewMut) -> Self {
        let width = view.width();
        let height = view.height();
        let stride = view.stride() as usize;
        Self {
            ptr: view.buffer_mut().as_mut_ptr(),
            stride,
            width,
            height,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// No other thread may write the same (row, col) cell during the
    /// lifetime of this handle.
    #[inline(always)]
    pub unsafe fn write(&self, row: u32, col: u32, value: u8) {
        debug_assert!(row < self.height && col < self.width);
        *self.ptr.add(row as usize * self.stride + col as usize) = value;
    }
}
