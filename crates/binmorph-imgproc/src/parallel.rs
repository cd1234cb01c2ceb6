use rayon::prelude::*;

/// Controls how row-wise operations are executed.
///
/// Every strategy produces exactly the same output; only the scheduling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ParallelRows,
}

/// Fill `dst` row by row, calling `f(y, row)` for every row of `width` elements.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `dst` - The destination buffer in row-major order.
/// * `width` - The number of elements per row.
/// * `f` - Writes the row with index `y`.
pub fn for_each_row<T, F>(strategy: ExecutionStrategy, dst: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if width == 0 {
        return;
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(width)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(width)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
    }
}
