use rayon::prelude::*;

/// Controls how a matching pass is executed on the host.
///
/// The engine is a pure batch transform, so the strategy never changes a
/// result, only where the work runs. It is the pluggable execution seam:
/// callers pick it once at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool, splitting work across vertical
    /// slabs of the grid (and across grids for batch calls).
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small grids or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Applies `f` to each consecutive `slab`-sized chunk of `data` together
/// with its chunk index.
///
/// Erosion uses this to hand every depth slab of the output to one task.
pub fn for_each_slab<T, F>(strategy: ExecutionStrategy, data: &mut [T], slab: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if slab == 0 {
        return;
    }
    match strategy {
        ExecutionStrategy::Serial => data
            .chunks_exact_mut(slab)
            .enumerate()
            .for_each(|(i, chunk)| f(i, chunk)),
        ExecutionStrategy::Parallel => data
            .par_chunks_exact_mut(slab)
            .enumerate()
            .for_each(|(i, chunk)| f(i, chunk)),
    }
}

/// Applies `f` to each (source, destination) cell pair.
pub fn for_each_cell<T1, T2, F>(strategy: ExecutionStrategy, src: &[T1], dst: &mut [T2], f: F)
where
    T1: Sync,
    T2: Send,
    F: Fn(&T1, &mut T2) + Send + Sync,
{
    match strategy {
        ExecutionStrategy::Serial => src.iter().zip(dst.iter_mut()).for_each(|(s, d)| f(s, d)),
        ExecutionStrategy::Parallel => src
            .par_iter()
            .zip(dst.par_iter_mut())
            .for_each(|(s, d)| f(s, d)),
    }
}
