use voxtone_grid::{GridError, VoxelGrid};

use crate::error::MorphError;
use crate::parallel::{self, ExecutionStrategy};

/// Thresholds a continuous occupancy grid into a binary one.
///
/// Cells strictly greater than `threshold` become 1, everything else 0.
/// This is the ingestion step that turns sampled model output into the
/// {0, 1} grids the matching engine consumes.
///
/// # Errors
///
/// Fails on a size mismatch between `src` and `dst`.
///
/// # Examples
///
/// ```
/// use voxtone_grid::{GridSize, VoxelGrid};
/// use voxtone_morph::{threshold_binary, ExecutionStrategy};
///
/// let size = GridSize { depth: 1, height: 1, width: 4 };
/// let src = VoxelGrid::from_shape_vec(size, vec![0.1f32, 0.8, 0.9, 1.0]).unwrap();
/// let mut dst = VoxelGrid::<u8>::zeros(size);
///
/// threshold_binary(&src, &mut dst, 0.8, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(dst.as_slice(), &[0, 0, 1, 1]);
/// ```
pub fn threshold_binary<T>(
    src: &VoxelGrid<T>,
    dst: &mut VoxelGrid<u8>,
    threshold: T,
    strategy: ExecutionStrategy,
) -> Result<(), MorphError>
where
    T: Copy + PartialOrd + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(src.size(), dst.size()).into());
    }

    parallel::for_each_cell(strategy, src.as_slice(), dst.as_slice_mut(), |s, d| {
        *d = u8::from(*s > threshold);
    });

    Ok(())
}
