use voxtone_grid::{GridError, VoxelGrid};

use crate::error::MorphError;
use crate::kernel::Kernel;
use crate::parallel::{self, ExecutionStrategy};

/// Tests the kernel against every voxel of `src`, writing 1 into `dst`
/// where it fits and 0 elsewhere.
///
/// A kernel fits at a voxel iff every one of its required offsets reads an
/// occupied (nonzero) neighbor. Offsets past the grid extent read
/// unoccupied, so output and input always share a shape and a kernel that
/// needs a neighbor outside the grid never matches at the edge.
///
/// Equivalent to an integer-weighted convolution compared exactly to the
/// kernel weight, O(volume × weight).
///
/// # Errors
///
/// Fails on a size mismatch between `src` and `dst`, or on a kernel with no
/// active cells (it would match everywhere).
///
/// # Examples
///
/// ```
/// use voxtone_grid::VoxelGrid;
/// use voxtone_morph::{erode, ExecutionStrategy, Kernel};
///
/// let mut grid = VoxelGrid::<u8>::zeros([3, 3, 1].into());
/// grid.set(1, 1, 0, 1);
/// grid.set(1, 2, 0, 1);
///
/// // center cell plus its +h neighbor
/// let kernel = Kernel::from_cells([
///     [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
///     [[0, 0, 0], [0, 1, 1], [0, 0, 0]],
///     [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
/// ]);
///
/// let mut hits = VoxelGrid::<u8>::zeros(grid.size());
/// erode(&grid, &mut hits, &kernel, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(hits.get(1, 1, 0), 1);
/// assert_eq!(hits.get(1, 2, 0), 0);
/// ```
pub fn erode(
    src: &VoxelGrid<u8>,
    dst: &mut VoxelGrid<u8>,
    kernel: &Kernel,
    strategy: ExecutionStrategy,
) -> Result<(), MorphError> {
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(src.size(), dst.size()).into());
    }

    let offsets = kernel.grid_offsets();
    if offsets.is_empty() {
        return Err(MorphError::InactiveKernel);
    }

    let size = src.size();
    let slab = size.height * size.width;

    parallel::for_each_slab(strategy, dst.as_slice_mut(), slab, |d, out| {
        for h in 0..size.height {
            for w in 0..size.width {
                let fits = offsets.iter().all(|&[dd, dh, dw]| {
                    src.get_offset(d as isize + dd, h as isize + dh, w as isize + dw)
                        .is_some_and(|v| v != 0)
                });
                out[h * size.width + w] = u8::from(fits);
            }
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_kernel() -> Kernel {
        Kernel::from_cells([
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        ])
    }

    fn up_pair_kernel() -> Kernel {
        Kernel::from_cells([
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
            [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
        ])
    }

    #[test]
    fn test_center_kernel_is_identity() {
        let mut grid = VoxelGrid::<u8>::zeros([2, 3, 2].into());
        grid.set(0, 1, 1, 1);
        grid.set(1, 2, 0, 1);

        let mut hits = VoxelGrid::<u8>::zeros(grid.size());
        erode(&grid, &mut hits, &center_kernel(), ExecutionStrategy::Serial).unwrap();
        assert_eq!(hits, grid);
    }

    #[test]
    fn test_boundary_reads_unoccupied() {
        // full column: every cell but the top one has an occupied up-neighbor
        let grid = VoxelGrid::<u8>::from_size_val([1, 1, 4].into(), 1);
        let mut hits = VoxelGrid::<u8>::zeros(grid.size());
        erode(&grid, &mut hits, &up_pair_kernel(), ExecutionStrategy::Serial).unwrap();
        assert_eq!(hits.as_slice(), &[1, 1, 1, 0]);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = VoxelGrid::<u8>::zeros([4, 4, 4].into());
        for (i, c) in grid.as_slice_mut().iter_mut().enumerate() {
            *c = u8::from(i % 3 != 0);
        }

        let mut serial = VoxelGrid::<u8>::zeros(grid.size());
        let mut par = VoxelGrid::<u8>::zeros(grid.size());
        erode(&grid, &mut serial, &up_pair_kernel(), ExecutionStrategy::Serial).unwrap();
        erode(&grid, &mut par, &up_pair_kernel(), ExecutionStrategy::Parallel).unwrap();
        assert_eq!(serial, par);
    }

    #[test]
    fn test_size_mismatch() {
        let grid = VoxelGrid::<u8>::zeros([2, 2, 2].into());
        let mut hits = VoxelGrid::<u8>::zeros([2, 2, 3].into());
        let res = erode(&grid, &mut hits, &center_kernel(), ExecutionStrategy::Serial);
        assert!(matches!(res, Err(MorphError::Grid(_))));
    }

    #[test]
    fn test_inactive_kernel_rejected() {
        let grid = VoxelGrid::<u8>::zeros([2, 2, 2].into());
        let mut hits = VoxelGrid::<u8>::zeros(grid.size());
        let kernel = Kernel::from_cells([[[0; 3]; 3]; 3]);
        let res = erode(&grid, &mut hits, &kernel, ExecutionStrategy::Serial);
        assert_eq!(res, Err(MorphError::InactiveKernel));
    }
}
