use voxtone_grid::{GridError, VoxelGrid};

use crate::erosion::erode;
use crate::error::MorphError;
use crate::kernel::Kernel;
use crate::parallel::ExecutionStrategy;

/// Writes into `dst` the voxels highlighted by any include kernel and by no
/// exclude kernel: `OR(include erosions) AND NOT OR(exclude erosions)`.
///
/// An empty include list yields an all-zero result by policy, not an error.
/// An empty exclude list leaves the include mask untouched. Each call is a
/// pure function of its arguments; nothing is shared between calls.
///
/// # Errors
///
/// Fails on a size mismatch or on a kernel with no active cells.
pub fn select(
    src: &VoxelGrid<u8>,
    dst: &mut VoxelGrid<u8>,
    include: &[Kernel],
    exclude: &[Kernel],
    strategy: ExecutionStrategy,
) -> Result<(), MorphError> {
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(src.size(), dst.size()).into());
    }

    dst.as_slice_mut().fill(0);
    if include.is_empty() {
        return Ok(());
    }

    let mut mask = VoxelGrid::<u8>::zeros(src.size());

    for kernel in include {
        erode(src, &mut mask, kernel, strategy)?;
        dst.as_slice_mut()
            .iter_mut()
            .zip(mask.as_slice().iter())
            .for_each(|(d, m)| *d |= *m);
    }

    for kernel in exclude {
        erode(src, &mut mask, kernel, strategy)?;
        dst.as_slice_mut()
            .iter_mut()
            .zip(mask.as_slice().iter())
            .for_each(|(d, m)| {
                if *m != 0 {
                    *d = 0;
                }
            });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_kernel() -> Kernel {
        Kernel::from_cells([
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            [[0, 0, 0], [0, 1, 1], [0, 0, 0]],
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        ])
    }

    fn trailing_pair_kernel() -> Kernel {
        Kernel::from_cells([
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            [[0, 0, 0], [1, 1, 0], [0, 0, 0]],
            [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        ])
    }

    fn run_grid() -> VoxelGrid<u8> {
        // straight 3-cell run along h
        let mut grid = VoxelGrid::<u8>::zeros([3, 5, 1].into());
        grid.set(1, 1, 0, 1);
        grid.set(1, 2, 0, 1);
        grid.set(1, 3, 0, 1);
        grid
    }

    #[test]
    fn test_empty_include_all_zero() {
        let grid = run_grid();
        let mut out = VoxelGrid::<u8>::from_size_val(grid.size(), 9);
        select(&grid, &mut out, &[], &[pair_kernel()], ExecutionStrategy::Serial).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_empty_exclude_equals_include_mask() {
        let grid = run_grid();
        let kernel = pair_kernel();

        let mut selected = VoxelGrid::<u8>::zeros(grid.size());
        select(&grid, &mut selected, &[kernel], &[], ExecutionStrategy::Serial).unwrap();

        let mut eroded = VoxelGrid::<u8>::zeros(grid.size());
        erode(&grid, &mut eroded, &kernel, ExecutionStrategy::Serial).unwrap();

        assert_eq!(selected, eroded);
    }

    #[test]
    fn test_exclude_removes_matches() {
        let grid = run_grid();

        let mut out = VoxelGrid::<u8>::zeros(grid.size());
        select(
            &grid,
            &mut out,
            &[pair_kernel()],
            &[trailing_pair_kernel()],
            ExecutionStrategy::Serial,
        )
        .unwrap();

        // the pair fires at (1,1) and (1,2); the trailing pair removes (1,2)
        assert_eq!(out.get(1, 1, 0), 1);
        assert_eq!(out.get(1, 2, 0), 0);
        assert_eq!(out.get(1, 3, 0), 0);
    }

    #[test]
    fn test_include_union() {
        let grid = run_grid();

        let mut out = VoxelGrid::<u8>::zeros(grid.size());
        select(
            &grid,
            &mut out,
            &[pair_kernel(), trailing_pair_kernel()],
            &[],
            ExecutionStrategy::Serial,
        )
        .unwrap();

        // pair tags (1,1) and (1,2); trailing pair tags (1,2) and (1,3)
        assert_eq!(out.get(1, 1, 0), 1);
        assert_eq!(out.get(1, 2, 0), 1);
        assert_eq!(out.get(1, 3, 0), 1);
        assert_eq!(out.get(0, 1, 0), 0);
    }
}
