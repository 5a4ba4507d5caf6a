use num_traits::Zero;

use crate::error::GridError;
use crate::grid::VoxelGrid;

/// Overwrites `dst` cells with `src` cells wherever `src` is nonzero.
///
/// Zero cells of `src` leave `dst` untouched, so stacking overlays encodes
/// precedence: the last overlay wins.
///
/// # Errors
///
/// Fails if the grids do not share a size.
pub fn overlay<T>(dst: &mut VoxelGrid<T>, src: &VoxelGrid<T>) -> Result<(), GridError>
where
    T: Copy + PartialEq + Zero,
{
    if dst.size() != src.size() {
        return Err(GridError::SizeMismatch(dst.size(), src.size()));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .for_each(|(d, s)| {
            if *s != T::zero() {
                *d = *s;
            }
        });

    Ok(())
}

/// Merges layers into a new grid: later layers overwrite earlier ones
/// wherever they are nonzero.
///
/// The merge is not commutative; the layer order is the precedence order.
/// The result is a fresh grid and no operand buffer is aliased.
///
/// # Errors
///
/// Fails on an empty layer list or on a size mismatch between layers.
///
/// # Examples
///
/// ```
/// use voxtone_grid::{ops, GridSize, VoxelGrid};
///
/// let size = GridSize { depth: 1, height: 1, width: 2 };
/// let base = VoxelGrid::from_shape_vec(size, vec![1u8, 1]).unwrap();
/// let tags = VoxelGrid::from_shape_vec(size, vec![0u8, 2]).unwrap();
///
/// let merged = ops::merge(&[&base, &tags]).unwrap();
/// assert_eq!(merged.as_slice(), &[1, 2]);
/// ```
pub fn merge<T>(layers: &[&VoxelGrid<T>]) -> Result<VoxelGrid<T>, GridError>
where
    T: Copy + PartialEq + Zero,
{
    let (first, rest) = layers.split_first().ok_or(GridError::EmptyMerge)?;

    let mut merged = (*first).clone();
    for layer in rest {
        overlay(&mut merged, layer)?;
    }

    Ok(merged)
}

/// Multiplies every cell of `src` by `factor` into `dst`.
///
/// Lifts a binary detection grid to a tagged grid, e.g. scaling a wall mask
/// by the wall tone value.
///
/// # Errors
///
/// Fails if the grids do not share a size.
pub fn scale<T>(src: &VoxelGrid<T>, dst: &mut VoxelGrid<T>, factor: T) -> Result<(), GridError>
where
    T: Copy + std::ops::Mul<Output = T>,
{
    if dst.size() != src.size() {
        return Err(GridError::SizeMismatch(src.size(), dst.size()));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .for_each(|(d, s)| *d = *s * factor);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSize;

    fn grid(data: &[u8]) -> VoxelGrid<u8> {
        let size = GridSize {
            depth: 1,
            height: 1,
            width: data.len(),
        };
        VoxelGrid::from_shape_vec(size, data.to_vec()).unwrap()
    }

    #[test]
    fn test_overlay_nonzero_wins() {
        let mut dst = grid(&[1, 2, 0, 3]);
        let src = grid(&[0, 9, 9, 0]);
        overlay(&mut dst, &src).unwrap();
        assert_eq!(dst.as_slice(), &[1, 9, 9, 3]);
    }

    #[test]
    fn test_merge_idempotent() {
        let g = grid(&[0, 1, 2, 0, 3]);
        let merged = merge(&[&g, &g]).unwrap();
        assert_eq!(merged, g);
    }

    #[test]
    fn test_merge_not_commutative() {
        let a = grid(&[1, 0]);
        let b = grid(&[2, 0]);
        let ab = merge(&[&a, &b]).unwrap();
        let ba = merge(&[&b, &a]).unwrap();
        assert_eq!(ab.as_slice(), &[2, 0]);
        assert_eq!(ba.as_slice(), &[1, 0]);
    }

    #[test]
    fn test_merge_empty() {
        let res = merge::<u8>(&[]);
        assert_eq!(res, Err(GridError::EmptyMerge));
    }

    #[test]
    fn test_merge_size_mismatch() {
        let a = grid(&[1, 0]);
        let b = grid(&[1, 0, 0]);
        let res = merge(&[&a, &b]);
        assert!(matches!(res, Err(GridError::SizeMismatch(_, _))));
    }

    #[test]
    fn test_scale() {
        let src = grid(&[0, 1, 1]);
        let mut dst = grid(&[9, 9, 9]);
        scale(&src, &mut dst, 3).unwrap();
        assert_eq!(dst.as_slice(), &[0, 3, 3]);
    }
}
