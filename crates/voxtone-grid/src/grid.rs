use num_traits::Zero;

use crate::error::GridError;
use crate::tone::Tone;

/// Grid size in voxels.
///
/// The axis order is (horizontal, horizontal, vertical): `depth` and
/// `height` span the ground plane and `width` is the world-up axis.
///
/// # Examples
///
/// ```
/// use voxtone_grid::GridSize;
///
/// let size = GridSize {
///     depth: 16,
///     height: 16,
///     width: 8,
/// };
///
/// assert_eq!(size.volume(), 2048);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Extent along the first horizontal axis.
    pub depth: usize,
    /// Extent along the second horizontal axis.
    pub height: usize,
    /// Extent along the vertical axis.
    pub width: usize,
}

impl GridSize {
    /// Number of voxels in a grid of this size.
    pub fn volume(&self) -> usize {
        self.depth * self.height * self.width
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ depth: {}, height: {}, width: {} }}",
            self.depth, self.height, self.width
        )
    }
}

impl From<[usize; 3]> for GridSize {
    fn from(size: [usize; 3]) -> Self {
        GridSize {
            depth: size[0],
            height: size[1],
            width: size[2],
        }
    }
}

/// A dense 3D voxel grid.
///
/// Cells are stored row-major as a flat vector with index
/// `(d * height + h) * width + w`. Occupancy grids hold values in {0, 1};
/// tagged grids hold [`Tone`] values in {0, 1, 2, 3}.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid<T> {
    size: GridSize,
    data: Vec<T>,
}

impl<T> VoxelGrid<T> {
    /// Creates a grid from a size and a flat data vector.
    ///
    /// # Errors
    ///
    /// Fails fast if the data length does not match the grid volume.
    pub fn from_shape_vec(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != size.volume() {
            return Err(GridError::InvalidDataLength(data.len(), size.volume()));
        }
        Ok(Self { size, data })
    }

    /// Returns the grid size.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cells as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the cells as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn index(&self, d: usize, h: usize, w: usize) -> usize {
        (d * self.size.height + h) * self.size.width + w
    }
}

impl<T: Copy> VoxelGrid<T> {
    /// Creates a grid of the given size with every cell set to `val`.
    pub fn from_size_val(size: GridSize, val: T) -> Self {
        Self {
            size,
            data: vec![val; size.volume()],
        }
    }

    /// Returns the cell value at (d, h, w).
    pub fn get(&self, d: usize, h: usize, w: usize) -> T {
        debug_assert!(d < self.size.depth && h < self.size.height && w < self.size.width);
        self.data[self.index(d, h, w)]
    }

    /// Sets the cell value at (d, h, w).
    pub fn set(&mut self, d: usize, h: usize, w: usize, val: T) {
        debug_assert!(d < self.size.depth && h < self.size.height && w < self.size.width);
        let idx = self.index(d, h, w);
        self.data[idx] = val;
    }

    /// Returns the cell value at signed coordinates, or `None` out of bounds.
    ///
    /// Neighborhood tests use this to treat reads past the grid extent as
    /// unoccupied.
    pub fn get_offset(&self, d: isize, h: isize, w: isize) -> Option<T> {
        if d < 0
            || h < 0
            || w < 0
            || d >= self.size.depth as isize
            || h >= self.size.height as isize
            || w >= self.size.width as isize
        {
            return None;
        }
        Some(self.data[self.index(d as usize, h as usize, w as usize)])
    }
}

impl<T: Copy + Zero> VoxelGrid<T> {
    /// Creates a zero-filled grid of the given size.
    pub fn zeros(size: GridSize) -> Self {
        Self::from_size_val(size, T::zero())
    }
}

impl VoxelGrid<u8> {
    /// Renders the grid as ASCII art, one horizontal slice per vertical
    /// level, top level first. Cells are drawn with the [`Tone`] glyphs.
    ///
    /// This is useful for inspecting tagged grids in the terminal.
    pub fn to_ascii_layers(&self) -> String {
        let mut out = String::new();
        for w in (0..self.size.width).rev() {
            out.push_str(&format!("level {w}\n"));
            for d in 0..self.size.depth {
                for h in 0..self.size.height {
                    let c = match Tone::from_value(self.get(d, h, w)) {
                        Some(tone) => tone.glyph(),
                        None => '?',
                    };
                    out.push(c);
                }
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape_vec() {
        let grid = VoxelGrid::from_shape_vec([2, 2, 2].into(), vec![0u8; 8]).unwrap();
        assert_eq!(grid.size().volume(), 8);
    }

    #[test]
    fn test_from_shape_vec_bad_length() {
        let res = VoxelGrid::from_shape_vec([2, 2, 2].into(), vec![0u8; 7]);
        assert_eq!(res, Err(GridError::InvalidDataLength(7, 8)));
    }

    #[test]
    fn test_get_set() {
        let mut grid = VoxelGrid::<u8>::zeros([3, 4, 5].into());
        grid.set(2, 3, 4, 7);
        assert_eq!(grid.get(2, 3, 4), 7);
        assert_eq!(grid.get(0, 0, 0), 0);
    }

    #[test]
    fn test_get_offset_out_of_bounds() {
        let grid = VoxelGrid::<u8>::from_size_val([2, 2, 2].into(), 1);
        assert_eq!(grid.get_offset(-1, 0, 0), None);
        assert_eq!(grid.get_offset(0, 0, 2), None);
        assert_eq!(grid.get_offset(1, 1, 1), Some(1));
    }

    #[test]
    fn test_ascii_layers() {
        let mut grid = VoxelGrid::<u8>::zeros([1, 2, 1].into());
        grid.set(0, 0, 0, 1);
        grid.set(0, 1, 0, 3);
        let out = grid.to_ascii_layers();
        assert!(out.contains("level 0"));
        assert!(out.contains("#O"));
    }
}
