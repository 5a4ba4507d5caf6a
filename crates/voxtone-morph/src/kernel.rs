use crate::error::MorphError;

/// A quarter-turn rotation of a kernel in its horizontal plane.
///
/// The grid itself is never rotated; rotating the kernel instead keeps every
/// detection output aligned to the world axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation.
    R0,
    /// 90 degrees.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees.
    R270,
}

impl Rotation {
    /// All four quarter-turns, in order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    fn quarter_turns(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }
}

/// A 3×3×3 binary structuring element.
///
/// Kernels are authored with the vertical axis as the outermost index, so a
/// literal reads as three stacked horizontal slices (bottom, middle, top)
/// and the two inner indices span the ground plane. Grids store the vertical
/// axis last; [`Kernel::grid_offsets`] performs that axis remap. Skipping
/// the remap does not fail — it silently matches the wrong neighbors — so
/// all matching goes through `grid_offsets`.
///
/// Every set cell is a required-occupied neighbor offset. A kernel is
/// immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel {
    cells: [[[u8; 3]; 3]; 3],
}

impl Kernel {
    /// Cells per kernel; the only accepted flat-data length.
    pub const CELLS: usize = 27;

    /// Builds a kernel from a literal, given as (vertical, a, b).
    ///
    /// The 3×3×3 shape is enforced by the type.
    pub fn from_cells(cells: [[[u8; 3]; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Builds a kernel from flat data in (vertical, a, b) order.
    ///
    /// # Errors
    ///
    /// Fails unless the slice holds exactly [`Kernel::CELLS`] cells. This is
    /// the registration-time shape check for kernels that arrive from
    /// configuration rather than from literals.
    pub fn from_slice(data: &[u8]) -> Result<Self, MorphError> {
        if data.len() != Self::CELLS {
            return Err(MorphError::InvalidKernelLength(data.len()));
        }
        let mut cells = [[[0u8; 3]; 3]; 3];
        for v in 0..3 {
            for a in 0..3 {
                for b in 0..3 {
                    cells[v][a][b] = data[(v * 3 + a) * 3 + b];
                }
            }
        }
        Ok(Self { cells })
    }

    /// Number of active cells; the match threshold of the erosion test.
    pub fn weight(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|&&c| c != 0)
            .count()
    }

    /// Returns this kernel rotated by the given quarter-turn in its
    /// horizontal plane, vertical axis fixed.
    pub fn rotated(&self, rotation: Rotation) -> Kernel {
        let mut cells = self.cells;
        for _ in 0..rotation.quarter_turns() {
            let prev = cells;
            for (v, slice) in cells.iter_mut().enumerate() {
                for (i, row) in slice.iter_mut().enumerate() {
                    for (j, cell) in row.iter_mut().enumerate() {
                        *cell = prev[v][j][2 - i];
                    }
                }
            }
        }
        Kernel { cells }
    }

    /// Required-occupied neighbor offsets in grid axis order (d, h, w),
    /// relative to the center voxel.
    ///
    /// This is where the authoring convention (vertical outermost) is
    /// remapped to the grid convention (vertical last): an active cell at
    /// (v, a, b) becomes the offset (a-1, b-1, v-1).
    pub fn grid_offsets(&self) -> Vec<[isize; 3]> {
        let mut offsets = Vec::with_capacity(self.weight());
        for v in 0..3 {
            for a in 0..3 {
                for b in 0..3 {
                    if self.cells[v][a][b] != 0 {
                        offsets.push([a as isize - 1, b as isize - 1, v as isize - 1]);
                    }
                }
            }
        }
        offsets
    }
}
