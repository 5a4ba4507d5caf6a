use crate::grid::GridSize;

/// An error type for grid construction and grid-level operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Error when the data length does not match the grid volume.
    #[error("Data length ({0}) does not match the grid volume ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two grids that must share a shape do not.
    #[error("Grid sizes do not match: {0} vs {1}")]
    SizeMismatch(GridSize, GridSize),

    /// Error when a merge is requested over zero layers.
    #[error("Cannot merge an empty list of layers")]
    EmptyMerge,
}
