use std::path::Path;

use crate::grid::VoxelGrid;

/// Producers of occupancy grids from files on disk.
///
/// Schematic-format parsers and dataset readers implement this to feed the
/// classification engine; the engine itself never touches the filesystem.
pub trait GridSource {
    /// Error type of the underlying parser.
    type Error;

    /// Loads a binary occupancy grid from `path`.
    fn load_occupancy(&mut self, path: &Path) -> Result<VoxelGrid<u8>, Self::Error>;
}
