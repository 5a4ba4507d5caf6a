#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for grid construction and grid-level operations.
pub mod error;
pub use error::GridError;

/// dense voxel grid container.
pub mod grid;
pub use grid::{GridSize, VoxelGrid};

/// layered merge and other elementwise grid operations.
pub mod ops;

/// ingestion boundary for external grid producers.
pub mod source;
pub use source::GridSource;

/// structural tone labels.
pub mod tone;
pub use tone::Tone;
