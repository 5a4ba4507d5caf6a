#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// catalog of built-in structuring-element templates.
pub mod catalog;

/// tone composition over template detections.
pub mod compose;
pub use compose::ToneComposer;

/// morphological erosion over voxel grids.
pub mod erosion;
pub use erosion::erode;

/// error types for the matching engine.
pub mod error;
pub use error::MorphError;

/// structuring elements and their rotations.
pub mod kernel;
pub use kernel::{Kernel, Rotation};

/// parallel execution utilities.
pub mod parallel;
pub use parallel::ExecutionStrategy;

/// include/exclude selective mask combination.
pub mod select;
pub use select::select;

/// templates: named kernel sets with a rotation schedule.
pub mod template;
pub use template::Template;

/// occupancy thresholding.
pub mod threshold;
pub use threshold::threshold_binary;
