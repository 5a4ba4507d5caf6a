#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the placement boundary.
pub mod error;
pub use error::PlaceError;

/// tone-indexed block palettes.
pub mod palette;
pub use palette::{Palette, PaletteEntry};

/// placement planning for tagged grids.
pub mod place;
pub use place::{plan_blocks, BlockPlacement, PlaceOptions, PlacementSink};

/// block-name to latent-vector lookup.
pub mod vectors;
pub use vectors::BlockVectors;
