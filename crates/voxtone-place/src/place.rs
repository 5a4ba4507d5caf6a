use rand::Rng;
use serde::{Deserialize, Serialize};

use voxtone_grid::{Tone, VoxelGrid};

use crate::error::PlaceError;
use crate::palette::Palette;

/// One block of a placement plan, in world coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPlacement {
    /// Block identifier resolved from the palette.
    pub id: String,
    /// World x.
    pub x: i32,
    /// World y (the up axis).
    pub y: i32,
    /// World z.
    pub z: i32,
}

/// Where and how a tagged grid is placed in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOptions {
    /// World x of the grid origin.
    pub offset_x: i32,
    /// World z of the grid origin.
    pub offset_y: i32,
    /// World y the bottom grid layer lands on.
    pub ground_y: i32,
    /// Emit the background identifier for untagged cells instead of
    /// omitting them.
    pub clear_space: bool,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            ground_y: -61,
            clear_space: true,
        }
    }
}

/// Consumers of placement plans (world servers, schematic writers).
///
/// A plan is built from an immutable borrow of the tagged grid, so a failed
/// submission can never corrupt the grid or force a reclassification: retry
/// with the same plan.
pub trait PlacementSink {
    /// Error type of the underlying transport.
    type Error;

    /// Delivers a batch of placements.
    fn submit(&mut self, blocks: &[BlockPlacement]) -> Result<(), Self::Error>;
}

/// Resolves a tagged grid into a placement plan.
///
/// The grid's (d, h, w) axes map to world (x, z, y): the grid's vertical
/// axis is the world up axis. Background cells are skipped entirely unless
/// `options.clear_space` asks for explicit background blocks. Alternatives
/// in the palette are resolved through `rng` — randomness stays on this
/// side of the boundary, never inside the matching engine.
///
/// # Errors
///
/// Fails on a cell value with no palette entry or on an empty alternative
/// set.
pub fn plan_blocks<R: Rng + ?Sized>(
    grid: &VoxelGrid<u8>,
    palette: &Palette,
    options: &PlaceOptions,
    rng: &mut R,
) -> Result<Vec<BlockPlacement>, PlaceError> {
    let size = grid.size();
    let mut blocks = Vec::new();

    for d in 0..size.depth {
        for h in 0..size.height {
            for w in 0..size.width {
                let value = grid.get(d, h, w);
                let tone = Tone::from_value(value).ok_or(PlaceError::UnknownTag(value))?;
                if !options.clear_space && tone == Tone::Background {
                    continue;
                }
                let id = palette.entry(tone).pick(rng)?.to_string();
                blocks.push(BlockPlacement {
                    id,
                    x: d as i32 + options.offset_x,
                    y: w as i32 + options.ground_y,
                    z: h as i32 + options.offset_y,
                });
            }
        }
    }

    log::debug!("planned {} block placements", blocks.len());
    Ok(blocks)
}
