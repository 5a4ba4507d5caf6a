//! Built-in structuring-element templates.
//!
//! The kernels are authored as literal 3×3×3 patterns, vertical axis
//! outermost: each block of three rows is one horizontal slice (bottom,
//! middle, top). Pillar patterns live entirely in the middle slice and are
//! evaluated at all four rotations; the wall pattern points up the vertical
//! axis and is evaluated once.

use crate::error::MorphError;
use crate::kernel::{Kernel, Rotation};
use crate::template::Template;

/// Wall segments: an occupied cell whose upward neighbor is occupied.
///
/// Not rotated — the wall axis is the vertical axis, which rotations leave
/// fixed anyway.
pub fn wall() -> Result<Template, MorphError> {
    let up_pair = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
    ]);

    Template::new("wall", vec![up_pair], vec![], vec![Rotation::R0])
}

/// Pillar detector A: an isolated pair of horizontally adjacent cells.
///
/// The excludes reject a cell whose pair extends into a longer run behind
/// it or into an L-shaped corner, so the interior of a multi-cell run is
/// never tagged — only run ends survive.
pub fn pillar_pair() -> Result<Template, MorphError> {
    let pair = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 1, 1], [0, 0, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);

    let trailing_pair = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 0, 0], [1, 1, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);
    let corner_before = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 1, 0], [0, 1, 1], [0, 0, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);
    let corner_after = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 1, 1], [0, 1, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);

    Template::new(
        "pillar-pair",
        vec![pair],
        vec![trailing_pair, corner_before, corner_after],
        Rotation::ALL.to_vec(),
    )
}

/// Pillar detector B: an L-shaped 3-cell corner.
///
/// Kept as an independent alternative to [`pillar_pair`], not folded into
/// it; the two are merged downstream, detector B last.
pub fn pillar_corner() -> Result<Template, MorphError> {
    let corner = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 1, 0], [0, 1, 1], [0, 0, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);

    let trailing_pair = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 0, 0], [1, 1, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);
    let straight_line = Kernel::from_cells([
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
        [[0, 0, 0], [0, 1, 0], [0, 1, 0]],
        [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
    ]);

    Template::new(
        "pillar-corner",
        vec![corner],
        vec![trailing_pair, straight_line],
        Rotation::ALL.to_vec(),
    )
}
