use rayon::prelude::*;

use voxtone_grid::{ops, GridError, Tone, VoxelGrid};

use crate::catalog;
use crate::error::MorphError;
use crate::parallel::ExecutionStrategy;
use crate::template::Template;

/// Composes template detections and the base occupancy into tagged grids.
///
/// Built once: construction registers the catalog templates (validating
/// every kernel) and fixes the execution strategy. Every call afterwards is
/// a stateless batch transform of its input grid.
///
/// Tag precedence is encoded by merge order: pillar overwrites wall
/// overwrites plain fill, so a structural post wins over the wall segment
/// crossing it.
///
/// # Examples
///
/// ```
/// use voxtone_grid::VoxelGrid;
/// use voxtone_morph::{ExecutionStrategy, ToneComposer};
///
/// let composer = ToneComposer::new(ExecutionStrategy::Serial).unwrap();
///
/// // 2-cell column: the lower cell is a wall segment
/// let mut grid = VoxelGrid::<u8>::zeros([3, 3, 3].into());
/// grid.set(1, 1, 0, 1);
/// grid.set(1, 1, 1, 1);
///
/// let mut tagged = VoxelGrid::<u8>::zeros(grid.size());
/// composer.two_tone(&grid, &mut tagged).unwrap();
/// assert_eq!(tagged.get(1, 1, 0), 2);
/// assert_eq!(tagged.get(1, 1, 1), 1);
/// ```
pub struct ToneComposer {
    wall: Template,
    pillar_pair: Template,
    pillar_corner: Template,
    strategy: ExecutionStrategy,
}

impl ToneComposer {
    /// Registers the built-in templates and fixes the execution strategy.
    pub fn new(strategy: ExecutionStrategy) -> Result<Self, MorphError> {
        Ok(Self {
            wall: catalog::wall()?,
            pillar_pair: catalog::pillar_pair()?,
            pillar_corner: catalog::pillar_corner()?,
            strategy,
        })
    }

    /// Tags wall segments on top of the base occupancy.
    ///
    /// `dst` becomes `merge(src, wall · 2)`: 0 background, 1 fill, 2 wall.
    ///
    /// # Errors
    ///
    /// Fails on a size mismatch between `src` and `dst`.
    pub fn two_tone(&self, src: &VoxelGrid<u8>, dst: &mut VoxelGrid<u8>) -> Result<(), MorphError> {
        if src.size() != dst.size() {
            return Err(GridError::SizeMismatch(src.size(), dst.size()).into());
        }

        let wall_tag = self.detect_scaled(&self.wall, src, Tone::Wall)?;
        let merged = ops::merge(&[src, &wall_tag])?;
        dst.as_slice_mut().copy_from_slice(merged.as_slice());

        Ok(())
    }

    /// Tags wall segments and pillars on top of the base occupancy.
    ///
    /// `dst` becomes `merge(src, wall · 2, merge(pillarA, pillarB) · 3)`:
    /// 0 background, 1 fill, 2 wall, 3 pillar. Where wall and pillar
    /// detections overlap the pillar tag wins.
    ///
    /// # Errors
    ///
    /// Fails on a size mismatch between `src` and `dst`.
    pub fn three_tone(
        &self,
        src: &VoxelGrid<u8>,
        dst: &mut VoxelGrid<u8>,
    ) -> Result<(), MorphError> {
        if src.size() != dst.size() {
            return Err(GridError::SizeMismatch(src.size(), dst.size()).into());
        }

        let mut pair = VoxelGrid::<u8>::zeros(src.size());
        self.pillar_pair.detect(src, &mut pair, self.strategy)?;
        let mut corner = VoxelGrid::<u8>::zeros(src.size());
        self.pillar_corner.detect(src, &mut corner, self.strategy)?;
        let pillar = ops::merge(&[&pair, &corner])?;

        let mut pillar_tag = VoxelGrid::<u8>::zeros(src.size());
        ops::scale(&pillar, &mut pillar_tag, Tone::Pillar.value())?;
        let wall_tag = self.detect_scaled(&self.wall, src, Tone::Wall)?;

        let merged = ops::merge(&[src, &wall_tag, &pillar_tag])?;
        dst.as_slice_mut().copy_from_slice(merged.as_slice());

        log::debug!(
            "three_tone: {} wall cells, {} pillar cells",
            wall_tag.as_slice().iter().filter(|&&v| v != 0).count(),
            pillar_tag.as_slice().iter().filter(|&&v| v != 0).count(),
        );

        Ok(())
    }

    /// Classifies independent grids, in parallel under the
    /// [`ExecutionStrategy::Parallel`] strategy.
    pub fn two_tone_batch(
        &self,
        grids: &[VoxelGrid<u8>],
    ) -> Result<Vec<VoxelGrid<u8>>, MorphError> {
        self.batch(grids, |src, dst| self.two_tone(src, dst))
    }

    /// Classifies independent grids with [`ToneComposer::three_tone`], in
    /// parallel under the [`ExecutionStrategy::Parallel`] strategy.
    pub fn three_tone_batch(
        &self,
        grids: &[VoxelGrid<u8>],
    ) -> Result<Vec<VoxelGrid<u8>>, MorphError> {
        self.batch(grids, |src, dst| self.three_tone(src, dst))
    }

    fn detect_scaled(
        &self,
        template: &Template,
        src: &VoxelGrid<u8>,
        tone: Tone,
    ) -> Result<VoxelGrid<u8>, MorphError> {
        let mut hits = VoxelGrid::<u8>::zeros(src.size());
        template.detect(src, &mut hits, self.strategy)?;
        let mut tagged = VoxelGrid::<u8>::zeros(src.size());
        ops::scale(&hits, &mut tagged, tone.value())?;
        Ok(tagged)
    }

    fn batch<F>(&self, grids: &[VoxelGrid<u8>], run: F) -> Result<Vec<VoxelGrid<u8>>, MorphError>
    where
        F: Fn(&VoxelGrid<u8>, &mut VoxelGrid<u8>) -> Result<(), MorphError> + Send + Sync,
    {
        let one = |src: &VoxelGrid<u8>| -> Result<VoxelGrid<u8>, MorphError> {
            let mut dst = VoxelGrid::<u8>::zeros(src.size());
            run(src, &mut dst)?;
            Ok(dst)
        };
        match self.strategy {
            ExecutionStrategy::Serial => grids.iter().map(one).collect(),
            ExecutionStrategy::Parallel => grids.par_iter().map(one).collect(),
        }
    }
}
