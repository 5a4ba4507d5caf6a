use voxtone_grid::{ops, GridError, VoxelGrid};

use crate::error::MorphError;
use crate::kernel::{Kernel, Rotation};
use crate::parallel::ExecutionStrategy;
use crate::select::select;

/// A named structuring-element template: include kernels, exclude kernels,
/// and the rotations it is evaluated at.
///
/// Templates are validated once at registration; detection calls afterwards
/// carry no per-call configuration checks.
#[derive(Clone, Debug)]
pub struct Template {
    name: String,
    include: Vec<Kernel>,
    exclude: Vec<Kernel>,
    rotations: Vec<Rotation>,
}

impl Template {
    /// Registers a template.
    ///
    /// # Errors
    ///
    /// Fails if any kernel has no active cells — such a kernel would match
    /// everywhere, which is always a configuration mistake.
    pub fn new(
        name: impl Into<String>,
        include: Vec<Kernel>,
        exclude: Vec<Kernel>,
        rotations: Vec<Rotation>,
    ) -> Result<Self, MorphError> {
        let name = name.into();
        if include.iter().chain(exclude.iter()).any(|k| k.weight() == 0) {
            return Err(MorphError::InactiveTemplateKernel(name));
        }
        Ok(Self {
            name,
            include,
            exclude,
            rotations,
        })
    }

    /// The template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The authored (un-rotated) include kernels.
    pub fn include(&self) -> &[Kernel] {
        &self.include
    }

    /// The authored (un-rotated) exclude kernels.
    pub fn exclude(&self) -> &[Kernel] {
        &self.exclude
    }

    /// The rotations this template is evaluated at.
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Runs the template against `src`, writing a binary detection grid.
    ///
    /// Each rotation is applied to every kernel of the template, the
    /// selective mask is computed per rotation, and the rotation outputs are
    /// combined with a layered merge once all of them exist.
    ///
    /// # Errors
    ///
    /// Fails on a size mismatch between `src` and `dst`.
    pub fn detect(
        &self,
        src: &VoxelGrid<u8>,
        dst: &mut VoxelGrid<u8>,
        strategy: ExecutionStrategy,
    ) -> Result<(), MorphError> {
        if src.size() != dst.size() {
            return Err(GridError::SizeMismatch(src.size(), dst.size()).into());
        }

        dst.as_slice_mut().fill(0);
        let mut pass = VoxelGrid::<u8>::zeros(src.size());

        for rotation in &self.rotations {
            let include: Vec<Kernel> = self.include.iter().map(|k| k.rotated(*rotation)).collect();
            let exclude: Vec<Kernel> = self.exclude.iter().map(|k| k.rotated(*rotation)).collect();
            select(src, &mut pass, &include, &exclude, strategy)?;
            ops::overlay(dst, &pass)?;
        }

        Ok(())
    }
}
