use voxtone_grid::GridError;

/// Errors produced by the matching engine.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MorphError {
    /// A grid-level failure (shape mismatch, bad construction).
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Flat kernel data of the wrong length.
    #[error("Kernel data must hold exactly 27 cells, got {0}")]
    InvalidKernelLength(usize),

    /// A kernel with no active cells would match everywhere.
    #[error("Kernel has no active cells")]
    InactiveKernel,

    /// A template registered a kernel with no active cells.
    #[error("Template '{0}' holds a kernel with no active cells")]
    InactiveTemplateKernel(String),
}
