/// Errors at the placement boundary.
#[derive(thiserror::Error, Debug)]
pub enum PlaceError {
    /// A palette was built from the wrong number of entries.
    #[error("Palette must hold exactly {expected} entries, got {got}")]
    InvalidPaletteSize {
        /// Number of entries supplied.
        got: usize,
        /// Number of entries a palette holds.
        expected: usize,
    },

    /// An alternative set with nothing to choose from.
    #[error("Palette alternative set is empty")]
    EmptyChoice,

    /// A tagged grid cell whose value has no palette entry.
    #[error("Tag value {0} has no palette entry")]
    UnknownTag(u8),

    /// A JSON artifact failed to decode.
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A vector table with inconsistent dimensions.
    #[error("Vector for '{name}' has dimension {got}, expected {expected}")]
    DimensionMismatch {
        /// Block name carrying the odd vector.
        name: String,
        /// Its dimension.
        got: usize,
        /// Dimension of the rest of the table.
        expected: usize,
    },
}
