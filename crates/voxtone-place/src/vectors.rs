use std::collections::HashMap;
use std::io;

use crate::error::PlaceError;

/// Opaque block-name to latent-vector lookup.
///
/// The table is produced offline by the embedding pipeline and exported as
/// a JSON object of `name -> [f32; dim]`; this type only loads and queries
/// it. All vectors in one table share a dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockVectors {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl BlockVectors {
    /// Loads a vector table from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or on vectors of inconsistent dimension.
    pub fn from_json_str(json: &str) -> Result<Self, PlaceError> {
        Self::from_map(serde_json::from_str(json)?)
    }

    /// Loads a vector table from a reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, PlaceError> {
        Self::from_map(serde_json::from_reader(reader)?)
    }

    fn from_map(vectors: HashMap<String, Vec<f32>>) -> Result<Self, PlaceError> {
        let mut dim = None;
        for (name, vector) in &vectors {
            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(PlaceError::DimensionMismatch {
                    name: name.clone(),
                    got: vector.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            dim: dim.unwrap_or(0),
            vectors,
        })
    }

    /// Number of block names in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimension of the vectors, 0 for an empty table.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The vector for a block name.
    pub fn vector(&self, name: &str) -> Option<&[f32]> {
        self.vectors.get(name).map(Vec::as_slice)
    }

    /// The block name whose vector is closest to `query` by Euclidean
    /// distance, with that distance.
    ///
    /// Returns `None` for an empty table or a query of the wrong dimension.
    pub fn nearest(&self, query: &[f32]) -> Option<(&str, f32)> {
        if query.len() != self.dim {
            return None;
        }

        let mut best: Option<(&str, f32)> = None;
        for (name, vector) in &self.vectors {
            let dist_sq: f32 = vector
                .iter()
                .zip(query.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            if best.map_or(true, |(_, d)| dist_sq < d) {
                best = Some((name, dist_sq));
            }
        }

        best.map(|(name, dist_sq)| (name, dist_sq.sqrt()))
    }
}
