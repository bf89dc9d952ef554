use serde::{Deserialize, Serialize};

/// Dense symmetric cosine-similarity matrix
///
/// Row and column `i` correspond to catalog row `i`. Values are stored
/// row-major, clamped to `[0.0, 1.0]`, with an exact `1.0` diagonal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of rows (and columns)
    pub dimension: usize,
    /// Row-major values, `dimension * dimension` entries
    pub values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Row `i` as a slice, if in bounds
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i >= self.dimension {
            return None;
        }
        let start = i * self.dimension;
        self.values.get(start..start + self.dimension)
    }

    /// Similarity between rows `i` and `j`, if in bounds
    pub fn score(&self, i: usize, j: usize) -> Option<f32> {
        if i >= self.dimension || j >= self.dimension {
            return None;
        }
        self.values.get(i * self.dimension + j).copied()
    }

    /// True when the stored values form a full `dimension x dimension` grid
    pub fn is_square(&self) -> bool {
        self.values.len() == self.dimension * self.dimension
    }
}
