//! Dense sentence-similarity matrix
//!
//! Nodes are sentence indices; edge (i, j) carries the cosine similarity of
//! the two sentences' TF-IDF vectors. The diagonal is zero; the ranker clips
//! entries to [0, 1] once, right before row normalisation.

use crate::summarizer::unit_vector::UnitVector;

/// Square similarity matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of sentences
    pub size: usize,
    /// Row-major entries, `size * size` long
    pub values: Vec<f64>,
}

impl SimilarityMatrix {
    /// All-zero matrix of the given size
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Identity matrix: every sentence judged equally and independently
    /// important. The diagonal is removed by [`Self::clip_and_zero_diagonal`],
    /// which leaves no edges at all.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size);
        for i in 0..size {
            matrix.set(i, i, 1.0);
        }
        matrix
    }

    /// Pairwise cosine similarity between unit vectors, without self-loops.
    ///
    /// Entries are raw dot products; callers clip them with
    /// [`Self::clip_and_zero_diagonal`].
    pub fn from_vectors(vectors: &[UnitVector]) -> Self {
        let size = vectors.len();
        let mut matrix = Self::zeros(size);

        for i in 0..size {
            for j in (i + 1)..size {
                let sim = vectors[i].cosine_similarity(&vectors[j]);
                matrix.set(i, j, sim);
                matrix.set(j, i, sim);
            }
        }

        matrix
    }

    /// Entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// Set entry at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.size + col] = value;
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Clamp every entry into [0, 1] and zero the diagonal
    pub fn clip_and_zero_diagonal(&mut self) {
        for value in &mut self.values {
            *value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        }
        for i in 0..self.size {
            self.set(i, i, 0.0);
        }
    }

    /// Divide each row by its sum.
    ///
    /// Rows summing to zero use a divisor of 1, so an isolated sentence keeps
    /// an all-zero row and passes no weight to its neighbours.
    pub fn row_normalize(&mut self) {
        let size = self.size;
        for row in self.values.chunks_mut(size.max(1)) {
            let sum: f64 = row.iter().sum();
            let divisor = if sum == 0.0 { 1.0 } else { sum };
            for value in row {
                *value /= divisor;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vectors_symmetric_no_self_loops() {
        let vectors = vec![
            UnitVector::from_weights(vec![(0, 1.0), (1, 1.0)]),
            UnitVector::from_weights(vec![(1, 1.0), (2, 1.0)]),
            UnitVector::from_weights(vec![(3, 1.0)]),
        ];
        let matrix = SimilarityMatrix::from_vectors(&vectors);

        assert_eq!(matrix.size, 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert!((matrix.get(0, 1) - 0.5).abs() < 1e-10);
        assert_eq!(matrix.get(0, 2), 0.0);
        assert!(matrix.row(2).iter().all(|&v| v == 0.0));
        assert_eq!(matrix.values.iter().filter(|&&v| v > 0.0).count(), 2);
    }

    #[test]
    fn test_from_vectors_leaves_clipping_to_caller() {
        let vectors = vec![
            UnitVector::from_weights(vec![(0, 1.0)]),
            UnitVector::from_weights(vec![(0, -1.0)]),
        ];
        let mut matrix = SimilarityMatrix::from_vectors(&vectors);
        assert!((matrix.get(0, 1) + 1.0).abs() < 1e-10);

        matrix.clip_and_zero_diagonal();
        assert_eq!(matrix, SimilarityMatrix::zeros(2));
    }

    #[test]
    fn test_clip_negative_entries() {
        let mut matrix = SimilarityMatrix::zeros(2);
        matrix.set(0, 1, -0.4);
        matrix.set(1, 0, 1.2);
        matrix.set(1, 1, 1.0);
        matrix.clip_and_zero_diagonal();

        assert_eq!(matrix.get(0, 1), 0.0);
        assert_eq!(matrix.get(1, 0), 1.0);
        assert_eq!(matrix.get(1, 1), 0.0);
    }

    #[test]
    fn test_row_normalize_with_zero_row() {
        let mut matrix = SimilarityMatrix::zeros(3);
        matrix.set(0, 1, 0.2);
        matrix.set(0, 2, 0.6);
        matrix.set(1, 0, 0.2);
        matrix.row_normalize();

        assert!((matrix.get(0, 1) - 0.25).abs() < 1e-10);
        assert!((matrix.get(0, 2) - 0.75).abs() < 1e-10);
        assert!((matrix.get(1, 0) - 1.0).abs() < 1e-10);
        assert!(matrix.row(2).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_identity_loses_all_edges() {
        let mut matrix = SimilarityMatrix::identity(4);
        assert_eq!(matrix.get(2, 2), 1.0);

        matrix.clip_and_zero_diagonal();
        assert_eq!(matrix, SimilarityMatrix::zeros(4));
    }

    #[test]
    fn test_empty_matrix() {
        let mut matrix = SimilarityMatrix::from_vectors(&[]);
        matrix.row_normalize();
        assert_eq!(matrix.size, 0);
        assert!(matrix.values.is_empty());
    }
}
