//! Sparse unit vectors over a fitted vocabulary
//!
//! Each sentence becomes an L2-normalised TF-IDF vector. Dimensions are kept
//! sorted by term index so dot products are a linear merge and sums are
//! computed in a fixed order.

/// A sparse, L2-normalised term vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitVector {
    /// Non-zero dimensions: (term index, weight), sorted by term index
    pub dimensions: Vec<(u32, f64)>,
}

impl UnitVector {
    /// Create from raw weights, normalising to unit length.
    ///
    /// Zero weights are dropped and dimensions are sorted by index.
    pub fn from_weights(mut dimensions: Vec<(u32, f64)>) -> Self {
        dimensions.retain(|&(_, w)| w != 0.0);
        dimensions.sort_by_key(|&(idx, _)| idx);

        let norm = dimensions.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut dimensions {
                *weight /= norm;
            }
        }
        Self { dimensions }
    }

    /// Cosine similarity with another vector.
    ///
    /// Both vectors are unit length, so this is the dot product.
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.dimensions.len() && j < other.dimensions.len() {
            let (a_idx, a_w) = self.dimensions[i];
            let (b_idx, b_w) = other.dimensions[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Sum of all weights
    pub fn weight_sum(&self) -> f64 {
        self.dimensions.iter().map(|(_, w)| w).sum()
    }
}
