//! Standard PageRank over a dense transition matrix
//!
//! Power iteration of `rank' = (1 - d) / n + d * Mᵀ · rank`, where `M` is a
//! row-normalised similarity matrix. Rows of zeros (isolated sentences) leak
//! their mass instead of redistributing it, so scores need not sum to one.

use super::PageRankResult;
use crate::graph::similarity::SimilarityMatrix;
use crate::types::SummarizerConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Absolute tolerance of the convergence test
    pub abs_tolerance: f64,
    /// Relative tolerance of the convergence test
    pub rel_tolerance: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            abs_tolerance: 1e-8,
            rel_tolerance: 1e-5,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, iteration cap and tolerances from a config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            abs_tolerance: config.abs_tolerance,
            rel_tolerance: config.rel_tolerance,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the absolute and relative convergence tolerances
    pub fn with_tolerance(mut self, abs_tolerance: f64, rel_tolerance: f64) -> Self {
        self.abs_tolerance = abs_tolerance;
        self.rel_tolerance = rel_tolerance;
        self
    }

    /// Run PageRank on a row-normalised transition matrix.
    ///
    /// Returns the last vector even if convergence wasn't achieved, with
    /// `converged = false`.
    pub fn run(&self, transition: &SimilarityMatrix) -> PageRankResult {
        let n = transition.size;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            new_scores.fill(teleport);

            // Mᵀ · rank: node i pushes its score along its outgoing row
            for (node, &node_score) in scores.iter().enumerate() {
                if node_score == 0.0 {
                    continue;
                }
                for (neighbor, &weight) in transition.row(node).iter().enumerate() {
                    if weight > 0.0 {
                        new_scores[neighbor] += self.damping * weight * node_score;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);
            converged = self.all_close(&scores, &new_scores);

            std::mem::swap(&mut scores, &mut new_scores);

            if converged {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = n, iterations, delta, converged, "pagerank finished");

        PageRankResult::new(scores, iterations, delta, converged)
    }

    /// Element-wise `|old - new| <= atol + rtol * |new|`
    fn all_close(&self, old: &[f64], new: &[f64]) -> bool {
        old.iter()
            .zip(new)
            .all(|(a, b)| (a - b).abs() <= self.abs_tolerance + self.rel_tolerance * b.abs())
    }
}
