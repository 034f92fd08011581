//! Batch evaluation
//!
//! Scores aligned reference/candidate pairs in parallel and aggregates the
//! nine ROUGE metrics into a mean and a standard deviation (population for
//! [`evaluate_batch`], sample for the benchmark summaries).

use super::rouge::RougeEvaluator;
use crate::errors::{Result, SummaryError};
use crate::types::ScoreRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate of per-pair ROUGE scores
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchScoreRecord {
    /// Number of pairs scored
    pub count: usize,
    /// Arithmetic mean of each metric
    pub mean: ScoreRecord,
    /// Standard deviation of each metric
    pub std: ScoreRecord,
}

impl BatchScoreRecord {
    /// Aggregate already computed records with the population standard
    /// deviation.
    ///
    /// An empty slice yields zero means and deviations.
    pub fn from_records(records: &[ScoreRecord]) -> Self {
        Self::aggregate(records, 0)
    }

    /// Aggregate with the sample standard deviation (`n - 1` denominator).
    ///
    /// Fewer than two records yield a deviation of zero.
    pub fn from_sample_records(records: &[ScoreRecord]) -> Self {
        Self::aggregate(records, 1)
    }

    fn aggregate(records: &[ScoreRecord], ddof: usize) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let n = records.len() as f64;
        let mut sums = [0.0f64; 9];
        for record in records {
            for (sum, value) in sums.iter_mut().zip(record.values()) {
                *sum += value;
            }
        }
        let means = sums.map(|sum| sum / n);

        let mut squares = [0.0f64; 9];
        for record in records {
            for ((square, value), mean) in squares.iter_mut().zip(record.values()).zip(means) {
                *square += (value - mean).powi(2);
            }
        }
        let stds = if records.len() > ddof {
            let denominator = (records.len() - ddof) as f64;
            squares.map(|square| (square / denominator).sqrt())
        } else {
            [0.0; 9]
        };

        Self {
            count: records.len(),
            mean: ScoreRecord::from_values(means),
            std: ScoreRecord::from_values(stds),
        }
    }

    /// Flat view: each metric name maps to its mean, `<name>_std` to its deviation
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map = BTreeMap::new();
        for ((name, mean), (_, std)) in self.mean.metrics().zip(self.std.metrics()) {
            map.insert(name.to_string(), mean);
            map.insert(format!("{name}_std"), std);
        }
        map
    }
}

impl RougeEvaluator {
    /// Score aligned pairs and aggregate them.
    ///
    /// Fails with [`SummaryError::ArityMismatch`] when the sequences differ
    /// in length.
    pub fn evaluate_batch<R, C>(&self, references: &[R], candidates: &[C]) -> Result<BatchScoreRecord>
    where
        R: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        evaluate_batch(self, references, candidates)
    }
}

/// Score aligned reference/candidate pairs with `evaluator`
pub fn evaluate_batch<R, C>(
    evaluator: &RougeEvaluator,
    references: &[R],
    candidates: &[C],
) -> Result<BatchScoreRecord>
where
    R: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    if references.len() != candidates.len() {
        return Err(SummaryError::arity_mismatch(
            references.len(),
            candidates.len(),
        ));
    }

    let records: Vec<ScoreRecord> = references
        .par_iter()
        .zip(candidates.par_iter())
        .map(|(reference, candidate)| evaluator.evaluate(reference.as_ref(), candidate.as_ref()))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(pairs = records.len(), "evaluated rouge batch");

    Ok(BatchScoreRecord::from_records(&records))
}
