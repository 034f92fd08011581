//! Core types for summarank
//!
//! This module defines the configuration shared by every extractive strategy
//! and the score records produced by the ROUGE evaluator.

use crate::errors::{Result, SummaryError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for extractive summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Number of sentences to extract, also the summary length the
    /// benchmark harness requests
    pub num_sentences: usize,
    /// Sentences whose trimmed length is at or below this are dropped
    pub min_sentence_chars: usize,
    /// Vocabulary ceiling for the TF-IDF vectorizer
    pub max_features: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum PageRank iterations
    pub max_iterations: usize,
    /// Absolute tolerance of the convergence test
    pub abs_tolerance: f64,
    /// Relative tolerance of the convergence test
    pub rel_tolerance: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            min_sentence_chars: 10,
            max_features: 5000,
            language: "en".to_string(),
            stopwords: Vec::new(),
            damping: 0.85,
            max_iterations: 100,
            abs_tolerance: 1e-8,
            rel_tolerance: 1e-5,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_sentences == 0 {
            return Err(SummaryError::invalid_config("num_sentences must be > 0"));
        }

        if self.max_features == 0 {
            return Err(SummaryError::invalid_config("max_features must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummaryError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummaryError::invalid_config("max_iterations must be > 0"));
        }

        if self.abs_tolerance < 0.0 || self.rel_tolerance < 0.0 {
            return Err(SummaryError::invalid_config(
                "convergence tolerances must be >= 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set number of sentences
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Builder method: set minimum sentence length in characters
    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    /// Builder method: set vocabulary ceiling
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence tolerances
    pub fn with_tolerance(mut self, abs_tolerance: f64, rel_tolerance: f64) -> Self {
        self.abs_tolerance = abs_tolerance;
        self.rel_tolerance = rel_tolerance;
        self
    }
}

// ============================================================================
// ROUGE scores
// ============================================================================

/// Precision, recall and F1 of a single ROUGE variant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl RougeScore {
    /// Build a score from overlap counts.
    ///
    /// Denominators of zero yield zero, never NaN.
    pub fn from_counts(overlap: usize, candidate_total: usize, reference_total: usize) -> Self {
        let precision = if candidate_total > 0 {
            overlap as f64 / candidate_total as f64
        } else {
            0.0
        };
        let recall = if reference_total > 0 {
            overlap as f64 / reference_total as f64
        } else {
            0.0
        };
        Self::from_precision_recall(precision, recall)
    }

    /// Build a score from precision and recall (harmonic mean for F1)
    pub fn from_precision_recall(precision: f64, recall: f64) -> Self {
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
        }
    }
}

/// Nine named ROUGE metrics: {rouge1, rouge2, rougeL} × {precision, recall, f1}
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub rouge1_precision: f64,
    pub rouge1_recall: f64,
    pub rouge1_f1: f64,
    pub rouge2_precision: f64,
    pub rouge2_recall: f64,
    pub rouge2_f1: f64,
    #[serde(rename = "rougeL_precision")]
    pub rouge_l_precision: f64,
    #[serde(rename = "rougeL_recall")]
    pub rouge_l_recall: f64,
    #[serde(rename = "rougeL_f1")]
    pub rouge_l_f1: f64,
}

impl ScoreRecord {
    /// Metric names in field order
    pub const FIELDS: [&'static str; 9] = [
        "rouge1_precision",
        "rouge1_recall",
        "rouge1_f1",
        "rouge2_precision",
        "rouge2_recall",
        "rouge2_f1",
        "rougeL_precision",
        "rougeL_recall",
        "rougeL_f1",
    ];

    /// Assemble a record from the three ROUGE variants
    pub fn new(rouge1: RougeScore, rouge2: RougeScore, rouge_l: RougeScore) -> Self {
        Self {
            rouge1_precision: rouge1.precision,
            rouge1_recall: rouge1.recall,
            rouge1_f1: rouge1.f1,
            rouge2_precision: rouge2.precision,
            rouge2_recall: rouge2.recall,
            rouge2_f1: rouge2.f1,
            rouge_l_precision: rouge_l.precision,
            rouge_l_recall: rouge_l.recall,
            rouge_l_f1: rouge_l.f1,
        }
    }

    /// Rebuild a record from values in [`Self::FIELDS`] order
    pub fn from_values(values: [f64; 9]) -> Self {
        Self {
            rouge1_precision: values[0],
            rouge1_recall: values[1],
            rouge1_f1: values[2],
            rouge2_precision: values[3],
            rouge2_recall: values[4],
            rouge2_f1: values[5],
            rouge_l_precision: values[6],
            rouge_l_recall: values[7],
            rouge_l_f1: values[8],
        }
    }

    /// Values in [`Self::FIELDS`] order
    pub fn values(&self) -> [f64; 9] {
        [
            self.rouge1_precision,
            self.rouge1_recall,
            self.rouge1_f1,
            self.rouge2_precision,
            self.rouge2_recall,
            self.rouge2_f1,
            self.rouge_l_precision,
            self.rouge_l_recall,
            self.rouge_l_f1,
        ]
    }

    /// Iterate over `(name, value)` pairs
    pub fn metrics(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::FIELDS.into_iter().zip(self.values())
    }

    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn rouge1(&self) -> RougeScore {
        RougeScore {
            precision: self.rouge1_precision,
            recall: self.rouge1_recall,
            f1: self.rouge1_f1,
        }
    }

    pub fn rouge2(&self) -> RougeScore {
        RougeScore {
            precision: self.rouge2_precision,
            recall: self.rouge2_recall,
            f1: self.rouge2_f1,
        }
    }

    pub fn rouge_l(&self) -> RougeScore {
        RougeScore {
            precision: self.rouge_l_precision,
            recall: self.rouge_l_recall,
            f1: self.rouge_l_f1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());

        let bad_config = SummarizerConfig::default().with_damping(1.5);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_num_sentences(0);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_max_iterations(0);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_tolerance(-1.0, 1e-5);
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_config_serde_defaults_stopwords() {
        let json = r#"{
            "num_sentences": 2,
            "min_sentence_chars": 10,
            "max_features": 100,
            "language": "en",
            "damping": 0.85,
            "max_iterations": 50,
            "abs_tolerance": 1e-8,
            "rel_tolerance": 1e-5
        }"#;
        let config: SummarizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.num_sentences, 2);
        assert!(config.stopwords.is_empty());
    }

    #[test]
    fn test_rouge_score_from_counts() {
        let score = RougeScore::from_counts(2, 4, 2);
        assert!((score.precision - 0.5).abs() < 1e-10);
        assert!((score.recall - 1.0).abs() < 1e-10);
        assert!((score.f1 - 2.0 / 3.0).abs() < 1e-10);

        let zero = RougeScore::from_counts(0, 0, 0);
        assert_eq!(zero, RougeScore::default());
    }

    #[test]
    fn test_score_record_field_names() {
        let record = ScoreRecord::new(
            RougeScore::from_precision_recall(1.0, 0.5),
            RougeScore::default(),
            RougeScore::from_precision_recall(0.25, 0.25),
        );

        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["rouge1_precision"], 1.0);
        assert_eq!(json["rougeL_f1"], 0.25);

        assert_eq!(record.get("rouge1_recall"), Some(0.5));
        assert_eq!(record.get("rouge3_f1"), None);
        assert_eq!(record.metrics().count(), 9);
        assert_eq!(ScoreRecord::from_values(record.values()), record);
    }
}
