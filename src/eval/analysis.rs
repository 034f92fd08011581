//! Error analysis
//!
//! Summarises how one method's ROUGE-1 F1 scores are distributed and keeps a
//! few of its worst-scoring summaries for inspection.

use crate::types::ScoreRecord;
use serde::{Deserialize, Serialize};

/// One summary produced by a method, with the article it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSummary {
    pub article_id: usize,
    pub title: String,
    pub scores: ScoreRecord,
    pub summary: String,
    pub text_length: usize,
    pub num_sentences: usize,
}

/// A low-scoring summary kept for inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorExample {
    pub article_id: usize,
    pub title: String,
    pub rouge1_score: f64,
    pub rouge2_score: f64,
    #[serde(rename = "rougeL_score")]
    pub rouge_l_score: f64,
    pub summary: String,
    pub text_length: usize,
    pub num_sentences: usize,
}

impl From<&ScoredSummary> for ErrorExample {
    fn from(scored: &ScoredSummary) -> Self {
        Self {
            article_id: scored.article_id,
            title: scored.title.clone(),
            rouge1_score: scored.scores.rouge1_f1,
            rouge2_score: scored.scores.rouge2_f1,
            rouge_l_score: scored.scores.rouge_l_f1,
            summary: scored.summary.clone(),
            text_length: scored.text_length,
            num_sentences: scored.num_sentences,
        }
    }
}

/// Score distribution of one method
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodErrorAnalysis {
    pub method: String,
    pub error_examples: Vec<ErrorExample>,
    pub num_low_scores: usize,
    pub num_high_scores: usize,
    pub avg_score: f64,
    pub min_score: f64,
    pub max_score: f64,
}

/// Thresholds for classifying ROUGE-1 F1 scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorAnalyzer {
    /// Scores strictly below this count as low
    pub low_threshold: f64,
    /// Scores strictly above this count as high
    pub high_threshold: f64,
    /// Maximum number of low-scoring examples returned by
    /// [`ErrorAnalyzer::find_error_cases`]
    pub max_examples: usize,
    /// Low-scoring examples kept in each [`MethodErrorAnalysis`]
    pub report_examples: usize,
}

impl Default for ErrorAnalyzer {
    fn default() -> Self {
        Self {
            low_threshold: 0.3,
            high_threshold: 0.7,
            max_examples: 5,
            report_examples: 2,
        }
    }
}

impl ErrorAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the low/high thresholds
    pub fn with_thresholds(mut self, low: f64, high: f64) -> Self {
        self.low_threshold = low;
        self.high_threshold = high;
        self
    }

    /// Builder method: set the number of examples returned by
    /// [`Self::find_error_cases`]
    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Builder method: set the number of examples kept per method analysis
    pub fn with_report_examples(mut self, report_examples: usize) -> Self {
        self.report_examples = report_examples;
        self
    }

    /// Low-scoring summaries in input order, at most `max_examples`
    pub fn find_error_cases(&self, results: &[ScoredSummary]) -> Vec<ErrorExample> {
        results
            .iter()
            .filter(|r| r.scores.rouge1_f1 < self.low_threshold)
            .take(self.max_examples)
            .map(ErrorExample::from)
            .collect()
    }

    /// Analyse the summaries produced by `method`
    pub fn analyze(&self, method: &str, results: &[ScoredSummary]) -> MethodErrorAnalysis {
        if results.is_empty() {
            return MethodErrorAnalysis {
                method: method.to_string(),
                ..Default::default()
            };
        }

        let scores: Vec<f64> = results.iter().map(|r| r.scores.rouge1_f1).collect();
        let mut error_examples = self.find_error_cases(results);
        error_examples.truncate(self.report_examples);

        MethodErrorAnalysis {
            method: method.to_string(),
            error_examples,
            num_low_scores: scores.iter().filter(|&&s| s < self.low_threshold).count(),
            num_high_scores: scores.iter().filter(|&&s| s > self.high_threshold).count(),
            avg_score: scores.iter().sum::<f64>() / scores.len() as f64,
            min_score: scores.iter().copied().fold(f64::INFINITY, f64::min),
            max_score: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}
