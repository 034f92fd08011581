//! Benchmark results and their JSON export

use crate::errors::Result;
use crate::eval::{BatchScoreRecord, MethodErrorAnalysis};
use crate::types::ScoreRecord;
use serde::{Deserialize, Serialize};

/// Output of one summarizer on one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    pub method: String,
    pub summary: String,
    pub scores: ScoreRecord,
    /// Wall-clock summarization time in seconds
    pub elapsed_secs: f64,
}

/// Every method's output on one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    /// Position of the article in the benchmark input
    pub article_id: usize,
    pub url: String,
    pub title: String,
    /// Raw text length in characters
    pub text_length: usize,
    pub num_sentences: usize,
    pub reference: String,
    /// Methods that failed on this article are absent
    pub methods: Vec<MethodResult>,
}

impl ArticleResult {
    /// Result of the method with this name, if it succeeded
    pub fn method(&self, name: &str) -> Option<&MethodResult> {
        self.methods.iter().find(|m| m.method == name)
    }
}

/// Aggregate scores of one method over every evaluated article.
///
/// `scores.std` is the sample standard deviation, unlike
/// [`crate::eval::evaluate_batch`] which reports the population one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSummary {
    pub method: String,
    pub scores: BatchScoreRecord,
    pub mean_time_secs: f64,
}

/// Complete benchmark output
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Articles given to the runner
    pub total_articles: usize,
    /// Articles dropped by the length or sentence-count filters
    pub skipped_articles: usize,
    pub results: Vec<ArticleResult>,
    pub summaries: Vec<MethodSummary>,
    pub error_analysis: Vec<MethodErrorAnalysis>,
}

impl BenchmarkReport {
    /// Number of articles that were evaluated
    pub fn evaluated_articles(&self) -> usize {
        self.results.len()
    }

    /// Aggregate for one method
    pub fn summary(&self, method: &str) -> Option<&MethodSummary> {
        self.summaries.iter().find(|s| s.method == method)
    }

    /// Error analysis for one method
    pub fn analysis(&self, method: &str) -> Option<&MethodErrorAnalysis> {
        self.error_analysis.iter().find(|a| a.method == method)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_json() {
        let report = BenchmarkReport {
            total_articles: 2,
            skipped_articles: 1,
            results: vec![ArticleResult {
                article_id: 0,
                url: "https://example.com/a".to_string(),
                title: "A".to_string(),
                text_length: 300,
                num_sentences: 4,
                reference: "Reference.".to_string(),
                methods: vec![MethodResult {
                    method: "Lead-K".to_string(),
                    summary: "Reference.".to_string(),
                    scores: ScoreRecord::default(),
                    elapsed_secs: 0.001,
                }],
            }],
            summaries: vec![MethodSummary {
                method: "Lead-K".to_string(),
                scores: BatchScoreRecord::default(),
                mean_time_secs: 0.001,
            }],
            error_analysis: Vec::new(),
        };

        assert_eq!(report.evaluated_articles(), 1);
        assert!(report.summary("Lead-K").is_some());
        assert!(report.summary("TextRank").is_none());
        assert!(report.results[0].method("Lead-K").is_some());

        let json = report.to_json().unwrap();
        let parsed: BenchmarkReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_articles, 2);
        assert_eq!(parsed.results[0].methods.len(), 1);
        assert!(json.contains("\"rougeL_f1\""));
    }
}
