//! Extractive sentence-selection strategies
//!
//! This module provides the interchangeable strategies behind
//! [`crate::summarizer::ExtractiveSummarizer`]:
//! - Lead-K: the first k sentences, the baseline every method is compared to
//! - TF-IDF: sentences with the largest total TF-IDF weight
//! - TextRank: sentences central in the similarity graph (PageRank)

pub mod lead_k;
pub mod text_rank;
pub mod tfidf_rank;

use crate::errors::SummaryError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "lead_k")]
    LeadK,
    #[serde(rename = "tfidf")]
    TfIdf,
    #[serde(rename = "textrank")]
    TextRank,
}

impl Variant {
    /// Every extractive strategy, baseline first
    pub const ALL: [Variant; 3] = [Variant::LeadK, Variant::TfIdf, Variant::TextRank];

    /// Stable identifier used in configs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::LeadK => "lead_k",
            Variant::TfIdf => "tfidf",
            Variant::TextRank => "textrank",
        }
    }

    /// Human-readable method label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Variant::LeadK => "Lead-K",
            Variant::TfIdf => "TF-IDF",
            Variant::TextRank => "TextRank",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        let normalized = value.to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "lead" | "lead_k" | "leadk" | "lead_3" | "baseline" => Some(Variant::LeadK),
            "tfidf" | "tf_idf" | "salience" => Some(Variant::TfIdf),
            "textrank" | "text_rank" | "graph" | "pagerank" => Some(Variant::TextRank),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Variant {
    type Err = SummaryError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Variant::parse(value).ok_or_else(|| {
            SummaryError::invalid_config(format!(
                "unknown strategy '{value}', expected one of: lead_k, tfidf, textrank"
            ))
        })
    }
}
