//! Term tokenization for TF-IDF
//!
//! Terms are lowercase runs of two or more Unicode word characters, with
//! stopwords removed.

use super::stopwords::StopwordFilter;
use regex::Regex;
use std::sync::{Arc, OnceLock};

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"))
}

/// Splits sentences into content terms
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<StopwordFilter>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(StopwordFilter::default()))
    }
}

impl Tokenizer {
    /// Create a tokenizer backed by a shared stopword filter
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self { stopwords }
    }

    /// Tokenize one sentence into lowercase, non-stopword terms
    pub fn terms(&self, sentence: &str) -> Vec<String> {
        let lowered = sentence.to_lowercase();
        term_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stopwords.is_stopword(t))
            .map(str::to_string)
            .collect()
    }
}
