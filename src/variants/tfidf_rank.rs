//! TF-IDF salience ranking
//!
//! A sentence's score is the sum of its TF-IDF weights, with the vocabulary
//! fitted on the sentences of the same document. Lexically dense sentences
//! full of document-specific terms score highest.

use crate::errors::VectorizationFailure;
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::selector::select_top_k;
use crate::summarizer::vectorizer::TfidfVectorizer;
use crate::types::SummarizerConfig;
use std::sync::Arc;

/// TF-IDF sentence ranker
#[derive(Debug, Clone)]
pub struct TfIdfRank {
    vectorizer: TfidfVectorizer,
}

impl Default for TfIdfRank {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfRank {
    /// Create a ranker with default config and English stopwords
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::default(),
        }
    }

    /// Create with a custom config and a shared stopword filter
    pub fn with_config(config: &SummarizerConfig, stopwords: Arc<StopwordFilter>) -> Self {
        Self {
            vectorizer: TfidfVectorizer::from_config(config, stopwords),
        }
    }

    /// Score every sentence (same order as the input)
    pub fn rank(&self, sentences: &[String]) -> Result<Vec<f64>, VectorizationFailure> {
        Ok(self.vectorizer.fit_transform(sentences)?.row_sums())
    }

    /// Indices of the `k` most salient sentences in document order.
    ///
    /// Documents with at most `k` sentences are returned whole; when the
    /// vocabulary is empty the first `k` sentences are returned.
    pub fn select(&self, sentences: &[String], k: usize) -> Vec<usize> {
        if sentences.len() <= k {
            return (0..sentences.len()).collect();
        }

        match self.rank(sentences) {
            Ok(scores) => select_top_k(&scores, k),
            Err(_failure) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_failure, "tf-idf ranking failed, using lead sentences");
                (0..k).collect()
            }
        }
    }
}
