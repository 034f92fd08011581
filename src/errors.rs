//! Error types for summarank
//!
//! Degenerate documents (too few sentences, empty vocabularies, isolated
//! sentences) are absorbed inside the ranking strategies. Only caller
//! mistakes surface through [`SummaryError`].

use thiserror::Error;

/// Errors surfaced by summarization and evaluation
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The sentence tokenizer could not process the input
    #[error("sentence segmentation failed: {reason}")]
    Segmentation { reason: String },

    /// Batch evaluation received a different number of references and candidates
    #[error("arity mismatch: {references} references but {candidates} candidates")]
    ArityMismatch { references: usize, candidates: usize },

    /// A summary must contain at least one sentence
    #[error("number of sentences must be at least 1")]
    InvalidSentenceCount,

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON export failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SummaryError {
    /// Create a segmentation error
    pub fn segmentation(reason: impl Into<String>) -> Self {
        Self::Segmentation {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch(references: usize, candidates: usize) -> Self {
        Self::ArityMismatch {
            references,
            candidates,
        }
    }
}

/// Why a TF-IDF model could not be fitted.
///
/// Returned by [`crate::summarizer::vectorizer::TfidfVectorizer`] and always
/// recovered by the ranking strategies with a safe default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorizationFailure {
    /// No sentences were supplied
    #[error("no sentences to vectorize")]
    NoSentences,

    /// Every term was a stop word or too short
    #[error("empty vocabulary; sentences contain only stop words")]
    EmptyVocabulary,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummaryError>;
