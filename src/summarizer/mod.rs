//! Extractive summarization
//!
//! Every strategy honours the same contract: text plus a sentence count in,
//! the selected sentences joined by spaces out, always in original document
//! order. Strategies are tagged [`Variant`]s behind one [`Summarizer`] trait,
//! so callers (such as [`crate::bench::BenchmarkRunner`]) can hold extractive
//! and external summarizers side by side.

pub mod selector;
pub mod unit_vector;
pub mod vectorizer;

use crate::errors::{Result, SummaryError};
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::SummarizerConfig;
use crate::variants::lead_k::LeadK;
use crate::variants::text_rank::SentenceTextRank;
use crate::variants::tfidf_rank::TfIdfRank;
use crate::variants::Variant;
use selector::Summary;
use std::sync::Arc;

/// Shared contract of every summarization strategy
pub trait Summarizer: Send + Sync {
    /// Method label used when reporting results
    fn name(&self) -> &str;

    /// Summarize `text` into at most `num_sentences` sentences
    fn summarize(&self, text: &str, num_sentences: usize) -> Result<String>;
}

#[derive(Debug, Clone)]
enum Strategy {
    LeadK(LeadK),
    TfIdf(TfIdfRank),
    TextRank(SentenceTextRank),
}

/// One of the extractive strategies, ready to summarize documents
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    variant: Variant,
    strategy: Strategy,
    segmenter: SentenceSegmenter,
    name: String,
}

impl ExtractiveSummarizer {
    /// Create a summarizer with the default config
    pub fn new(variant: Variant) -> Self {
        let config = SummarizerConfig::default();
        let stopwords = Arc::new(StopwordFilter::from_config(&config));
        Self::build(variant, &config, stopwords)
    }

    /// Create a summarizer from a validated config
    pub fn with_config(variant: Variant, config: &SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = Arc::new(StopwordFilter::from_config(config));
        Ok(Self::build(variant, config, stopwords))
    }

    /// Create a summarizer that shares an existing stopword filter
    pub fn with_stopwords(
        variant: Variant,
        config: &SummarizerConfig,
        stopwords: Arc<StopwordFilter>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(variant, config, stopwords))
    }

    /// All three extractive strategies sharing one stopword filter
    pub fn all(config: &SummarizerConfig) -> Result<Vec<Self>> {
        config.validate()?;
        let stopwords = Arc::new(StopwordFilter::from_config(config));
        Ok(Variant::ALL
            .into_iter()
            .map(|variant| Self::build(variant, config, Arc::clone(&stopwords)))
            .collect())
    }

    fn build(variant: Variant, config: &SummarizerConfig, stopwords: Arc<StopwordFilter>) -> Self {
        let strategy = match variant {
            Variant::LeadK => Strategy::LeadK(LeadK::new()),
            Variant::TfIdf => Strategy::TfIdf(TfIdfRank::with_config(config, stopwords)),
            Variant::TextRank => {
                Strategy::TextRank(SentenceTextRank::with_config(config, stopwords))
            }
        };
        Self {
            variant,
            strategy,
            segmenter: SentenceSegmenter::from_config(config),
            name: variant.label().to_string(),
        }
    }

    /// Override the label reported by [`Summarizer::name`]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The strategy in use
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Segment `text` with this summarizer's segmenter
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Select `k` sentences from an already segmented document
    pub fn summarize_sentences(&self, sentences: &[String], k: usize) -> Result<Summary> {
        if k == 0 {
            return Err(SummaryError::InvalidSentenceCount);
        }

        if sentences.len() <= k {
            return Ok(Summary::all(sentences));
        }

        let indices = match &self.strategy {
            Strategy::LeadK(lead) => lead.select(sentences, k),
            Strategy::TfIdf(ranker) => ranker.select(sentences, k),
            Strategy::TextRank(ranker) => ranker.select(sentences, k),
        };

        Ok(Summary::from_indices(sentences, indices))
    }

    /// Segment `text` and select `k` sentences
    pub fn summarize_text(&self, text: &str, k: usize) -> Result<Summary> {
        self.summarize_sentences(&self.segment(text), k)
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn summarize(&self, text: &str, num_sentences: usize) -> Result<String> {
        Ok(self.summarize_text(text, num_sentences)?.text())
    }
}

/// Convenience function: first `k` sentences
pub fn summarize_lead(text: &str, k: usize) -> Result<String> {
    ExtractiveSummarizer::new(Variant::LeadK).summarize(text, k)
}

/// Convenience function: `k` sentences by TF-IDF salience
pub fn summarize_tfidf(text: &str, k: usize) -> Result<String> {
    ExtractiveSummarizer::new(Variant::TfIdf).summarize(text, k)
}

/// Convenience function: `k` sentences by TextRank centrality
pub fn summarize_textrank(text: &str, k: usize) -> Result<String> {
    ExtractiveSummarizer::new(Variant::TextRank).summarize(text, k)
}
