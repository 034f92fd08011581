//! TF-IDF vectorization of a single document's sentences
//!
//! Every sentence is treated as a document in a corpus made of the sentences
//! of one article. A vectorizer holds no fitted state: each call to
//! [`TfidfVectorizer::fit_transform`] builds a fresh vocabulary, so scores
//! for one article never depend on another.
//!
//! Weighting follows the common smooth-IDF scheme:
//! `weight = count(term, sentence) * (ln((1 + n) / (1 + df(term))) + 1)`,
//! with each sentence vector scaled to unit length.

use super::unit_vector::UnitVector;
use crate::errors::VectorizationFailure;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::SummarizerConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Fitted TF-IDF model for one document
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Retained terms, sorted lexicographically; a term's position is its index
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per vocabulary index
    pub idf: Vec<f64>,
    /// One unit vector per input sentence, in input order
    pub rows: Vec<UnitVector>,
}

impl TfidfMatrix {
    /// Sum of TF-IDF weights for each sentence
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows.iter().map(UnitVector::weight_sum).collect()
    }
}

/// Builds TF-IDF vectors for the sentences of one document
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    /// Maximum vocabulary size (most frequent terms are kept)
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(Arc::new(StopwordFilter::default()))
    }
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default vocabulary ceiling
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self {
            tokenizer: Tokenizer::new(stopwords),
            max_features: SummarizerConfig::default().max_features,
        }
    }

    /// Create a vectorizer from a config and a shared stopword filter
    pub fn from_config(config: &SummarizerConfig, stopwords: Arc<StopwordFilter>) -> Self {
        Self::new(stopwords).with_max_features(config.max_features)
    }

    /// Set the vocabulary ceiling
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Fit a vocabulary on `sentences` and return their TF-IDF vectors
    pub fn fit_transform(
        &self,
        sentences: &[String],
    ) -> Result<TfidfMatrix, VectorizationFailure> {
        if sentences.is_empty() {
            return Err(VectorizationFailure::NoSentences);
        }

        let documents: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.terms(s))
            .collect();

        // term -> (corpus frequency, document frequency)
        let mut stats: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
        for terms in &documents {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for term in terms {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                if seen.insert(term.as_str()) {
                    entry.1 += 1;
                }
            }
        }

        if stats.is_empty() {
            return Err(VectorizationFailure::EmptyVocabulary);
        }

        let mut kept: Vec<(&str, usize, usize)> = stats
            .into_iter()
            .map(|(term, (tf, df))| (term, tf, df))
            .collect();

        if kept.len() > self.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(self.max_features);
        }
        kept.sort_by(|a, b| a.0.cmp(b.0));

        let n = documents.len() as f64;
        let vocabulary: Vec<String> = kept.iter().map(|(t, _, _)| t.to_string()).collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|&(_, _, df)| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        let index: FxHashMap<&str, u32> = kept
            .iter()
            .enumerate()
            .map(|(i, (t, _, _))| (*t, i as u32))
            .collect();

        let rows = documents
            .iter()
            .map(|terms| {
                let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
                for term in terms {
                    if let Some(&idx) = index.get(term.as_str()) {
                        *counts.entry(idx).or_insert(0) += 1;
                    }
                }
                UnitVector::from_weights(
                    counts
                        .into_iter()
                        .map(|(idx, count)| (idx, count as f64 * idf[idx as usize]))
                        .collect(),
                )
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            vocabulary = vocabulary.len(),
            "fitted tf-idf vocabulary"
        );

        Ok(TfidfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_vectorizer() -> TfidfVectorizer {
        TfidfVectorizer::new(Arc::new(StopwordFilter::empty()))
    }

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_sorted() {
        let matrix = plain_vectorizer()
            .fit_transform(&sentences(&["zebra apple", "mango apple"]))
            .unwrap();

        assert_eq!(matrix.vocabulary, vec!["apple", "mango", "zebra"]);
        let terms: Vec<u32> = matrix.rows[1].dimensions.iter().map(|&(idx, _)| idx).collect();
        assert_eq!(terms, vec![0, 1]);
    }

    #[test]
    fn test_smooth_idf() {
        let matrix = plain_vectorizer()
            .fit_transform(&sentences(&["zebra apple", "mango apple"]))
            .unwrap();

        // apple appears in both sentences: ln(3/3) + 1 = 1
        assert!((matrix.idf[0] - 1.0).abs() < 1e-10);
        // mango appears in one: ln(3/2) + 1
        assert!((matrix.idf[1] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = plain_vectorizer()
            .fit_transform(&sentences(&["rates rates rise", "rates fall", "markets rally"]))
            .unwrap();

        for row in &matrix.rows {
            let norm: f64 = row.dimensions.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-10);
        }
        assert_eq!(matrix.row_sums().len(), 3);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let matrix = plain_vectorizer()
            .with_max_features(2)
            .fit_transform(&sentences(&["tax tax tax vote", "tax vote bill", "budget"]))
            .unwrap();

        assert_eq!(matrix.vocabulary, vec!["tax", "vote"]);
        // The last sentence has no retained terms
        assert!(matrix.rows[2].dimensions.is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let vectorizer = TfidfVectorizer::default();
        let result = vectorizer.fit_transform(&sentences(&["It is what it is.", "And so on."]));
        assert_eq!(result.unwrap_err(), VectorizationFailure::EmptyVocabulary);
    }

    #[test]
    fn test_no_sentences() {
        let result = plain_vectorizer().fit_transform(&[]);
        assert_eq!(result.unwrap_err(), VectorizationFailure::NoSentences);
    }

    #[test]
    fn test_fresh_vocabulary_per_call() {
        let vectorizer = plain_vectorizer();
        let first = vectorizer
            .fit_transform(&sentences(&["alpha beta", "gamma"]))
            .unwrap();
        let second = vectorizer
            .fit_transform(&sentences(&["delta epsilon"]))
            .unwrap();

        assert_eq!(first.vocabulary, vec!["alpha", "beta", "gamma"]);
        assert_eq!(second.vocabulary, vec!["delta", "epsilon"]);
    }
}
