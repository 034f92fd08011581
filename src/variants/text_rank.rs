//! TextRank for sentences
//!
//! Sentences are nodes of a graph weighted by the cosine similarity of their
//! TF-IDF vectors. PageRank over that graph favours sentences that are
//! representative of the whole document rather than merely lexically dense.

use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::summarizer::selector::select_top_k;
use crate::summarizer::vectorizer::TfidfVectorizer;
use crate::types::SummarizerConfig;
use std::sync::Arc;

/// Graph-based sentence ranker
#[derive(Debug, Clone)]
pub struct SentenceTextRank {
    vectorizer: TfidfVectorizer,
    pagerank: StandardPageRank,
}

impl Default for SentenceTextRank {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTextRank {
    /// Create a ranker with default config and English stopwords
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::default(),
            pagerank: StandardPageRank::default(),
        }
    }

    /// Create with a custom config and a shared stopword filter
    pub fn with_config(config: &SummarizerConfig, stopwords: Arc<StopwordFilter>) -> Self {
        Self {
            vectorizer: TfidfVectorizer::from_config(config, stopwords),
            pagerank: StandardPageRank::from_config(config),
        }
    }

    /// Pairwise similarity of the sentences.
    ///
    /// When no TF-IDF model can be fitted the identity matrix is used, which
    /// treats every sentence as equally and independently important.
    pub fn similarity_matrix(&self, sentences: &[String]) -> SimilarityMatrix {
        match self.vectorizer.fit_transform(sentences) {
            Ok(matrix) => SimilarityMatrix::from_vectors(&matrix.rows),
            Err(_failure) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_failure, "similarity graph unavailable, using identity matrix");
                SimilarityMatrix::identity(sentences.len())
            }
        }
    }

    /// PageRank scores for every sentence (same order as the input)
    pub fn rank(&self, sentences: &[String]) -> PageRankResult {
        let mut transition = self.similarity_matrix(sentences);
        transition.clip_and_zero_diagonal();
        transition.row_normalize();
        self.pagerank.run(&transition)
    }

    /// Indices of the `k` most central sentences in document order.
    ///
    /// Documents with at most `k` sentences are returned whole.
    pub fn select(&self, sentences: &[String], k: usize) -> Vec<usize> {
        if sentences.len() <= k {
            return (0..sentences.len()).collect();
        }
        select_top_k(&self.rank(sentences).scores, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_sentences_uniform_rank() {
        let sentences = vec!["Lawmakers passed the climate bill today.".to_string(); 4];
        let result = SentenceTextRank::new().rank(&sentences);

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_central_sentence_ranks_highest() {
        let sentences = doc(&[
            "Flooding closed roads in the valley.",
            "Flooding closed schools and roads after heavy rain in the valley.",
            "Heavy rain caused schools to close.",
            "Volunteers delivered sandbags.",
        ]);
        let result = SentenceTextRank::new().rank(&sentences);

        assert_eq!(result.top_n(1)[0].0, 1);
        assert!(result.scores.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_isolated_sentence_gets_teleport_mass_only() {
        let sentences = doc(&[
            "Flooding closed roads in the valley.",
            "Flooding closed valley roads again.",
            "Volunteers delivered sandbags.",
        ]);
        let result = SentenceTextRank::new().rank(&sentences);

        assert!((result.scores[2] - 0.15 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vocabulary_uses_identity() {
        let sentences = doc(&[
            "It is what it is.",
            "And so it was then.",
            "It was what it was.",
        ]);
        let ranker = SentenceTextRank::new();

        let matrix = ranker.similarity_matrix(&sentences);
        assert_eq!(matrix, SimilarityMatrix::identity(3));

        // No edges: all sentences tie and the lowest indices win
        assert_eq!(ranker.select(&sentences, 2), vec![0, 1]);
    }

    #[test]
    fn test_short_document_returned_whole() {
        let sentences = doc(&["One sentence.", "Two sentences here."]);
        assert_eq!(SentenceTextRank::new().select(&sentences, 2), vec![0, 1]);
    }

    #[test]
    fn test_selection_in_document_order() {
        let sentences = doc(&[
            "Wildfires spread across northern California.",
            "Officials ordered evacuations as wildfires spread.",
            "The stock market closed higher.",
            "Evacuations continued in northern California towns.",
        ]);
        let selected = SentenceTextRank::new().select(&sentences, 2);

        assert_eq!(selected.len(), 2);
        assert!(selected.windows(2).all(|w| w[0] < w[1]));
    }
}
