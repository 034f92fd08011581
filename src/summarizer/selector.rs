//! Top-k sentence selection
//!
//! Picks the k highest-scoring sentences and returns them in document order.

use serde::{Deserialize, Serialize};

/// Selected sentences of one document, in original order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Indices into the document's segmentation, strictly increasing
    pub indices: Vec<usize>,
    /// The selected sentences, aligned with `indices`
    pub sentences: Vec<String>,
}

impl Summary {
    /// Collect the sentences at `indices` (which must be ascending)
    pub fn from_indices(sentences: &[String], indices: Vec<usize>) -> Self {
        let selected = indices.iter().map(|&i| sentences[i].clone()).collect();
        Self {
            indices,
            sentences: selected,
        }
    }

    /// Every sentence of the document, unchanged
    pub fn all(sentences: &[String]) -> Self {
        Self::from_indices(sentences, (0..sentences.len()).collect())
    }

    /// The first `k` sentences
    pub fn lead(sentences: &[String], k: usize) -> Self {
        Self::from_indices(sentences, (0..k.min(sentences.len())).collect())
    }

    /// Sentences joined by a single space
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Indices of the `k` best scores, ascending.
///
/// Candidates are ordered by descending score with ties going to the lower
/// index; the chosen indices are then re-sorted into document order.
pub fn select_top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then_with(|| a.cmp(&b)));
    ranked.truncate(k);
    ranked.sort_unstable();
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Vec<String> {
        ["First sentence here.", "Second sentence here.", "Third sentence here."]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_select_top_k_document_order() {
        let selected = select_top_k(&[0.1, 0.9, 0.3, 0.8], 2);
        assert_eq!(selected, vec![1, 3]);
    }

    #[test]
    fn test_select_top_k_ties_prefer_lower_index() {
        let selected = select_top_k(&[0.5, 0.5, 0.5, 0.5], 2);
        assert_eq!(selected, vec![0, 1]);

        let selected = select_top_k(&[0.1, 0.7, 0.7, 0.7], 2);
        assert_eq!(selected, vec![1, 2]);
    }

    #[test]
    fn test_select_more_than_available() {
        assert_eq!(select_top_k(&[0.3, 0.1], 5), vec![0, 1]);
        assert!(select_top_k(&[], 3).is_empty());
    }

    #[test]
    fn test_summary_text_and_lead() {
        let sentences = doc();
        let summary = Summary::from_indices(&sentences, vec![0, 2]);
        assert_eq!(summary.text(), "First sentence here. Third sentence here.");

        let lead = Summary::lead(&sentences, 2);
        assert_eq!(lead.indices, vec![0, 1]);

        let all = Summary::all(&sentences);
        assert_eq!(all.len(), 3);
        assert!(Summary::default().is_empty());
    }
}
