//! Lead-K baseline
//!
//! Selects the first k sentences verbatim. No scoring is involved.

/// Lead-K selection
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadK;

impl LeadK {
    pub fn new() -> Self {
        Self
    }

    /// Indices of the first `k` sentences
    pub fn select(&self, sentences: &[String], k: usize) -> Vec<usize> {
        (0..k.min(sentences.len())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Sentence number {i} of the story.")).collect()
    }

    #[test]
    fn test_selects_first_k() {
        assert_eq!(LeadK::new().select(&doc(5), 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_short_document() {
        assert_eq!(LeadK::new().select(&doc(2), 3), vec![0, 1]);
        assert!(LeadK::new().select(&[], 3).is_empty());
    }
}
