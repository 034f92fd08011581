//! ROUGE-1, ROUGE-2 and ROUGE-L scoring
//!
//! Text is lowercased and split on anything outside `[a-z0-9]`. Tokens longer
//! than three characters are reduced to their Snowball (English) stem so
//! that morphological variants ("rates", "rate") match.

use crate::types::{RougeScore, ScoreRecord};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

fn separator() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern is valid"))
}

fn stemmer() -> &'static Stemmer {
    static STEMMER: OnceLock<Stemmer> = OnceLock::new();
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Scores candidate summaries against references
#[derive(Debug, Clone)]
pub struct RougeEvaluator {
    use_stemmer: bool,
}

impl Default for RougeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl RougeEvaluator {
    /// Create an evaluator with stemming enabled
    pub fn new() -> Self {
        Self { use_stemmer: true }
    }

    /// Enable or disable stemming
    pub fn with_stemmer(mut self, use_stemmer: bool) -> Self {
        self.use_stemmer = use_stemmer;
        self
    }

    /// Score one candidate against one reference
    pub fn evaluate(&self, reference: &str, candidate: &str) -> ScoreRecord {
        let reference_tokens = self.tokenize(reference);
        let candidate_tokens = self.tokenize(candidate);

        ScoreRecord::new(
            rouge_n(&reference_tokens, &candidate_tokens, 1),
            rouge_n(&reference_tokens, &candidate_tokens, 2),
            rouge_l(&reference_tokens, &candidate_tokens),
        )
    }

    /// Normalised, optionally stemmed tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        separator()
            .split(&lowered)
            .filter(|t| !t.is_empty())
            .map(|t| {
                if self.use_stemmer && t.len() > 3 {
                    stemmer().stem(t).into_owned()
                } else {
                    t.to_string()
                }
            })
            .collect()
    }
}

fn ngram_counts(tokens: &[String], n: usize) -> FxHashMap<&[String], usize> {
    let mut counts = FxHashMap::default();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

/// Clipped n-gram overlap
pub fn rouge_n(reference: &[String], candidate: &[String], n: usize) -> RougeScore {
    let reference_counts = ngram_counts(reference, n);
    let candidate_counts = ngram_counts(candidate, n);

    let overlap: usize = candidate_counts
        .iter()
        .map(|(gram, &count)| count.min(reference_counts.get(gram).copied().unwrap_or(0)))
        .sum();

    RougeScore::from_counts(
        overlap,
        candidate_counts.values().sum(),
        reference_counts.values().sum(),
    )
}

/// Longest-common-subsequence overlap
pub fn rouge_l(reference: &[String], candidate: &[String]) -> RougeScore {
    if reference.is_empty() || candidate.is_empty() {
        return RougeScore::default();
    }
    let lcs = lcs_length(reference, candidate);
    RougeScore::from_counts(lcs, candidate.len(), reference.len())
}

/// Length of the longest common subsequence, two-row dynamic programming
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for item in a {
        for (j, other) in b.iter().enumerate() {
            current[j + 1] = if item == other {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
