//! Sentence segmentation
//!
//! Splits prose on Unicode (UAX #29) sentence boundaries, then re-joins the
//! boundaries that common English abbreviations produce ("Mr. Smith",
//! "the U.S. Senate") and splits the sentences it misses before a leading
//! number ("last year. 2024 was"). Fragments at or below the minimum length
//! are dropped.

use crate::errors::{Result, SummaryError};
use crate::types::SummarizerConfig;
use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period but rarely end a sentence, matched
/// case-insensitively
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "mt.", "vs.", "e.g.", "i.e.", "u.s.",
    "u.k.", "u.n.", "e.u.", "inc.", "ltd.", "corp.", "approx.", "dept.", "sept.",
];

/// Abbreviations that are also ordinary words in lowercase ("said no.",
/// "a co."), matched only with their capital letter
const CASED_ABBREVIATIONS: &[&str] = &[
    "Co.", "St.", "Gen.", "Gov.", "Sen.", "Rep.", "Lt.", "Col.", "Sgt.", "Capt.", "Fig.", "Jan.",
    "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

/// Sentence-final punctuation, optional closing quotes or brackets, then
/// whitespace and a digit
fn digit_start() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"[.!?]["'\u{2019}\u{201D})\]]*\s+[0-9]"#)
            .expect("digit boundary pattern is valid")
    })
}

/// Splits raw text into cleaned sentences
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Sentences with this many characters or fewer (after trimming) are dropped
    min_chars: usize,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the default 10-character floor
    pub fn new() -> Self {
        Self { min_chars: 10 }
    }

    /// Create a segmenter using the floor from a config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            min_chars: config.min_sentence_chars,
        }
    }

    /// Set the minimum sentence length in characters
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Segment text into trimmed sentences longer than the floor
    pub fn segment(&self, text: &str) -> Vec<String> {
        merge_abbreviations(text.split_sentence_bounds().flat_map(split_before_digits))
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| s.chars().count() > self.min_chars)
            .collect()
    }

    /// Segment raw bytes, failing when they are not valid UTF-8
    pub fn segment_bytes(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            SummaryError::segmentation(format!(
                "input is not valid UTF-8 (valid up to byte {})",
                e.valid_up_to()
            ))
        })?;
        Ok(self.segment(text))
    }
}

/// Split a boundary piece where a sentence ends and the next one opens with
/// a number ("last year. 2024 was"), which UAX #29 keeps together
fn split_before_digits(piece: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for m in digit_start().find_iter(piece) {
        // the match ends on the single-byte ASCII digit
        let split = m.end() - 1;
        parts.push(&piece[start..split]);
        start = split;
    }
    parts.push(&piece[start..]);
    parts
}

/// Join boundary pieces whose split point sits right after an abbreviation
fn merge_abbreviations<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut pieces = pieces.peekable();

    while let Some(piece) = pieces.next() {
        current.push_str(piece);
        let next = pieces.peek().copied().unwrap_or("");
        if !ends_with_abbreviation(&current, next) {
            sentences.push(std::mem::take(&mut current));
        }
    }

    if !current.trim().is_empty() {
        sentences.push(current);
    }

    sentences
}

fn ends_with_abbreviation(text: &str, next: &str) -> bool {
    let Some(last_word) = text.split_whitespace().last() else {
        return false;
    };

    if !last_word.ends_with('.') {
        return false;
    }

    // Single capital initial such as "J."
    let mut chars = last_word.chars();
    if let (Some(first), Some('.'), None) = (chars.next(), chars.next(), chars.next()) {
        if first.is_uppercase() {
            return true;
        }
    }

    let word = last_word.trim_start_matches(|c: char| !c.is_alphanumeric());

    // "No. 10" but not "said No."
    if word == "No." {
        return next.trim_start().starts_with(|c: char| c.is_ascii_digit());
    }

    CASED_ABBREVIATIONS.contains(&word) || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment(
            "The council approved the budget. Residents protested outside! Was it fair?",
        );

        assert_eq!(
            sentences,
            vec![
                "The council approved the budget.",
                "Residents protested outside!",
                "Was it fair?",
            ]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let segmenter = SentenceSegmenter::new();
        // Both fragments are exactly 10 characters, which is at the floor
        let sentences = segmenter.segment("A cat sat. Short one. A dog ran far away today.");

        assert_eq!(sentences, vec!["A dog ran far away today."]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment(
            "Dr. Smith met Mr. Jones in Washington. They discussed the U.S. Senate vote.",
        );

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("Dr. Smith met Mr. Jones"));
        assert!(sentences[1].contains("U.S. Senate"));
    }

    #[test]
    fn test_split_before_leading_number() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment(
            "Sales rose sharply last year. 2024 was a record year for the firm. \
             Analysts were pleased today.",
        );

        assert_eq!(
            sentences,
            vec![
                "Sales rose sharply last year.",
                "2024 was a record year for the firm.",
                "Analysts were pleased today.",
            ]
        );
    }

    #[test]
    fn test_abbreviation_before_number_stays_joined() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment(
            "The prime minister returned to No. 10 on Friday. Talks resumed on Jan. 5 as planned.",
        );

        assert_eq!(
            sentences,
            vec![
                "The prime minister returned to No. 10 on Friday.",
                "Talks resumed on Jan. 5 as planned.",
            ]
        );
    }

    #[test]
    fn test_lowercase_words_end_sentences() {
        let segmenter = SentenceSegmenter::new();

        let sentences = segmenter.segment(
            "The minister was asked to resign and said no. The committee then adjourned for the day.",
        );
        assert_eq!(
            sentences,
            vec![
                "The minister was asked to resign and said no.",
                "The committee then adjourned for the day.",
            ]
        );

        let sentences = segmenter
            .segment("The bakery was run as a workers co. The members voted to expand it.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_capitalized_abbreviations_join() {
        let segmenter = SentenceSegmenter::new();
        let sentences =
            segmenter.segment("Shares in Smith & Co. Holdings fell. Gen. Miller declined to comment.");

        assert_eq!(
            sentences,
            vec![
                "Shares in Smith & Co. Holdings fell.",
                "Gen. Miller declined to comment.",
            ]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment("The report by J. R. Hartley was published today.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_min_chars_configurable() {
        let segmenter = SentenceSegmenter::new().with_min_chars(0);
        let sentences = segmenter.segment("A cat sat. Hi.");
        assert_eq!(sentences, vec!["A cat sat.", "Hi."]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let segmenter = SentenceSegmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_segment_is_deterministic() {
        let segmenter = SentenceSegmenter::new();
        let text = "Markets rallied on Monday. Bond yields fell sharply. Analysts were surprised.";
        assert_eq!(segmenter.segment(text), segmenter.segment(text));
    }

    #[test]
    fn test_segment_bytes_invalid_utf8() {
        let segmenter = SentenceSegmenter::new();
        let err = segmenter.segment_bytes(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, SummaryError::Segmentation { .. }));

        let ok = segmenter
            .segment_bytes("Markets rallied on Monday.".as_bytes())
            .unwrap();
        assert_eq!(ok, vec!["Markets rallied on Monday."]);
    }
}
