//! Article text cleanup
//!
//! Turns scraped article bodies into plain prose before segmentation:
//! HTML entities and tags, URLs and emoji are removed and whitespace is
//! collapsed.

use super::segmenter::SentenceSegmenter;
use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    entity: Regex,
    tag: Regex,
    url: Regex,
    emoji: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        entity: Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("valid regex"),
        tag: Regex::new(r"<[^>]+>").expect("valid regex"),
        url: Regex::new(r"https?://[^\s<>]+").expect("valid regex"),
        emoji: Regex::new(concat!(
            "[",
            "\u{1F600}-\u{1F64F}",
            "\u{1F300}-\u{1F5FF}",
            "\u{1F680}-\u{1F6FF}",
            "\u{1F1E0}-\u{1F1FF}",
            "\u{2702}-\u{27B0}",
            "\u{24C2}-\u{1F251}",
            "]+"
        ))
        .expect("valid regex"),
        whitespace: Regex::new(r"\s+").expect("valid regex"),
    })
}

/// Cleans raw article text
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    segmenter: SentenceSegmenter,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific segmenter for [`Self::clean_and_segment`]
    pub fn with_segmenter(mut self, segmenter: SentenceSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Run every cleanup step in order
    pub fn clean(&self, text: &str) -> String {
        let text = self.unescape_html(text);
        let text = self.remove_html_tags(&text);
        let text = self.remove_urls(&text);
        let text = self.remove_emojis(&text);
        self.normalize_whitespace(&text)
    }

    /// Clean, then split into sentences
    pub fn clean_and_segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(&self.clean(text))
    }

    /// Decode named and numeric HTML entities; unknown entities are kept
    pub fn unescape_html(&self, text: &str) -> String {
        patterns()
            .entity
            .replace_all(text, |caps: &regex::Captures<'_>| {
                decode_entity(&caps[1]).map_or_else(|| caps[0].to_string(), String::from)
            })
            .into_owned()
    }

    pub fn remove_html_tags(&self, text: &str) -> String {
        patterns().tag.replace_all(text, "").into_owned()
    }

    pub fn remove_urls(&self, text: &str) -> String {
        patterns().url.replace_all(text, "").into_owned()
    }

    pub fn remove_emojis(&self, text: &str) -> String {
        patterns().emoji.replace_all(text, "").into_owned()
    }

    /// Collapse whitespace runs to a single space and trim
    pub fn normalize_whitespace(&self, text: &str) -> String {
        patterns()
            .whitespace
            .replace_all(text, " ")
            .trim()
            .to_string()
    }
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(hex) = body
        .strip_prefix("#x")
        .or_else(|| body.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = body.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ldquo" => Some('\u{201C}'),
        "rdquo" => Some('\u{201D}'),
        "hellip" => Some('\u{2026}'),
        _ => None,
    }
}
