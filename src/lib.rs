//! # summarank
//!
//! Extractive summarization of news articles and ROUGE evaluation.
//!
//! This library segments article text into sentences, selects the most
//! informative ones with one of three strategies (Lead-K, TF-IDF salience,
//! sentence-level TextRank) and scores summaries against references with
//! ROUGE-1, ROUGE-2 and ROUGE-L.
//!
//! ## Features
//!
//! - **Order-preserving**: summaries always keep the original sentence order
//! - **Robust**: degenerate documents fall back to lead sentences instead of failing
//! - **Parallel**: batch evaluation and benchmarking run on `rayon`
//! - **Observable**: structured logging via `tracing` (default `tracing` feature)

pub mod bench;
pub mod errors;
pub mod eval;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use errors::{Result, SummaryError, VectorizationFailure};
pub use types::{RougeScore, ScoreRecord, SummarizerConfig};

// Re-export main functionality
pub use bench::{split_articles, Article, BenchmarkConfig, BenchmarkReport, BenchmarkRunner};
pub use eval::{evaluate_batch, BatchScoreRecord, ErrorAnalyzer, RougeEvaluator};
pub use graph::similarity::SimilarityMatrix;
pub use nlp::{
    cleaner::TextCleaner, segmenter::SentenceSegmenter, stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use summarizer::{
    selector::Summary, summarize_lead, summarize_textrank, summarize_tfidf,
    vectorizer::TfidfVectorizer, ExtractiveSummarizer, Summarizer,
};
pub use variants::{lead_k::LeadK, text_rank::SentenceTextRank, tfidf_rank::TfIdfRank, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
