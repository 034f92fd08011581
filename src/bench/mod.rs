//! Benchmark harness
//!
//! Runs every registered [`Summarizer`] over a corpus of news articles and
//! scores each summary against a lead-sentence reference. For each article
//! the steps are:
//!
//! 1. Clean the raw text and segment it into sentences
//! 2. Skip articles that are too short or have too few sentences
//! 3. Use the first few sentences, joined by a space, as the reference
//! 4. Time every summarizer and score its output with ROUGE
//!
//! Articles are evaluated in parallel; results keep the input order.

pub mod report;

pub use report::{ArticleResult, BenchmarkReport, MethodResult, MethodSummary};

use crate::errors::{Result, SummaryError};
use crate::eval::{BatchScoreRecord, ErrorAnalyzer, RougeEvaluator, ScoredSummary};
use crate::nlp::cleaner::TextCleaner;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::summarizer::{ExtractiveSummarizer, Summarizer};
use crate::types::SummarizerConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Enter a tracing span for a benchmark stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("benchmark_stage", stage = $name).entered();
    };
}

// ============================================================================
// Input
// ============================================================================

/// A news article to benchmark on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Article {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            url: String::new(),
            title: String::new(),
            text: text.into(),
            source: None,
        }
    }

    /// Builder method: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method: set the publishing source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parse a JSON array of articles
    pub fn from_json_list(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Split articles into a training and a test portion.
///
/// The first `⌊len · train_ratio⌋` articles form the training portion. The
/// ratio is clamped to `[0, 1]`.
pub fn split_articles<T>(articles: &[T], train_ratio: f64) -> (&[T], &[T]) {
    let ratio = if train_ratio.is_nan() {
        0.0
    } else {
        train_ratio.clamp(0.0, 1.0)
    };
    let split = ((articles.len() as f64) * ratio).floor() as usize;
    articles.split_at(split.min(articles.len()))
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for [`BenchmarkRunner`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Articles with fewer raw characters are skipped
    pub min_text_chars: usize,
    /// Articles with fewer sentences after cleaning are skipped
    pub min_sentences: usize,
    /// Leading sentences that form the reference summary
    pub reference_sentences: usize,
    /// Share of the corpus used for training by [`split_articles`]
    pub train_ratio: f64,
    /// Configuration of the built-in extractive summarizers; its
    /// `num_sentences` is the summary length requested from every summarizer
    pub summarizer: SummarizerConfig,
    /// Thresholds of the error analysis
    pub analyzer: ErrorAnalyzer,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 200,
            min_sentences: 3,
            reference_sentences: 3,
            train_ratio: 0.8,
            summarizer: SummarizerConfig::default(),
            analyzer: ErrorAnalyzer::default(),
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.reference_sentences == 0 {
            return Err(SummaryError::invalid_config(
                "reference_sentences must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(SummaryError::invalid_config(format!(
                "train_ratio must be between 0 and 1, got {}",
                self.train_ratio
            )));
        }
        self.summarizer.validate()
    }

    /// Builder method: set the article filters
    pub fn with_filters(mut self, min_text_chars: usize, min_sentences: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self.min_sentences = min_sentences;
        self
    }

    /// Builder method: set reference length
    pub fn with_reference_sentences(mut self, n: usize) -> Self {
        self.reference_sentences = n;
        self
    }

    /// Builder method: set summary length (stored in the summarizer config)
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.summarizer.num_sentences = n;
        self
    }

    /// Sentences requested from every summarizer
    pub fn num_sentences(&self) -> usize {
        self.summarizer.num_sentences
    }

    /// Builder method: set summarizer config
    pub fn with_summarizer_config(mut self, config: SummarizerConfig) -> Self {
        self.summarizer = config;
        self
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Evaluates a set of summarizers on a corpus
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    summarizers: Vec<Box<dyn Summarizer>>,
    cleaner: TextCleaner,
    segmenter: SentenceSegmenter,
    evaluator: RougeEvaluator,
}

impl std::fmt::Debug for BenchmarkRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.summarizers.iter().map(|s| s.name()).collect();
        f.debug_struct("BenchmarkRunner")
            .field("config", &self.config)
            .field("summarizers", &names)
            .finish()
    }
}

impl BenchmarkRunner {
    /// Create a runner with the three extractive summarizers registered
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        let summarizers = ExtractiveSummarizer::all(&config.summarizer)?
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn Summarizer>)
            .collect();
        Self::with_summarizers(config, summarizers)
    }

    /// Create a runner with a custom set of summarizers
    pub fn with_summarizers(
        config: BenchmarkConfig,
        summarizers: Vec<Box<dyn Summarizer>>,
    ) -> Result<Self> {
        config.validate()?;
        let segmenter = SentenceSegmenter::from_config(&config.summarizer);
        Ok(Self {
            config,
            summarizers,
            cleaner: TextCleaner::new(),
            segmenter,
            evaluator: RougeEvaluator::new(),
        })
    }

    /// Register an additional summarizer
    pub fn add_summarizer(&mut self, summarizer: Box<dyn Summarizer>) {
        self.summarizers.push(summarizer);
    }

    /// Replace the ROUGE evaluator
    pub fn with_evaluator(mut self, evaluator: RougeEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Names of the registered summarizers, in registration order
    pub fn method_names(&self) -> Vec<&str> {
        self.summarizers.iter().map(|s| s.name()).collect()
    }

    /// Evaluate one article, or `None` when it is filtered out
    pub fn evaluate_article(&self, article_id: usize, article: &Article) -> Option<ArticleResult> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("benchmark_article", article_id).entered();

        let text_length = article.text.chars().count();
        if text_length < self.config.min_text_chars {
            return None;
        }

        let processed = self.cleaner.clean(&article.text);
        let sentences = self.segmenter.segment(&processed);
        if sentences.len() < self.config.min_sentences {
            return None;
        }

        let reference_len = self.config.reference_sentences.min(sentences.len());
        let reference = sentences[..reference_len].join(" ");

        let methods = self
            .summarizers
            .iter()
            .filter_map(|summarizer| {
                let start = Instant::now();
                match summarizer.summarize(&processed, self.config.num_sentences()) {
                    Ok(summary) => {
                        let elapsed_secs = start.elapsed().as_secs_f64();
                        let scores = self.evaluator.evaluate(&reference, &summary);
                        Some(MethodResult {
                            method: summarizer.name().to_string(),
                            summary,
                            scores,
                            elapsed_secs,
                        })
                    }
                    Err(_err) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            method = summarizer.name(),
                            article_id,
                            error = %_err,
                            "summarizer failed"
                        );
                        None
                    }
                }
            })
            .collect();

        Some(ArticleResult {
            article_id,
            url: article.url.clone(),
            title: article.title.clone(),
            text_length,
            num_sentences: sentences.len(),
            reference,
            methods,
        })
    }

    /// Evaluate every article and aggregate the results
    pub fn run(&self, articles: &[Article]) -> BenchmarkReport {
        let results: Vec<ArticleResult> = {
            trace_stage!("evaluate");
            articles
                .par_iter()
                .enumerate()
                .filter_map(|(id, article)| self.evaluate_article(id, article))
                .collect()
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            total = articles.len(),
            evaluated = results.len(),
            "benchmark articles evaluated"
        );

        trace_stage!("aggregate");
        let mut summaries = Vec::with_capacity(self.summarizers.len());
        let mut error_analysis = Vec::with_capacity(self.summarizers.len());

        for name in self.method_names() {
            let scored: Vec<ScoredSummary> = results
                .iter()
                .filter_map(|article| {
                    article.method(name).map(|m| ScoredSummary {
                        article_id: article.article_id,
                        title: article.title.clone(),
                        scores: m.scores,
                        summary: m.summary.clone(),
                        text_length: article.text_length,
                        num_sentences: article.num_sentences,
                    })
                })
                .collect();

            let times: Vec<f64> = results
                .iter()
                .filter_map(|article| article.method(name).map(|m| m.elapsed_secs))
                .collect();
            let mean_time_secs = if times.is_empty() {
                0.0
            } else {
                times.iter().sum::<f64>() / times.len() as f64
            };

            let records: Vec<_> = scored.iter().map(|s| s.scores).collect();
            summaries.push(MethodSummary {
                method: name.to_string(),
                scores: BatchScoreRecord::from_sample_records(&records),
                mean_time_secs,
            });
            error_analysis.push(self.config.analyzer.analyze(name, &scored));
        }

        BenchmarkReport {
            total_articles: articles.len(),
            skipped_articles: articles.len() - results.len(),
            results,
            summaries,
            error_analysis,
        }
    }

    /// Split the corpus with the configured ratio and evaluate the test portion
    pub fn run_test_split(&self, articles: &[Article]) -> BenchmarkReport {
        let (_train, test) = split_articles(articles, self.config.train_ratio);
        self.run(test)
    }
}
