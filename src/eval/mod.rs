//! Summary evaluation: ROUGE scoring, batch aggregation and error analysis

pub mod analysis;
pub mod batch;
pub mod rouge;

pub use analysis::{ErrorAnalyzer, ErrorExample, MethodErrorAnalysis, ScoredSummary};
pub use batch::{evaluate_batch, BatchScoreRecord};
pub use rouge::RougeEvaluator;
