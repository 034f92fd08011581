//! Natural Language Processing components
//!
//! Text cleanup, sentence segmentation, term tokenization and stopword
//! filtering.

pub mod cleaner;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
