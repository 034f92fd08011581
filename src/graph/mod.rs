//! Sentence graph construction
//!
//! This module provides the similarity graph that the TextRank sentence
//! ranker runs PageRank over.

pub mod similarity;
