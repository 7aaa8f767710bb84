//! Natural Language Processing components
//!
//! This module provides tokenization, sentence segmentation, stopword
//! filtering and part-of-speech tagging.

pub mod segmenter;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
