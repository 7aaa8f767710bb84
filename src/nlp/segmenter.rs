//! Sentence segmentation
//!
//! Splits normalized text on terminal punctuation (`.`, `!`, `?`) and keeps
//! only fragments longer than a caller-chosen character threshold.

use super::tokenizer::normalize_whitespace;
use crate::types::Sentence;

const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Punctuation-based sentence splitter.
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter {
    /// Fragments must be strictly longer than this (in characters)
    min_chars: usize,
}

impl SentenceSegmenter {
    /// Create a segmenter that discards fragments of `min_chars` characters or fewer.
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Segment `text`, normalizing its whitespace first.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.segment_normalized(&normalize_whitespace(text))
    }

    /// Segment text whose whitespace is already normalized.
    pub fn segment_normalized(&self, text: &str) -> Vec<Sentence> {
        text.split(TERMINALS)
            .map(str::trim)
            .filter(|s| s.chars().count() > self.min_chars)
            .enumerate()
            .map(|(index, s)| Sentence::new(s, index))
            .collect()
    }
}
