//! Heuristic sentence scoring
//!
//! Each sentence gets an integer score from four independent signals:
//!
//! | Signal | Bonus |
//! |--------|-------|
//! | position: first / index 1-2 / last (first matching case only) | +3 / +2 / +2 |
//! | each concept present among the sentence's words | +2 |
//! | word count in `[8, 20]` | +1 |
//! | contains an importance indicator ("key", "essential", ...) | +3 once |

use rustc_hash::FxHashSet;

use crate::nlp::tokenizer::Tokenizer;
use crate::types::{ScoredSentence, Sentence};

/// Words whose presence marks a sentence as important.
pub const IMPORTANCE_INDICATORS: [&str; 8] = [
    "important",
    "key",
    "main",
    "primary",
    "essential",
    "critical",
    "significant",
    "fundamental",
];

const FIRST_BONUS: i32 = 3;
const EARLY_BONUS: i32 = 2;
const LAST_BONUS: i32 = 2;
const CONCEPT_BONUS: i32 = 2;
const LENGTH_BONUS: i32 = 1;
const INDICATOR_BONUS: i32 = 3;
const PREFERRED_WORDS: std::ops::RangeInclusive<usize> = 8..=20;

/// Scores sentences against a concept list and their position.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    /// Lowercased concepts
    concepts: Vec<String>,
    tokenizer: Tokenizer,
}

impl SentenceScorer {
    pub fn new<S: AsRef<str>>(concepts: &[S]) -> Self {
        Self {
            concepts: concepts.iter().map(|c| c.as_ref().to_lowercase()).collect(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Score every sentence; `sentences[i].index` is taken as its position.
    pub fn score_all(&self, sentences: &[Sentence]) -> Vec<ScoredSentence> {
        let total = sentences.len();
        sentences
            .iter()
            .map(|sentence| ScoredSentence {
                score: self.score(sentence, total),
                sentence: sentence.clone(),
            })
            .collect()
    }

    /// Score one sentence out of `total` candidates.
    pub fn score(&self, sentence: &Sentence, total: usize) -> i32 {
        position_bonus(sentence.index, total)
            + self.concept_bonus(&sentence.text)
            + length_bonus(sentence.word_count())
            + indicator_bonus(&sentence.text)
    }

    fn concept_bonus(&self, text: &str) -> i32 {
        let words: FxHashSet<String> = self.tokenizer.lowercase_words(text).into_iter().collect();
        let hits = self.concepts.iter().filter(|c| words.contains(*c)).count();
        CONCEPT_BONUS * hits as i32
    }
}

/// First sentence, then the two after it, then the last; first match wins.
pub fn position_bonus(index: usize, total: usize) -> i32 {
    if index == 0 {
        FIRST_BONUS
    } else if index < 3 {
        EARLY_BONUS
    } else if index + 1 == total {
        LAST_BONUS
    } else {
        0
    }
}

pub fn length_bonus(word_count: usize) -> i32 {
    if PREFERRED_WORDS.contains(&word_count) {
        LENGTH_BONUS
    } else {
        0
    }
}

/// Substring match on the lowercased sentence, applied once.
pub fn indicator_bonus(text: &str) -> i32 {
    let lower = text.to_lowercase();
    if IMPORTANCE_INDICATORS.iter().any(|i| lower.contains(i)) {
        INDICATOR_BONUS
    } else {
        0
    }
}
