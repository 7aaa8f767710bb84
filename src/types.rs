//! Core data types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

/// Smallest number of key points a caller may request.
pub const MIN_POINT_COUNT: usize = 3;
/// Largest number of key points a caller may request.
pub const MAX_POINT_COUNT: usize = 10;

/// Part-of-speech tag assigned by the built-in tagger.
///
/// Coarse, Universal-Dependencies-style categories. Singular and plural
/// nouns share [`PosTag::Noun`]; proper nouns (either number) share
/// [`PosTag::ProperNoun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other,
}

impl PosTag {
    /// Whether the tag marks a common or proper noun.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A word or punctuation token with its character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// True for word tokens (as opposed to punctuation).
    pub fn is_word(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_alphanumeric)
    }
}

/// A candidate sentence produced by the segmenter.
///
/// `text` is trimmed and carries no terminal punctuation; `index` is the
/// position among the surviving candidates (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Whitespace-delimited word count.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A sentence paired with its heuristic score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    pub score: i32,
    pub sentence: Sentence,
}

/// Which concept source the extractor should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptMode {
    /// Tagger when its model is available, capitalization heuristic otherwise.
    #[default]
    Auto,
    /// Tagger only; an unavailable model yields no concepts.
    Tagged,
    /// Capitalization heuristic only.
    Pattern,
}

/// Configuration for a summarization run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Number of key points requested, within [`MIN_POINT_COUNT`, `MAX_POINT_COUNT`]
    pub point_count: usize,
    /// Sentences must be longer than this (in characters) to be scored
    pub min_sentence_chars: usize,
    /// Sentences must be longer than this to be used by the basic summary
    pub fallback_min_sentence_chars: usize,
    /// Simplified points with fewer words are dropped
    pub min_point_words: usize,
    /// Maximum number of concepts kept
    pub max_concepts: usize,
    /// Concepts must have at least this many characters
    pub min_concept_chars: usize,
    /// Language of the stopword list and tagger model
    pub language: String,
    /// Concept source selection
    pub concept_mode: ConceptMode,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            point_count: 5,
            min_sentence_chars: 10,
            fallback_min_sentence_chars: 20,
            min_point_words: 4,
            max_concepts: 8,
            min_concept_chars: 4,
            language: "en".to_string(),
            concept_mode: ConceptMode::Auto,
        }
    }
}

impl SummaryConfig {
    /// Set the requested point count, clamped into the supported range.
    pub fn with_point_count(mut self, n: usize) -> Self {
        self.point_count = n.clamp(MIN_POINT_COUNT, MAX_POINT_COUNT);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_concept_mode(mut self, mode: ConceptMode) -> Self {
        self.concept_mode = mode;
        self
    }
}
