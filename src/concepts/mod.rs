//! Concept extraction
//!
//! Concepts are salient noun-like keywords used as scoring signals. Two
//! [`ConceptSource`]s exist:
//!
//! - [`TaggedConceptSource`] keeps nouns and proper nouns found by the
//!   part-of-speech tagger. It is only available for languages with a
//!   bundled tagger model.
//! - [`PatternConceptSource`] keeps capitalized words (`[A-Z][a-z]+`) and
//!   needs no tagger. English uses a short fixed stopword list; other
//!   languages use their bundled list when one exists.
//!
//! [`ConceptExtractor`] picks one of them up front from the configured
//! [`ConceptMode`] and the tagger's availability. An unavailable tagger is
//! never an error: extraction degrades to the pattern source.

pub mod sources;

pub use sources::{PatternConceptSource, TaggedConceptSource};

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{ConceptMode, SummaryConfig};

/// A source of concept candidates.
///
/// Implementations return raw candidates in text order; filtering,
/// deduplication and truncation are shared through [`finalize_concepts`].
pub trait ConceptSource {
    /// Which kind of source this is.
    fn kind(&self) -> ConceptSourceKind;

    /// Whether the source's resources are loaded and usable.
    fn is_available(&self) -> bool;

    /// Extract concepts from `text`.
    fn extract(&self, text: &str, cfg: &SummaryConfig) -> Vec<String>;
}

/// Identifies the source that produced a concept list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptSourceKind {
    Tagged,
    Pattern,
    /// Tagger forced by configuration but unavailable
    Unavailable,
}

/// Drop stopwords and short tokens, deduplicate (first occurrence wins)
/// and keep at most `cfg.max_concepts`.
pub fn finalize_concepts<I, S>(candidates: I, stopwords: &StopwordFilter, cfg: &SummaryConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut concepts = Vec::new();

    for candidate in candidates {
        if concepts.len() >= cfg.max_concepts {
            break;
        }
        let word = candidate.as_ref();
        if word.chars().count() < cfg.min_concept_chars || stopwords.is_stopword(word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            concepts.push(word.to_string());
        }
    }

    concepts
}

/// Selects a concept source once and extracts concepts with it.
#[derive(Debug, Clone)]
pub struct ConceptExtractor {
    mode: ConceptMode,
    tagged: TaggedConceptSource,
    pattern: PatternConceptSource,
}

impl ConceptExtractor {
    /// Build an extractor for the configured language and mode.
    pub fn from_config(cfg: &SummaryConfig) -> Self {
        Self {
            mode: cfg.concept_mode,
            tagged: TaggedConceptSource::for_language(&cfg.language),
            pattern: PatternConceptSource::for_language(&cfg.language),
        }
    }

    /// The source chosen for the configured mode, `None` when the tagger is
    /// required but has no model.
    fn source(&self) -> Option<&dyn ConceptSource> {
        match self.mode {
            ConceptMode::Pattern => Some(&self.pattern),
            ConceptMode::Tagged | ConceptMode::Auto if self.tagged.is_available() => {
                Some(&self.tagged)
            }
            ConceptMode::Tagged => None,
            ConceptMode::Auto => Some(&self.pattern),
        }
    }

    /// The source [`extract`](Self::extract) will use.
    pub fn active_source(&self) -> ConceptSourceKind {
        self.source()
            .map_or(ConceptSourceKind::Unavailable, |source| source.kind())
    }

    /// Extract at most `cfg.max_concepts` concepts from `text`.
    pub fn extract(&self, text: &str, cfg: &SummaryConfig) -> Vec<String> {
        self.source()
            .map(|source| source.extract(text, cfg))
            .unwrap_or_default()
    }
}
