//! Concrete concept sources.

use once_cell::sync::Lazy;
use regex::Regex;
use stop_words::LANGUAGE;

use super::{finalize_concepts, ConceptSource, ConceptSourceKind};
use crate::nlp::stopwords::{language_of, StopwordFilter};
use crate::nlp::tagger::{PosTagger, TaggerModel};
use crate::types::SummaryConfig;

static CAPITALIZED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("static regex compile"));

static FALLBACK_FILTER: Lazy<StopwordFilter> = Lazy::new(StopwordFilter::fallback);

/// Nouns and proper nouns found by the part-of-speech tagger.
#[derive(Debug, Clone, Copy)]
pub struct TaggedConceptSource {
    model: Option<&'static TaggerModel>,
}

impl TaggedConceptSource {
    /// Source backed by the shared model for `language`, if one is bundled.
    pub fn for_language(language: &str) -> Self {
        Self {
            model: TaggerModel::for_language(language),
        }
    }
}

impl ConceptSource for TaggedConceptSource {
    fn kind(&self) -> ConceptSourceKind {
        ConceptSourceKind::Tagged
    }

    fn is_available(&self) -> bool {
        self.model.is_some()
    }

    fn extract(&self, text: &str, cfg: &SummaryConfig) -> Vec<String> {
        let Some(model) = self.model else {
            return Vec::new();
        };

        let nouns = PosTagger::new(model)
            .tag(text)
            .into_iter()
            .filter(|t| t.pos.is_nominal())
            .map(|t| t.token.text);

        finalize_concepts(nouns, model.stopwords(), cfg)
    }
}

/// Capitalized words, filtered against a stopword list.
///
/// English text uses the short fixed list; another language with a bundled
/// list uses that list instead.
#[derive(Debug, Clone, Default)]
pub struct PatternConceptSource {
    stopwords: Option<StopwordFilter>,
}

impl PatternConceptSource {
    /// Source using the fixed English list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_language(language: &str) -> Self {
        match language_of(language) {
            Some(LANGUAGE::English) | None => Self::new(),
            Some(lang) => Self {
                stopwords: Some(StopwordFilter::from_language(lang)),
            },
        }
    }

    fn stopwords(&self) -> &StopwordFilter {
        self.stopwords.as_ref().unwrap_or(&*FALLBACK_FILTER)
    }
}

impl ConceptSource for PatternConceptSource {
    fn kind(&self) -> ConceptSourceKind {
        ConceptSourceKind::Pattern
    }

    fn is_available(&self) -> bool {
        true
    }

    fn extract(&self, text: &str, cfg: &SummaryConfig) -> Vec<String> {
        let words = CAPITALIZED_WORD.find_iter(text).map(|m| m.as_str());
        finalize_concepts(words, self.stopwords(), cfg)
    }
}
