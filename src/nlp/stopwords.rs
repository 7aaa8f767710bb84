//! Stopword filtering
//!
//! Language stopword lists come from the `stop-words` crate. They back the
//! tagger's concept filter and, for languages other than English, the
//! capitalization heuristic. A short fixed list of English function words
//! backs the heuristic for English text.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words excluded by the capitalization heuristic.
pub const FALLBACK_STOPWORDS: [&str; 14] = [
    "the", "and", "is", "in", "of", "to", "a", "that", "it", "with", "for", "as", "was", "on",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language, defaulting to
    /// English for languages without a bundled list.
    pub fn new(language: &str) -> Self {
        Self::for_language(language).unwrap_or_else(|| Self::from_language(LANGUAGE::English))
    }

    /// Create a stopword filter for the given language, or `None` when no
    /// list is bundled for it.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn for_language(language: &str) -> Option<Self> {
        language_of(language).map(Self::from_language)
    }

    /// The short fixed list used by the capitalization heuristic.
    pub fn fallback() -> Self {
        Self::from_list(&FALLBACK_STOPWORDS)
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load the bundled list for `lang`.
    pub fn from_language(lang: LANGUAGE) -> Self {
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Map a language name or ISO code to a bundled stopword list.
pub fn language_of(language: &str) -> Option<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}
