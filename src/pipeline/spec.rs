//! Summary specification types.
//!
//! A [`SummarySpec`] is the JSON form of a [`SummaryConfig`]: how many points
//! to produce, which language and concept source to use, and the pipeline
//! thresholds. Specs are checked by the
//! [`super::validation::ValidationEngine`] before being turned into a config.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "point_count": 5,
//!   "language": "en",
//!   "concepts": "auto",
//!   "thresholds": { "min_sentence_chars": 10, "fallback_min_sentence_chars": 20 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::SummarySpecError;
use super::validation::ValidationEngine;
use crate::types::{ConceptMode, SummaryConfig};

/// Top-level summary specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Number of key points; defaults to 5.
    #[serde(default)]
    pub point_count: Option<usize>,

    /// Language of the stopword list and tagger; defaults to `"en"`.
    #[serde(default)]
    pub language: Option<String>,

    /// Concept source selection.
    #[serde(default)]
    pub concepts: ConceptMode,

    /// Pipeline thresholds. Omitted values keep their defaults.
    #[serde(default)]
    pub thresholds: ThresholdSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Length and count thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdSpec {
    #[serde(default)]
    pub min_sentence_chars: Option<usize>,

    #[serde(default)]
    pub fallback_min_sentence_chars: Option<usize>,

    #[serde(default)]
    pub min_point_words: Option<usize>,

    #[serde(default)]
    pub max_concepts: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummarySpec {
    /// Parse a spec from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, SummarySpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay the spec's values on the default config.
    fn apply(&self) -> SummaryConfig {
        let defaults = SummaryConfig::default();
        let t = &self.thresholds;
        SummaryConfig {
            point_count: self.point_count.unwrap_or(defaults.point_count),
            min_sentence_chars: t.min_sentence_chars.unwrap_or(defaults.min_sentence_chars),
            fallback_min_sentence_chars: t
                .fallback_min_sentence_chars
                .unwrap_or(defaults.fallback_min_sentence_chars),
            min_point_words: t.min_point_words.unwrap_or(defaults.min_point_words),
            max_concepts: t.max_concepts.unwrap_or(defaults.max_concepts),
            min_concept_chars: defaults.min_concept_chars,
            language: self.language.clone().unwrap_or(defaults.language),
            concept_mode: self.concepts,
        }
    }
}

impl TryFrom<&SummarySpec> for SummaryConfig {
    type Error = SummarySpecError;

    /// Validate with the default rules and build the config. Fails with the
    /// first error diagnostic; warnings are ignored.
    fn try_from(spec: &SummarySpec) -> Result<Self, Self::Error> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if let Some(err) = report.errors().next() {
            return Err(err.clone());
        }
        Ok(spec.apply())
    }
}
