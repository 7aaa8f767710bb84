//! Pipeline output artifacts.
//!
//! [`SummaryOutcome`] is the public result of a run: the key points plus
//! enough context to tell which branch of the pipeline produced them.

use serde::Serialize;

use crate::concepts::ConceptSourceKind;

/// Which branch of the pipeline produced the points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryPath {
    /// No more sentences than requested; every sentence was simplified
    Direct,
    /// Concept- and position-scored selection
    Scored,
    /// Position-based basic summary after scored selection degenerated
    Fallback,
}

/// Result of a summarization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryOutcome {
    /// Simplified key points
    pub points: Vec<String>,
    pub path: SummaryPath,
    /// Concepts used for scoring (empty on the direct path)
    pub concepts: Vec<String>,
    /// Source of `concepts`, when concepts were extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_source: Option<ConceptSourceKind>,
}

impl SummaryOutcome {
    pub fn direct(points: Vec<String>) -> Self {
        Self {
            points,
            path: SummaryPath::Direct,
            concepts: Vec::new(),
            concept_source: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<String> {
        self.points
    }
}
