//! # rapid-keypoints
//!
//! Extractive key-point summarization for study material.
//!
//! Given a block of text, the crate picks the sentences that best represent
//! it and simplifies them into short "key points":
//!
//! - sentences are split on terminal punctuation and short fragments dropped
//! - salient nouns are extracted as concepts (part-of-speech tagger, or a
//!   capitalization heuristic when no tagger model is available)
//! - each sentence is scored on position, concept overlap, length and
//!   importance words; the best ones are simplified
//! - when scoring leaves fewer than two usable points, a position-based basic
//!   summary is used instead
//!
//! ```
//! let points = rapid_keypoints::generate_summary(
//!     "The cat sat. The cat ran fast and jumped high.",
//!     3,
//! );
//! assert_eq!(points, vec!["The cat sat", "The cat ran fast and jumped high"]);
//! ```
//!
//! Summarization never fails; empty or degenerate input yields no points.

pub mod concepts;
pub mod nlp;
pub mod notes;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use concepts::{ConceptExtractor, ConceptSource, ConceptSourceKind};
pub use pipeline::artifacts::{SummaryOutcome, SummaryPath};
pub use pipeline::errors::SummarySpecError;
pub use pipeline::runner::Summarizer;
pub use pipeline::spec::SummarySpec;
pub use types::{ConceptMode, SummaryConfig};

/// Summarize `text` into at most `point_count` simplified key points.
///
/// `point_count` is clamped into `[3, 10]`.
pub fn generate_summary(text: &str, point_count: usize) -> Vec<String> {
    Summarizer::with_config(SummaryConfig::default().with_point_count(point_count))
        .summarize(text)
        .into_points()
}
