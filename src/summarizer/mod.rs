//! Summarization components
//!
//! Heuristic sentence scoring, top-N selection, sentence simplification and
//! the position-based basic summary used as a fallback.

pub mod fallback;
pub mod scorer;
pub mod selector;
pub mod simplifier;
