//! Position-based basic summary
//!
//! Used when scored selection leaves fewer than two usable points. Picks the
//! first, middle and last sentences, then fills remaining slots from the
//! start of the text.

use super::simplifier::{capitalize_first, SentenceSimplifier};
use crate::types::Sentence;

/// Picks summary points by position alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSummary {
    simplifier: SentenceSimplifier,
}

impl BasicSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build at most `target` points from `sentences`.
    pub fn summarize(&self, sentences: &[Sentence], target: usize) -> Vec<String> {
        pick(sentences, target)
            .into_iter()
            .map(|s| capitalize_first(&self.simplifier.simplify(&s.text)))
            .collect()
    }
}

/// Choose sentences: first, middle (`len / 2`), last, then fillers from index 1.
pub fn pick(sentences: &[Sentence], target: usize) -> Vec<&Sentence> {
    if sentences.len() <= target {
        return sentences.iter().collect();
    }

    let n = sentences.len();
    let mut chosen: Vec<&Sentence> = Vec::with_capacity(target);

    push_unique(&mut chosen, &sentences[0], target);
    if n > 2 {
        push_unique(&mut chosen, &sentences[n / 2], target);
    }
    if n > 1 {
        push_unique(&mut chosen, &sentences[n - 1], target);
    }
    for candidate in &sentences[1..] {
        if chosen.len() >= target {
            break;
        }
        push_unique(&mut chosen, candidate, target);
    }

    chosen
}

fn push_unique<'a>(chosen: &mut Vec<&'a Sentence>, candidate: &'a Sentence, target: usize) {
    if chosen.len() < target && !chosen.iter().any(|c| c.text == candidate.text) {
        chosen.push(candidate);
    }
}
