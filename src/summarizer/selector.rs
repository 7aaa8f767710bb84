//! Top-N sentence selection
//!
//! Ranks scored sentences, keeps the highest-scoring ones, simplifies them,
//! and drops points that end up too short to be useful.

use super::scorer::SentenceScorer;
use super::simplifier::{capitalize_first, SentenceSimplifier};
use crate::types::{ScoredSentence, Sentence};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Simplified points with fewer words than this are dropped
    pub min_point_words: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: 5,
            min_point_words: 4,
        }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct SelectionResult {
    /// Simplified, capitalized points in rank order
    pub points: Vec<String>,
    /// Every candidate with its score, in rank order
    pub ranked: Vec<ScoredSentence>,
}

/// Score-based sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
    simplifier: SentenceSimplifier,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            config,
            simplifier: SentenceSimplifier::new(),
        }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Select key points from `sentences`.
    ///
    /// When there are no more sentences than requested, all are returned
    /// unscored and unfiltered, in document order.
    pub fn select(&self, sentences: &[Sentence], scorer: &SentenceScorer) -> SelectionResult {
        if sentences.len() <= self.config.num_sentences {
            return SelectionResult {
                points: sentences
                    .iter()
                    .map(|s| capitalize_first(&self.simplifier.simplify(&s.text)))
                    .collect(),
                ranked: Vec::new(),
            };
        }

        let ranked = self.rank_sentences(sentences, scorer);
        let points = self.take_points(&ranked);

        SelectionResult { points, ranked }
    }

    /// Score and rank every sentence.
    pub fn rank_sentences(&self, sentences: &[Sentence], scorer: &SentenceScorer) -> Vec<ScoredSentence> {
        rank(scorer.score_all(sentences))
    }

    /// Simplify the top-ranked sentences, dropping points that end up too short.
    pub fn take_points(&self, ranked: &[ScoredSentence]) -> Vec<String> {
        ranked
            .iter()
            .take(self.config.num_sentences)
            .map(|s| self.simplifier.simplify(&s.sentence.text))
            .filter(|p| p.split_whitespace().count() >= self.config.min_point_words)
            .map(|p| capitalize_first(&p))
            .collect()
    }
}

/// Sort by score descending; earlier sentences win ties.
pub fn rank(mut scored: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.sentence.index.cmp(&b.sentence.index))
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect()
    }

    #[test]
    fn test_short_circuit_returns_all_in_order() {
        let input = sentences(&["the cat sat", "The cat ran fast and jumped high"]);
        let scorer = SentenceScorer::new::<&str>(&[]);
        let result = SentenceSelector::new().with_num_sentences(3).select(&input, &scorer);

        assert_eq!(result.points, vec!["The cat sat", "The cat ran fast and jumped high"]);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_rank_ties_prefer_earlier() {
        let scored = vec![
            ScoredSentence { score: 1, sentence: Sentence::new("b", 1) },
            ScoredSentence { score: 4, sentence: Sentence::new("c", 2) },
            ScoredSentence { score: 1, sentence: Sentence::new("a", 0) },
            ScoredSentence { score: 4, sentence: Sentence::new("d", 3) },
        ];
        let order: Vec<usize> = rank(scored).iter().map(|s| s.sentence.index).collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_selects_top_n_and_filters_short_points() {
        let input = sentences(&[
            "Enzymes speed up chemical reactions in every living cell",
            "They bind, which takes a while",
            "Temperature changes how fast enzymes can work inside cells",
            "Filler sentence about nothing much at all",
            "Another filler sentence about nothing much",
            "The key idea is that enzymes are reusable catalysts",
        ]);
        let scorer = SentenceScorer::new(&["enzymes"]);
        let selector = SentenceSelector::with_config(SelectorConfig {
            num_sentences: 3,
            min_point_words: 4,
        });
        let result = selector.select(&input, &scorer);

        // index 5: last +2, concept +2, 9 words +1, "key" +3 = 8
        // index 0: first +3, concept +2, 9 words +1 = 6
        // index 2: early +2, concept +2, 9 words +1 = 5
        assert_eq!(result.ranked[0].sentence.index, 5);
        assert_eq!(result.ranked[1].sentence.index, 0);
        assert_eq!(result.ranked[2].sentence.index, 2);
        assert_eq!(
            result.points,
            vec![
                "The key idea is that enzymes are reusable catalysts",
                "Enzymes speed up chemical reactions in every living cell",
                "Temperature changes how fast enzymes can work inside cells",
            ]
        );
    }

    #[test]
    fn test_points_may_be_fewer_than_requested() {
        let input = sentences(&[
            "Cells, which are small",
            "Tissues, which are bigger",
            "Organs, which are bigger still",
            "Systems, which are biggest",
        ]);
        let scorer = SentenceScorer::new::<&str>(&[]);
        let result = SentenceSelector::new().with_num_sentences(3).select(&input, &scorer);

        assert!(result.points.is_empty());
        assert_eq!(result.ranked.len(), 4);
    }
}
