//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Summarizer`] drives the stages in order, notifying an optional
//! [`PipelineObserver`] at each boundary:
//!
//! 1. Normalize whitespace
//! 2. Segment into candidate sentences
//! 3. If there are no more sentences than requested points, simplify them
//!    all and stop
//! 4. Extract concepts
//! 5. Score and rank sentences
//! 6. Select and simplify the top-ranked sentences
//! 7. If fewer than two points survive, build a position-based basic
//!    summary instead
//!
//! No stage can fail: degenerate input yields an empty outcome.

use rayon::prelude::*;

use super::artifacts::{SummaryOutcome, SummaryPath};
use super::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_CONCEPTS,
    STAGE_FALLBACK, STAGE_NORMALIZE, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::concepts::ConceptExtractor;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::tokenizer::normalize_whitespace;
use crate::summarizer::fallback::BasicSummary;
use crate::summarizer::scorer::SentenceScorer;
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::types::{SummaryConfig, MAX_POINT_COUNT, MIN_POINT_COUNT};

/// Scored selection must keep at least this many points.
const MIN_USABLE_POINTS: usize = 2;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summary_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

// ============================================================================
// Summarizer
// ============================================================================

/// Extractive key-point summarizer.
///
/// Holds only its configuration and a concept extractor bound to shared,
/// read-only linguistic resources, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    concepts: ConceptExtractor,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Summarizer with the default configuration (5 points, English).
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Summarizer with a custom configuration. `point_count` is clamped
    /// into the supported range.
    pub fn with_config(mut config: SummaryConfig) -> Self {
        config.point_count = config.point_count.clamp(MIN_POINT_COUNT, MAX_POINT_COUNT);
        let concepts = ConceptExtractor::from_config(&config);
        Self { config, concepts }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize `text` into at most `point_count` key points.
    pub fn summarize(&self, text: &str) -> SummaryOutcome {
        self.summarize_observed(text, &mut NoopObserver)
    }

    /// Summarize many texts in parallel; outcomes keep the input order.
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<SummaryOutcome>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }

    /// Summarize `text`, reporting each stage to `observer`.
    pub fn summarize_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> SummaryOutcome {
        let cfg = &self.config;
        let target = cfg.point_count;
        let selector = SentenceSelector::with_config(SelectorConfig {
            num_sentences: target,
            min_point_words: cfg.min_point_words,
        });

        // Stage 1: Normalize
        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            observer.on_stage_start(STAGE_NORMALIZE);
            let clock = StageClock::start();
            let normalized = normalize_whitespace(text);
            observer.on_stage_end(STAGE_NORMALIZE, &StageReportBuilder::new(clock.elapsed()).build());
            normalized
        };

        // Stage 2: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences =
                SentenceSegmenter::new(cfg.min_sentence_chars).segment_normalized(&normalized);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        // Stage 3: Direct path for short texts
        if sentences.len() <= target {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let points = selector.select(&sentences, &SentenceScorer::new::<&str>(&[])).points;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(points.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            return SummaryOutcome::direct(points);
        }

        // Stage 4: Concepts
        let (concepts, source) = {
            trace_stage!(STAGE_CONCEPTS);
            observer.on_stage_start(STAGE_CONCEPTS);
            let clock = StageClock::start();
            let source = self.concepts.active_source();
            let concepts = self.concepts.extract(&normalized, cfg);
            trace_event!(?source, count = concepts.len(), "concepts extracted");
            let report = StageReportBuilder::new(clock.elapsed())
                .items(concepts.len())
                .build();
            observer.on_stage_end(STAGE_CONCEPTS, &report);
            observer.on_concepts(&concepts, source);
            (concepts, source)
        };

        // Stage 5: Score and rank
        let ranked = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let ranked = selector.rank_sentences(&sentences, &SentenceScorer::new(&concepts));
            let report = StageReportBuilder::new(clock.elapsed())
                .items(ranked.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scored(&ranked);
            ranked
        };

        // Stage 6: Select
        let points = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let points = selector.take_points(&ranked);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(points.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            points
        };

        if points.len() >= MIN_USABLE_POINTS {
            return SummaryOutcome {
                points,
                path: SummaryPath::Scored,
                concepts,
                concept_source: Some(source),
            };
        }

        // Stage 7: Fallback
        trace_event!(usable = points.len(), "scored selection degenerated, using basic summary");
        observer.on_fallback(points.len());

        trace_stage!(STAGE_FALLBACK);
        observer.on_stage_start(STAGE_FALLBACK);
        let clock = StageClock::start();
        let candidates =
            SentenceSegmenter::new(cfg.fallback_min_sentence_chars).segment_normalized(&normalized);
        let points = BasicSummary::new().summarize(&candidates, target);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(points.len())
            .build();
        observer.on_stage_end(STAGE_FALLBACK, &report);

        SummaryOutcome {
            points,
            path: SummaryPath::Fallback,
            concepts,
            concept_source: Some(source),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::ConceptSourceKind;
    use crate::pipeline::observer::StageTimingObserver;
    use crate::types::{ConceptMode, ScoredSentence, Sentence};

    const PHOTOSYNTHESIS: &str = "Photosynthesis is the process plants use to turn light into food. \
        It happens inside the chloroplast of every leaf cell. \
        Chlorophyll absorbs mostly red and blue light from the sun. \
        Water is split and oxygen is released as a by-product. \
        The Calvin cycle then fixes carbon dioxide into sugar. \
        Temperature and light intensity both change the overall rate. \
        The key point is that photosynthesis stores solar energy as chemical energy.";

    #[test]
    fn test_direct_path() {
        let outcome = Summarizer::new().summarize("Cells divide quickly. Tissues grow slowly.");
        assert_eq!(outcome.path, SummaryPath::Direct);
        assert_eq!(outcome.points, vec!["Cells divide quickly", "Tissues grow slowly"]);
        assert!(outcome.concepts.is_empty());
        assert!(outcome.concept_source.is_none());
    }

    #[test]
    fn test_scored_path() {
        let summarizer = Summarizer::with_config(SummaryConfig::default().with_point_count(3));
        let outcome = summarizer.summarize(PHOTOSYNTHESIS);

        assert_eq!(outcome.path, SummaryPath::Scored);
        assert_eq!(outcome.concept_source, Some(ConceptSourceKind::Tagged));
        assert!(outcome.points.len() >= 2 && outcome.points.len() <= 3);
        assert!(outcome.concepts.len() <= 8);
        // key indicator + last position + first-sentence bonus make these top picks
        assert!(outcome
            .points
            .contains(&"The key point is that photosynthesis stores solar energy as chemical energy".to_string()));
        assert!(outcome
            .points
            .contains(&"Photosynthesis is the process plants use to turn light into food".to_string()));
    }

    #[test]
    fn test_fallback_path() {
        let text = "Mitochondria, which are tiny organelles. \
                    Ribosomes, found in every cell. \
                    Lysosomes, the cleanup crew. \
                    Vacuoles, used for storage. \
                    Nucleus, home of the genome.";
        let summarizer = Summarizer::with_config(SummaryConfig::default().with_point_count(3));
        let outcome = summarizer.summarize(text);

        assert_eq!(outcome.path, SummaryPath::Fallback);
        // first, middle, last of the 20+ character sentences
        assert_eq!(outcome.points, vec!["Mitochondria", "Lysosomes", "Nucleus"]);
    }

    #[test]
    fn test_single_surviving_point_falls_back() {
        let text = "Enzymes speed up chemical reactions in every living cell. \
                    Substrates, which bind to the active site. \
                    Inhibitors, which slow the enzyme right down. \
                    Cofactors, which help some enzymes function. \
                    Temperature, which changes how fast they work. \
                    Acidity, which can denature the protein shape.";
        let outcome = Summarizer::new().summarize(text);

        assert_eq!(outcome.path, SummaryPath::Fallback);
        assert_eq!(
            outcome.points,
            vec![
                "Enzymes speed up chemical reactions in every living cell",
                "Cofactors",
                "Acidity",
                "Substrates",
                "Inhibitors",
            ]
        );
    }

    #[test]
    fn test_two_surviving_points_are_kept() {
        let text = "Enzymes speed up chemical reactions in every living cell. \
                    Substrates, which bind to the active site. \
                    Inhibitors, which slow the enzyme right down. \
                    Cofactors, which help some enzymes function. \
                    Temperature, which changes how fast they work. \
                    Acidity can slowly denature the shape of the protein.";
        let outcome = Summarizer::new().summarize(text);

        assert_eq!(outcome.path, SummaryPath::Scored);
        assert_eq!(
            outcome.points,
            vec![
                "Enzymes speed up chemical reactions in every living cell",
                "Acidity can slowly denature the shape of the protein",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let outcome = Summarizer::new().summarize("");
        assert!(outcome.is_empty());
        assert_eq!(outcome.path, SummaryPath::Direct);
    }

    #[test]
    fn test_point_count_clamped() {
        let summarizer = Summarizer::with_config(SummaryConfig {
            point_count: 99,
            ..SummaryConfig::default()
        });
        assert_eq!(summarizer.config().point_count, 10);
    }

    #[test]
    fn test_pattern_mode_reports_source() {
        let cfg = SummaryConfig::default()
            .with_point_count(3)
            .with_concept_mode(ConceptMode::Pattern);
        let outcome = Summarizer::with_config(cfg).summarize(PHOTOSYNTHESIS);
        assert_eq!(outcome.concept_source, Some(ConceptSourceKind::Pattern));
        assert!(outcome.concepts.contains(&"Photosynthesis".to_string()));
    }

    #[test]
    fn test_observer_stages_scored() {
        let summarizer = Summarizer::with_config(SummaryConfig::default().with_point_count(3));
        let mut obs = StageTimingObserver::new();
        summarizer.summarize_observed(PHOTOSYNTHESIS, &mut obs);

        assert_eq!(
            obs.stages(),
            vec![STAGE_NORMALIZE, STAGE_SEGMENT, STAGE_CONCEPTS, STAGE_SCORE, STAGE_SELECT]
        );
        let (_, segment) = &obs.reports()[1];
        assert_eq!(segment.items(), Some(7));
    }

    #[test]
    fn test_observer_stages_direct() {
        let mut obs = StageTimingObserver::new();
        Summarizer::new().summarize_observed("One short sentence here.", &mut obs);
        assert_eq!(obs.stages(), vec![STAGE_NORMALIZE, STAGE_SEGMENT, STAGE_SELECT]);
    }

    /// Observer that records artifact callbacks.
    #[derive(Default)]
    struct ArtifactObserver {
        sentences: usize,
        concepts: Option<ConceptSourceKind>,
        ranked: usize,
        fallback: Option<usize>,
    }

    impl PipelineObserver for ArtifactObserver {
        fn on_sentences(&mut self, sentences: &[Sentence]) {
            self.sentences = sentences.len();
        }
        fn on_concepts(&mut self, _concepts: &[String], source: ConceptSourceKind) {
            self.concepts = Some(source);
        }
        fn on_scored(&mut self, ranked: &[ScoredSentence]) {
            self.ranked = ranked.len();
        }
        fn on_fallback(&mut self, usable_points: usize) {
            self.fallback = Some(usable_points);
        }
    }

    #[test]
    fn test_observer_sees_fallback() {
        let text = "Mitochondria, which are tiny organelles. \
                    Ribosomes, found in every cell. \
                    Lysosomes, the cleanup crew. \
                    Vacuoles, used for storage. \
                    Nucleus, home of the genome.";
        let summarizer = Summarizer::with_config(SummaryConfig::default().with_point_count(3));
        let mut obs = ArtifactObserver::default();
        summarizer.summarize_observed(text, &mut obs);

        assert_eq!(obs.sentences, 5);
        assert_eq!(obs.concepts, Some(ConceptSourceKind::Tagged));
        assert_eq!(obs.ranked, 5);
        assert_eq!(obs.fallback, Some(0));
    }

    #[test]
    fn test_batch_preserves_order() {
        let texts = vec![PHOTOSYNTHESIS.to_string(), String::new(), "Cells divide quickly.".to_string()];
        let summarizer = Summarizer::new();
        let outcomes = summarizer.summarize_batch(&texts);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], summarizer.summarize(PHOTOSYNTHESIS));
        assert!(outcomes[1].is_empty());
        assert_eq!(outcomes[2].points, vec!["Cells divide quickly"]);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_runs_under_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let outcome = Summarizer::new().summarize(PHOTOSYNTHESIS);
        assert_eq!(outcome.path, SummaryPath::Scored);
    }
}
