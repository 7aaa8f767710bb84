//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::concepts::ConceptSourceKind;
use crate::types::{ScoredSentence, Sentence};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_CONCEPTS: &str = "concepts";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_FALLBACK: &str = "fallback";

/// Measures the wall-clock duration of one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage produced (sentences, concepts, points).
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Fluent construction of a [`StageReport`] with optional metrics.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, n: usize) -> Self {
        self.report.items = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Receives callbacks while a summary is produced. Every method has an
/// empty default, so implementors override only what they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_concepts(&mut self, _concepts: &[String], _source: ConceptSourceKind) {}

    fn on_scored(&mut self, _ranked: &[ScoredSentence]) {}

    /// Called when scored selection kept fewer than two points.
    fn on_fallback(&mut self, _usable_points: usize) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects a [`StageReport`] for every finished stage, in order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Sum of all stage durations.
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }

    /// Names of the stages that ran, in order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
