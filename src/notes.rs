//! Study-note rendering
//!
//! Turns a list of key points into the note the study application saves,
//! and provides the fixed list of study tips shown alongside summaries.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

/// Heading that opens every summary note.
pub const KEY_POINTS_HEADING: &str = "**Key Points:**";

const STUDY_TIPS: [&str; 10] = [
    "Break complex topics into smaller, manageable chunks for better understanding.",
    "Use spaced repetition to reinforce learning over time.",
    "Create mind maps to visualize connections between concepts.",
    "Teach what you've learned to someone else to solidify your understanding.",
    "Practice active recall by testing yourself without looking at notes.",
    "Connect new information to what you already know for better retention.",
    "Take regular breaks to maintain focus and prevent burnout.",
    "Use multiple senses (read, write, speak) to engage different learning pathways.",
    "Set specific, measurable goals for each study session.",
    "Review material within 24 hours to move it from short-term to long-term memory.",
];

/// A personal note built from summary points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryNote {
    pub topic: String,
    pub content: String,
}

impl SummaryNote {
    /// Render `points` as a bulleted note titled with the time `at`.
    pub fn from_points<S, Tz>(points: &[S], at: &DateTime<Tz>) -> Self
    where
        S: AsRef<str>,
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let bullets: Vec<String> = points
            .iter()
            .map(|p| format!("• {}", p.as_ref()))
            .collect();

        Self {
            topic: format!("Summary - {}", at.format("%Y-%m-%d %H:%M")),
            content: format!("{KEY_POINTS_HEADING}\n\n{}", bullets.join("\n")),
        }
    }

    /// Render `points` titled with the current local time.
    pub fn now<S: AsRef<str>>(points: &[S]) -> Self {
        Self::from_points(points, &Local::now())
    }
}

/// General study advice, in display order.
pub fn study_tips() -> &'static [&'static str] {
    &STUDY_TIPS
}
