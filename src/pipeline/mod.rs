//! Summary pipeline
//!
//! The [`runner::Summarizer`] orchestrates segmentation, concept extraction,
//! scoring, selection and the basic-summary fallback. [`spec::SummarySpec`]
//! and [`validation::ValidationEngine`] cover JSON configuration;
//! [`observer`] exposes stage hooks for timing and debugging.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;
