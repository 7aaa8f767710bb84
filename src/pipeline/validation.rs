//! Checks a [`SummarySpec`](super::spec::SummarySpec) before it becomes a
//! [`SummaryConfig`](crate::types::SummaryConfig).
//!
//! Every rule runs, so one pass reports all problems. Errors block
//! conversion; warnings (unknown fields outside strict mode, a language
//! without a tagger model) only inform.

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SummarySpecError;
use super::spec::SummarySpec;
use crate::nlp::tagger::TaggerModel;
use crate::types::{ConceptMode, MAX_POINT_COUNT, MIN_POINT_COUNT};

/// The only spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Error diagnostics block conversion, warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding: a [`SummarySpecError`] and how serious it is.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SummarySpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SummarySpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SummarySpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

/// Findings of every rule, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &SummarySpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    /// Blocking findings.
    pub fn errors(&self) -> impl Iterator<Item = &SummarySpecError> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SummarySpecError> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No blocking findings; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A check over a whole [`SummarySpec`].
pub trait ValidationRule: Send + Sync {
    /// Stable rule name, e.g. `"point_count"`.
    fn name(&self) -> &str;

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic>;
}

/// Ordered set of [`ValidationRule`]s.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Version, point count, thresholds, language and unknown-field rules.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(PointCountRule));
        engine.add_rule(Box::new(ThresholdsRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SummarySpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

struct PointCountRule;

impl ValidationRule for PointCountRule {
    fn name(&self) -> &str {
        "point_count"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.point_count {
            Some(n) if !(MIN_POINT_COUNT..=MAX_POINT_COUNT).contains(&n) => {
                vec![ValidationDiagnostic::error(
                    SummarySpecError::new(
                        ErrorCode::OutOfRange,
                        "/point_count",
                        format!(
                            "point_count must be between {MIN_POINT_COUNT} and {MAX_POINT_COUNT}, got {n}"
                        ),
                    )
                    .with_hint("Remove point_count to use the default of 5"),
                )]
            }
            _ => vec![],
        }
    }
}

struct ThresholdsRule;

impl ValidationRule for ThresholdsRule {
    fn name(&self) -> &str {
        "thresholds"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let t = &spec.thresholds;
        let mut out = Vec::new();

        let checks: &[(&str, Option<usize>)] = &[
            ("min_point_words", t.min_point_words),
            ("max_concepts", t.max_concepts),
        ];

        for &(field, value) in checks {
            if value == Some(0) {
                out.push(ValidationDiagnostic::error(
                    SummarySpecError::new(
                        ErrorCode::OutOfRange,
                        format!("/thresholds/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!("Remove {field} to use the default, or set it to a positive value")),
                ));
            }
        }

        if let (Some(primary), Some(fallback)) =
            (t.min_sentence_chars, t.fallback_min_sentence_chars)
        {
            if fallback < primary {
                out.push(ValidationDiagnostic::error(
                    SummarySpecError::new(
                        ErrorCode::InvalidCombo,
                        "/thresholds/fallback_min_sentence_chars",
                        format!(
                            "fallback_min_sentence_chars ({fallback}) is below min_sentence_chars ({primary})"
                        ),
                    )
                    .with_hint("The basic summary should be at least as strict as scoring"),
                ));
            }
        }

        out
    }
}

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let Some(language) = spec.language.as_deref() else {
            return vec![];
        };
        if TaggerModel::for_language(language).is_some() {
            return vec![];
        }

        match spec.concepts {
            ConceptMode::Pattern => vec![],
            ConceptMode::Auto => vec![ValidationDiagnostic::warning(
                SummarySpecError::new(
                    ErrorCode::UnsupportedLanguage,
                    "/language",
                    format!("no tagger model for \"{language}\"; capitalized words will be used as concepts"),
                )
                .with_hint("Set concepts to \"pattern\" to silence this warning"),
            )],
            ConceptMode::Tagged => vec![ValidationDiagnostic::error(
                SummarySpecError::new(
                    ErrorCode::UnsupportedLanguage,
                    "/concepts",
                    format!("concepts \"tagged\" requires a tagger model, none for \"{language}\""),
                )
                .with_hint("Use concepts \"auto\" or \"pattern\""),
            )],
        }
    }
}

/// Fields captured by `#[serde(flatten)]`; errors in strict mode.
struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let diag_fn = if strict {
            ValidationDiagnostic::error
        } else {
            ValidationDiagnostic::warning
        };

        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                diag_fn(
                    SummarySpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/thresholds",
            &spec.thresholds.unknown_fields,
            spec.strict,
        ));
        out
    }
}
