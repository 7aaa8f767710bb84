//! Stable error codes for configuration diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable category of a [`SummarySpecError`](super::errors::SummarySpecError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The document is not valid JSON or does not match the schema
    InvalidJson,
    /// The `v` field names a version this crate does not understand
    UnsupportedVersion,
    /// A numeric setting is outside its allowed range
    OutOfRange,
    /// Two settings contradict each other
    InvalidCombo,
    /// No tagger model is bundled for the requested language
    UnsupportedLanguage,
    /// A field is not part of the schema
    UnknownField,
    /// Catch-all for custom rules
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::UnsupportedVersion => "unsupported_version",
            Self::OutOfRange => "out_of_range",
            Self::InvalidCombo => "invalid_combo",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
