//! Configuration errors.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// A problem found in a [`SummarySpec`](super::spec::SummarySpec).
///
/// `path` is a JSON-pointer-like location (`/thresholds/max_concepts`);
/// `hint` suggests a fix when one is obvious.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{code}] {path}: {message}")]
pub struct SummarySpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SummarySpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<serde_json::Error> for SummarySpecError {
    fn from(error: serde_json::Error) -> Self {
        SummarySpecError::new(ErrorCode::InvalidJson, "", error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SummarySpecError::new(ErrorCode::OutOfRange, "/point_count", "must be 3..=10");
        assert_eq!(err.to_string(), "[out_of_range] /point_count: must be 3..=10");
    }

    #[test]
    fn test_hint_serialization() {
        let err = SummarySpecError::new(ErrorCode::UnknownField, "/bogus", "unknown field");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("hint").is_none());

        let json = serde_json::to_value(err.with_hint("remove it")).unwrap();
        assert_eq!(json["hint"], "remove it");
        assert_eq!(json["code"], "unknown_field");
    }

    #[test]
    fn test_from_serde_error() {
        let err: SummarySpecError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidJson);
    }
}
