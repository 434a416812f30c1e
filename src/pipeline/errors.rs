//! Error types for summary specs.

use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;
use super::validation::ValidationReport;

/// A single problem found in a [`SummarySpec`](super::spec::SummarySpec).
///
/// `path` is a JSON pointer into the spec document (e.g. `/quota/divisor`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code} at {path}: {message}")]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: Cow<'static, str>,
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<Cow<'static, str>>,
}

impl SpecError {
    pub fn new(
        code: ErrorCode,
        path: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Errors from loading a summary configuration.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("failed to parse summary spec: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid summary spec: {}", describe(.0))]
    InvalidSpec(ValidationReport),
}

fn describe(report: &ValidationReport) -> String {
    let count = report.errors().count();
    match report.errors().next() {
        Some(first) if count > 1 => format!("{first} (and {} more)", count - 1),
        Some(first) => first.to_string(),
        None => "no errors".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SpecError::new(
            ErrorCode::InvalidValue,
            "/quota/divisor",
            "divisor must be greater than 0",
        )
        .with_hint("Use 4 for the default quota");
        assert_eq!(
            err.to_string(),
            "invalid_value at /quota/divisor: divisor must be greater than 0"
        );
    }

    #[test]
    fn test_invalid_spec_names_first_error() {
        let spec = crate::pipeline::spec::SummarySpec::from_json(
            r#"{ "v": 2, "quota": { "divisor": 0 } }"#,
        )
        .unwrap();
        let err = spec.resolve().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid summary spec: unsupported_version at /v: \
             spec version 2 is not supported (and 1 more)"
        );
    }

    #[test]
    fn test_serialize_skips_missing_hint() {
        let err = SpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field \"bogus\"");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert_eq!(json["path"], "/bogus");
        assert!(json.get("hint").is_none());
    }
}
