//! Stable error codes for spec diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable category of a [`SpecError`](super::errors::SpecError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `v` is not a supported spec version
    UnsupportedVersion,
    /// A value is outside its allowed range
    InvalidValue,
    /// A setting would produce empty or near-empty summaries
    DegenerateQuota,
    /// A stopword can never match a token
    IneffectiveStopword,
    /// A field is not part of the schema
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::DegenerateQuota => "degenerate_quota",
            Self::IneffectiveStopword => "ineffective_stopword",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
