//! Validation engine for summary specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`](super::spec::SummarySpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_digest::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;
use crate::types::DEFAULT_MIN_WORD_LENGTH;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarySpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so a long-lived engine can be
/// shared across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"quota_divisor"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarySpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(QuotaDivisorRule));
        engine.add_rule(Box::new(MinimumQuotaRule));
        engine.add_rule(Box::new(StopwordShapeRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
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

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported version ───────────────────────────────────────────────────

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
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("spec version {} is not supported", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Quota divisor must be positive ──────────────────────────────────────

struct QuotaDivisorRule;

impl ValidationRule for QuotaDivisorRule {
    fn name(&self) -> &str {
        "quota_divisor"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.quota.divisor != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::InvalidValue,
                "/quota/divisor",
                "divisor must be greater than 0",
            )
            .with_hint("Remove divisor to keep one sentence in four, or set a positive value"),
        )]
    }
}

// ─── 3. A zero minimum can produce an empty summary ─────────────────────────

struct MinimumQuotaRule;

impl ValidationRule for MinimumQuotaRule {
    fn name(&self) -> &str {
        "minimum_quota"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.quota.minimum != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::warning(
            SpecError::new(
                ErrorCode::DegenerateQuota,
                "/quota/minimum",
                "a minimum of 0 lets small documents summarize to \".\"",
            )
            .with_hint("Set minimum to at least 1"),
        )]
    }
}

// ─── 4. Stopwords that can never match a token ──────────────────────────────

struct StopwordShapeRule;

impl StopwordShapeRule {
    fn check_list(
        path: &str,
        words: &[String],
        min_word_length: usize,
    ) -> Vec<ValidationDiagnostic> {
        words
            .iter()
            .enumerate()
            .filter_map(|(i, word)| {
                let reason = if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                    "contains characters other than ASCII letters"
                } else if word.len() <= min_word_length {
                    "is too short to ever be counted"
                } else {
                    return None;
                };
                Some(ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::IneffectiveStopword,
                        format!("{path}/{i}"),
                        format!("stopword \"{word}\" {reason}"),
                    )
                    .with_hint("Tokens are lowercase ASCII letters longer than min_word_length"),
                ))
            })
            .collect()
    }
}

impl ValidationRule for StopwordShapeRule {
    fn name(&self) -> &str {
        "stopword_shape"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let min_word_length = spec
            .thresholds
            .min_word_length
            .unwrap_or(DEFAULT_MIN_WORD_LENGTH);

        let mut out = Vec::new();
        if let Some(replace) = &spec.stopwords.replace {
            out.extend(Self::check_list("/stopwords/replace", replace, min_word_length));
        }
        out.extend(Self::check_list(
            "/stopwords/extra",
            &spec.stopwords.extra,
            min_word_length,
        ));
        out
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
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
        out.extend(Self::check_unknowns(
            "/quota",
            &spec.quota.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/stopwords",
            &spec.stopwords.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a SummarySpec from JSON.
    fn spec(json: &str) -> SummarySpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_clean() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_spec_is_clean() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "thresholds": { "min_word_length": 2, "min_sentence_length": 10 },
                "quota": { "divisor": 4, "minimum": 2, "basis": "split_pieces" },
                "stopwords": { "extra": ["figure"], "remove": ["may"] },
                "strict": true
            }"#,
        ));
        assert!(report.is_empty(), "{report:?}");
    }

    #[test]
    fn test_default_rule_names() {
        assert_eq!(
            engine().rule_names(),
            vec!["version", "quota_divisor", "minimum_quota", "stopword_shape", "unknown_fields"]
        );
    }

    // ─── Individual rules ───────────────────────────────────────────────

    #[test]
    fn test_unsupported_version() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errors[0].path, "/v");
    }

    #[test]
    fn test_zero_divisor_is_error() {
        let report = engine().validate(&spec(r#"{ "v": 1, "quota": { "divisor": 0 } }"#));
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidValue);
        assert_eq!(errors[0].path, "/quota/divisor");
        assert!(errors[0].hint.is_some());
    }

    #[test]
    fn test_zero_minimum_is_warning() {
        let report = engine().validate(&spec(r#"{ "v": 1, "quota": { "minimum": 0 } }"#));
        assert!(report.is_valid());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::DegenerateQuota);
    }

    #[test]
    fn test_ineffective_stopwords_are_warnings() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "stopwords": { "extra": ["ok", "e-mail", "widget", "x1"] } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<_> = report.warnings().map(|w| &*w.path).collect();
        assert_eq!(
            paths,
            vec!["/stopwords/extra/0", "/stopwords/extra/1", "/stopwords/extra/3"]
        );
    }

    #[test]
    fn test_stopword_length_uses_configured_threshold() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "thresholds": { "min_word_length": 4 }, "stopwords": { "replace": ["cats", "horses"] } }"#,
        ));
        let paths: Vec<_> = report.warnings().map(|w| &*w.path).collect();
        assert_eq!(paths, vec!["/stopwords/replace/0"]);
    }

    #[test]
    fn test_unknown_fields_warn_when_lenient() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "bogus": 1, "quota": { "extra_knob": true } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<_> = report.warnings().map(|w| &*w.path).collect();
        assert_eq!(paths, vec!["/bogus", "/quota/extra_knob"]);
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "thresholds": { "min_words": 3 } }"#,
        ));
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::UnknownField);
        assert_eq!(errors[0].path, "/thresholds/min_words");
    }

    // ─── Engine behavior ────────────────────────────────────────────────

    #[test]
    fn test_collects_all_diagnostics() {
        let report = engine().validate(&spec(
            r#"{
                "v": 3,
                "strict": true,
                "quota": { "divisor": 0, "minimum": 0 },
                "stopwords": { "extra": ["a"] },
                "mystery": null
            }"#,
        ));
        assert_eq!(report.errors().count(), 3);
        assert_eq!(report.warnings().count(), 2);
        assert_eq!(report.len(), 5);
    }

    #[test]
    fn test_custom_rule() {
        struct NoCandidatesBasis;

        impl ValidationRule for NoCandidatesBasis {
            fn name(&self) -> &str {
                "no_candidates_basis"
            }

            fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
                if spec.quota.basis == Some(crate::types::QuotaBasis::Candidates) {
                    vec![ValidationDiagnostic::error(SpecError::new(
                        ErrorCode::InvalidValue,
                        "/quota/basis",
                        "candidates basis is disabled here",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(NoCandidatesBasis));
        let report = engine.validate(&spec(r#"{ "v": 1, "quota": { "basis": "candidates" } }"#));
        assert!(report.has_errors());
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&spec(r#"{ "v": 1, "quota": { "divisor": 0 } }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "invalid_value");
        assert_eq!(diag["path"], "/quota/divisor");
    }
}
