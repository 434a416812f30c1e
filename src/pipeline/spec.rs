//! Summary specification types.
//!
//! A [`SummarySpec`] is the JSON form of a [`SummaryConfig`]. Every section is
//! optional; omitted values fall back to the defaults, which reproduce the
//! reference summaries exactly. Specs are checked by the
//! [`ValidationEngine`] before they are turned into a config.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "thresholds": { "min_word_length": 2, "min_sentence_length": 10, "short_document_pieces": 3 },
//!   "quota": { "divisor": 4, "minimum": 2, "basis": "split_pieces" },
//!   "stopwords": { "extra": ["figure", "table"], "remove": [] },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::DigestError;
use super::validation::{ValidationEngine, ValidationReport};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{QuotaBasis, SummaryConfig};

/// The only spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summary specification (v1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Word and sentence length thresholds.
    #[serde(default)]
    pub thresholds: ThresholdSpec,

    /// How many sentences to keep.
    #[serde(default)]
    pub quota: QuotaSpec,

    /// Stopword list adjustments.
    #[serde(default)]
    pub stopwords: StopwordSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSpec {
    #[serde(default)]
    pub min_word_length: Option<usize>,

    #[serde(default)]
    pub min_sentence_length: Option<usize>,

    #[serde(default)]
    pub short_document_pieces: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaSpec {
    #[serde(default)]
    pub divisor: Option<usize>,

    #[serde(default)]
    pub minimum: Option<usize>,

    #[serde(default)]
    pub basis: Option<QuotaBasis>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Stopword adjustments, applied as replace, then extra, then remove.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopwordSpec {
    /// Replaces the built-in list entirely when set.
    #[serde(default)]
    pub replace: Option<Vec<String>>,

    #[serde(default)]
    pub extra: Vec<String>,

    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarySpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            thresholds: ThresholdSpec::default(),
            quota: QuotaSpec::default(),
            stopwords: StopwordSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarySpec {
    /// Parse a spec from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, DigestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Validate the spec and build the config it describes.
    ///
    /// Warnings are ignored; any error yields [`DigestError::InvalidSpec`].
    pub fn resolve(&self) -> Result<SummaryConfig, DigestError> {
        let report = self.validate();
        if report.has_errors() {
            return Err(DigestError::InvalidSpec(report));
        }
        Ok(self.to_config())
    }

    /// Build the config without validation. A zero divisor is clamped to one.
    pub fn to_config(&self) -> SummaryConfig {
        let mut cfg = SummaryConfig::default();

        if let Some(n) = self.thresholds.min_word_length {
            cfg = cfg.with_min_word_length(n);
        }
        if let Some(n) = self.thresholds.min_sentence_length {
            cfg = cfg.with_min_sentence_length(n);
        }
        if let Some(n) = self.thresholds.short_document_pieces {
            cfg = cfg.with_short_document_pieces(n);
        }
        if let Some(n) = self.quota.divisor {
            cfg = cfg.with_quota_divisor(n);
        }
        if let Some(n) = self.quota.minimum {
            cfg = cfg.with_min_quota(n);
        }
        if let Some(basis) = self.quota.basis {
            cfg = cfg.with_quota_basis(basis);
        }

        let mut stopwords = match &self.stopwords.replace {
            Some(list) => StopwordFilter::from_list(list.as_slice()),
            None => StopwordFilter::default(),
        };
        stopwords.add_stopwords(self.stopwords.extra.as_slice());
        stopwords.remove_stopwords(self.stopwords.remove.as_slice());

        cfg.with_stopwords(stopwords)
    }
}
