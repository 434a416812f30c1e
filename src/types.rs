//! Core types shared across the crate

use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;

/// Summary returned for empty or whitespace-only input.
pub const NO_CONTENT_SUMMARY: &str = "No content to summarize.";

/// Tokens must be longer than this many characters to carry weight.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Sentences must be longer than this many characters (after trimming) to be
/// scored or selected.
pub const DEFAULT_MIN_SENTENCE_LENGTH: usize = 10;

/// Documents splitting into at most this many pieces are returned whole.
pub const DEFAULT_SHORT_DOCUMENT_PIECES: usize = 3;

/// The quota is the basis count divided by this (integer division).
pub const DEFAULT_QUOTA_DIVISOR: usize = 4;

/// Lower bound on the quota.
pub const DEFAULT_MIN_QUOTA: usize = 2;

/// Which sentence count the summary quota is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaBasis {
    /// Every split piece, including pieces too short to be candidates.
    #[default]
    SplitPieces,
    /// Only the scored candidate pool.
    Candidates,
}

impl QuotaBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SplitPieces => "split_pieces",
            Self::Candidates => "candidates",
        }
    }
}

impl std::str::FromStr for QuotaBasis {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "split_pieces" | "pieces" => Ok(Self::SplitPieces),
            "candidates" => Ok(Self::Candidates),
            other => Err(format!("unknown quota basis \"{other}\"")),
        }
    }
}

/// A sentence piece with its position in the document and its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text, without its terminator
    pub text: String,
    /// Index among all split pieces (0-based, assigned before filtering)
    pub index: usize,
    /// Average frequency of the sentence's significant words
    pub score: f64,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, score: f64) -> Self {
        Self {
            text: text.into(),
            index,
            score,
        }
    }
}

/// Tunable parameters of the summarizer.
///
/// The defaults reproduce the reference behavior exactly; change them only
/// when output compatibility with earlier summaries does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Tokens of this length or shorter are ignored
    pub min_word_length: usize,
    /// Trimmed sentences of this length or shorter are dropped
    pub min_sentence_length: usize,
    /// Documents with at most this many pieces are returned whole
    pub short_document_pieces: usize,
    /// Quota divisor (must be non-zero)
    pub quota_divisor: usize,
    /// Quota floor
    pub min_quota: usize,
    /// Count the quota is derived from
    pub quota_basis: QuotaBasis,
    /// Words excluded from the frequency table
    pub stopwords: StopwordFilter,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            min_sentence_length: DEFAULT_MIN_SENTENCE_LENGTH,
            short_document_pieces: DEFAULT_SHORT_DOCUMENT_PIECES,
            quota_divisor: DEFAULT_QUOTA_DIVISOR,
            min_quota: DEFAULT_MIN_QUOTA,
            quota_basis: QuotaBasis::default(),
            stopwords: StopwordFilter::default(),
        }
    }
}

impl SummaryConfig {
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    pub fn with_min_sentence_length(mut self, len: usize) -> Self {
        self.min_sentence_length = len;
        self
    }

    pub fn with_short_document_pieces(mut self, pieces: usize) -> Self {
        self.short_document_pieces = pieces;
        self
    }

    /// Set the quota divisor. Zero is clamped to one.
    pub fn with_quota_divisor(mut self, divisor: usize) -> Self {
        self.quota_divisor = divisor.max(1);
        self
    }

    pub fn with_min_quota(mut self, min_quota: usize) -> Self {
        self.min_quota = min_quota;
        self
    }

    pub fn with_quota_basis(mut self, basis: QuotaBasis) -> Self {
        self.quota_basis = basis;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }
}
