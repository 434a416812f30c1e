//! # rapid-digest
//!
//! Deterministic extractive summarization. A summary is always a subsequence
//! of the document's own sentences, kept in their original order, picked by
//! how often their significant words occur across the whole document.
//!
//! ```
//! use rapid_digest::summarize;
//!
//! let text = "Rust is a systems language. Rust programs are fast and safe. \
//!             The weather is nice today. Many teams adopt Rust for safe systems. \
//!             Lunch was good.";
//! let summary = summarize(text);
//! assert_eq!(
//!     summary,
//!     "Rust is a systems language. Rust programs are fast and safe."
//! );
//! ```
//!
//! The free function uses the default [`SummaryConfig`]. Use
//! [`SummaryEngine::with_config`] or a JSON [`SummarySpec`] to change the
//! thresholds, quota or stopwords.
//!
//! ## Features
//!
//! - `tracing`: emit a span per stage and debug events via `tracing`
//! - `cli`: build the `rapid-digest` binary

pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use nlp::stopwords::StopwordFilter;
pub use pipeline::errors::{DigestError, SpecError};
pub use pipeline::observer::{NoopObserver, StageReport, StageTimings, SummaryObserver};
pub use pipeline::spec::SummarySpec;
pub use pipeline::validation::{ValidationEngine, ValidationReport};
pub use summarizer::engine::{summarize, SummaryEngine, SummaryOutcome, SummaryResult};
pub use types::{QuotaBasis, Sentence, SummaryConfig, NO_CONTENT_SUMMARY};
