//! Summary engine: runs the extractive summarization stages in order.
//!
//! Stages:
//! 1. Normalize (strip to ASCII letters, digits, spaces and `. , ! ?`)
//! 2. Split into sentence pieces
//! 3. Build the word-frequency table
//! 4. Score candidate sentences
//! 5. Select the top sentences, back in document order
//! 6. Join with `". "` and ensure a trailing period
//!
//! Blank input and documents of at most a few pieces return before stage 3.
//! The engine holds only immutable configuration and is safe to share across
//! threads.

use serde::Serialize;

use crate::nlp::frequency::WordFrequencyTable;
use crate::nlp::tokenizer;
use crate::pipeline::observer::{
    NoopObserver, StageClock, StageReport, SummaryObserver, STAGE_FREQUENCY, STAGE_JOIN,
    STAGE_NORMALIZE, STAGE_SCORE, STAGE_SELECT, STAGE_SPLIT,
};
use crate::summarizer::scorer::SentenceScorer;
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::types::{Sentence, SummaryConfig, NO_CONTENT_SUMMARY};

/// Enter a tracing span for a summary stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summary_stage", stage = $name).entered();
    };
}

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Input was empty or whitespace; the summary is [`NO_CONTENT_SUMMARY`]
    Blank,
    /// Too few pieces to shorten; the summary is the whole cleaned text
    ShortDocument,
    /// Sentences were scored and selected
    Extracted,
}

/// A summary plus the bookkeeping behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub summary: String,
    pub outcome: SummaryOutcome,
    /// Selected sentences in document order (empty unless `Extracted`)
    pub sentences: Vec<Sentence>,
    /// Pieces produced by sentence splitting
    pub total_pieces: usize,
    /// Pieces long enough to be scored
    pub candidates: usize,
    /// Number of sentences asked for
    pub quota: usize,
    /// Input length in UTF-16 code units
    pub input_length: usize,
    /// Summary length in UTF-16 code units
    pub summary_length: usize,
}

impl SummaryResult {
    fn passthrough(
        summary: String,
        outcome: SummaryOutcome,
        total_pieces: usize,
        input_length: usize,
    ) -> Self {
        let summary_length = utf16_len(&summary);
        Self {
            summary,
            outcome,
            sentences: Vec::new(),
            total_pieces,
            candidates: 0,
            quota: 0,
            input_length,
            summary_length,
        }
    }
}

/// Extractive summarizer driven by word frequency
#[derive(Debug, Clone, Default)]
pub struct SummaryEngine {
    config: SummaryConfig,
}

impl SummaryEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize `text`. Never fails.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).summary
    }

    /// Summarize `text` and report how the summary was built.
    pub fn summarize_detailed(&self, text: &str) -> SummaryResult {
        self.run(text, &mut NoopObserver)
    }

    /// Summarize `text`, notifying `observer` at each stage boundary.
    pub fn run(&self, text: &str, observer: &mut impl SummaryObserver) -> SummaryResult {
        let cfg = &self.config;
        let input_length = utf16_len(text);

        if tokenizer::is_blank(text) {
            #[cfg(feature = "tracing")]
            tracing::debug!(input_length, "blank input");
            return SummaryResult::passthrough(
                NO_CONTENT_SUMMARY.to_string(),
                SummaryOutcome::Blank,
                0,
                input_length,
            );
        }

        let clean = run_stage(
            observer,
            STAGE_NORMALIZE,
            || tokenizer::clean_text(text),
            String::len,
        );
        let pieces = run_stage(
            observer,
            STAGE_SPLIT,
            || tokenizer::split_sentences(&clean),
            Vec::len,
        );
        let total_pieces = pieces.len();

        if total_pieces <= cfg.short_document_pieces {
            #[cfg(feature = "tracing")]
            tracing::debug!(total_pieces, "short document, returning cleaned text");
            return SummaryResult::passthrough(
                clean.clone(),
                SummaryOutcome::ShortDocument,
                total_pieces,
                input_length,
            );
        }

        let table = run_stage(
            observer,
            STAGE_FREQUENCY,
            || WordFrequencyTable::build(&clean, cfg.min_word_length, &cfg.stopwords),
            WordFrequencyTable::len,
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(top_terms = ?table.top_n(5), "frequency table built");

        let scorer = SentenceScorer::new(&table, cfg);
        let scored = run_stage(
            observer,
            STAGE_SCORE,
            || scorer.score_candidates(&pieces),
            Vec::len,
        );
        let candidates = scored.len();

        let selector = SentenceSelector::with_config(SelectorConfig::from(cfg));
        let quota = selector.quota(total_pieces, candidates);
        let sentences = run_stage(
            observer,
            STAGE_SELECT,
            || selector.select(scored, quota),
            Vec::len,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total_pieces,
            candidates,
            quota,
            selected = sentences.len(),
            "selected sentences"
        );

        let summary = run_stage(
            observer,
            STAGE_JOIN,
            || join_sentences(&sentences),
            String::len,
        );
        let summary_length = utf16_len(&summary);

        SummaryResult {
            summary,
            outcome: SummaryOutcome::Extracted,
            sentences,
            total_pieces,
            candidates,
            quota,
            input_length,
            summary_length,
        }
    }
}

/// Summarize `text` with the default configuration.
///
/// ```
/// let summary = rapid_digest::summarize("   ");
/// assert_eq!(summary, "No content to summarize.");
/// ```
pub fn summarize(text: &str) -> String {
    SummaryEngine::new().summarize(text)
}

fn run_stage<O, T>(
    observer: &mut O,
    stage: &'static str,
    f: impl FnOnce() -> T,
    items: impl FnOnce(&T) -> usize,
) -> T
where
    O: SummaryObserver + ?Sized,
{
    trace_stage!(stage);
    observer.on_stage_start(stage);
    let clock = StageClock::start();
    let out = f();
    let report = StageReport::new(clock.elapsed()).with_items(items(&out));
    observer.on_stage_end(stage, &report);
    out
}

/// Length as reported in [`SummaryResult`], which counts UTF-16 code units
/// so non-BMP characters such as emoji count twice.
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Join sentences with `". "`, ending the whole summary with a period.
fn join_sentences(sentences: &[Sentence]) -> String {
    let mut summary = sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}
