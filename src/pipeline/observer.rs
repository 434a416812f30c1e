//! Summary observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and emitting structured
//! telemetry. [`NoopObserver`] is the default and compiles away entirely.

use std::time::{Duration, Instant};

use serde::Serialize;

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SPLIT: &str = "split";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_JOIN: &str = "join";

/// All stages in execution order.
pub const STAGES: [&str; 6] = [
    STAGE_NORMALIZE,
    STAGE_SPLIT,
    STAGE_FREQUENCY,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_JOIN,
];

/// Measurements for one finished stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageReport {
    /// Wall-clock time spent in the stage
    pub elapsed: Duration,
    /// Stage-specific size of the output (chars, pieces, tokens, sentences)
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Callbacks invoked by [`SummaryEngine::run`](crate::summarizer::engine::SummaryEngine::run).
///
/// Both methods default to no-ops, so implementors override only what they
/// need. Stages skipped by an early return (blank input, short documents)
/// produce no callbacks.
pub trait SummaryObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Observer that keeps every stage report, in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StageTimings {
    pub stages: Vec<(&'static str, StageReport)>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all recorded stage durations
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, r)| r.elapsed).sum()
    }

    pub fn get(&self, stage: &str) -> Option<&StageReport> {
        self.stages
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }
}

impl SummaryObserver for StageTimings {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, *report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_timings_records_in_order() {
        let mut timings = StageTimings::new();
        timings.on_stage_start(STAGE_SPLIT);
        let split = StageReport::new(Duration::from_millis(2)).with_items(4);
        timings.on_stage_end(STAGE_SPLIT, &split);
        timings.on_stage_end(STAGE_JOIN, &StageReport::new(Duration::from_millis(3)));

        let names: Vec<_> = timings.stages.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SPLIT, STAGE_JOIN]);
        assert_eq!(timings.total(), Duration::from_millis(5));
        assert_eq!(timings.get(STAGE_SPLIT).and_then(|r| r.items), Some(4));
        assert!(timings.get(STAGE_SCORE).is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
