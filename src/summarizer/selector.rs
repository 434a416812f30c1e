//! Top-K sentence selection for summarization
//!
//! Picks the highest-scoring candidates up to a quota, then restores document
//! order so the summary reads in the same sequence as the source.

use crate::types::{QuotaBasis, Sentence, SummaryConfig};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Quota divisor (the basis count is divided by this)
    pub quota_divisor: usize,
    /// Quota floor
    pub min_quota: usize,
    /// Which count the quota is derived from
    pub basis: QuotaBasis,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::from(&SummaryConfig::default())
    }
}

impl From<&SummaryConfig> for SelectorConfig {
    fn from(cfg: &SummaryConfig) -> Self {
        Self {
            quota_divisor: cfg.quota_divisor,
            min_quota: cfg.min_quota,
            basis: cfg.quota_basis,
        }
    }
}

/// Quota-based sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Number of sentences to select.
    ///
    /// `max(min_quota, basis / quota_divisor)` with integer division, where
    /// the basis is either every split piece or only the candidates.
    pub fn quota(&self, total_pieces: usize, candidates: usize) -> usize {
        let basis = match self.config.basis {
            QuotaBasis::SplitPieces => total_pieces,
            QuotaBasis::Candidates => candidates,
        };
        (basis / self.config.quota_divisor.max(1)).max(self.config.min_quota)
    }

    /// Select the top `quota` candidates by score, returned in document order.
    ///
    /// The sort is stable, so equal scores keep their document order and the
    /// earlier sentence wins a tie at the cut-off. If the quota exceeds the
    /// pool, every candidate is returned.
    pub fn select(&self, mut candidates: Vec<Sentence>, quota: usize) -> Vec<Sentence> {
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(quota);
        candidates.sort_by_key(|s| s.index);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(scores: &[(usize, f64)]) -> Vec<Sentence> {
        scores
            .iter()
            .map(|&(index, score)| Sentence::new(format!("sentence number {index}"), index, score))
            .collect()
    }

    #[test]
    fn test_quota_from_split_pieces() {
        let selector = SentenceSelector::new();
        assert_eq!(selector.quota(4, 4), 2);
        assert_eq!(selector.quota(11, 1), 2);
        assert_eq!(selector.quota(12, 1), 3);
        assert_eq!(selector.quota(40, 3), 10);
    }

    #[test]
    fn test_quota_from_candidates() {
        let selector = SentenceSelector::with_config(SelectorConfig {
            basis: QuotaBasis::Candidates,
            ..SelectorConfig::default()
        });
        assert_eq!(selector.quota(40, 3), 2);
        assert_eq!(selector.quota(40, 20), 5);
    }

    #[test]
    fn test_select_top_scores_in_document_order() {
        let selector = SentenceSelector::new();
        let pool = candidates(&[(0, 1.0), (2, 5.0), (3, 2.0), (7, 4.0)]);

        let selected = selector.select(pool, 2);
        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![2, 7]);
    }

    #[test]
    fn test_ties_prefer_earlier_sentence() {
        let selector = SentenceSelector::new();
        let pool = candidates(&[(1, 3.0), (4, 3.0), (5, 3.0), (9, 1.0)]);

        let selected = selector.select(pool, 2);
        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 4]);
    }

    #[test]
    fn test_quota_larger_than_pool_takes_all() {
        let selector = SentenceSelector::new();
        let pool = candidates(&[(3, 0.0), (1, 2.0)]);

        let selected = selector.select(pool, 10);
        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_zero_scores_are_selectable() {
        let selector = SentenceSelector::new();
        let pool = candidates(&[(0, 0.0), (1, 0.0), (2, 0.0)]);

        let selected = selector.select(pool, 2);
        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_empty_pool() {
        let selector = SentenceSelector::new();
        assert!(selector.select(Vec::new(), 2).is_empty());
    }
}
