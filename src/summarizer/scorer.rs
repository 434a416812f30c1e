//! Sentence scoring by average word significance
//!
//! A sentence's score is the mean frequency-table count over its significant
//! words. Averaging keeps long sentences from winning on length alone.

use crate::nlp::frequency::WordFrequencyTable;
use crate::nlp::tokenizer;
use crate::types::{Sentence, SummaryConfig};

/// Scores sentences against a document's frequency table
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer<'a> {
    table: &'a WordFrequencyTable,
    min_word_length: usize,
    min_sentence_length: usize,
}

impl<'a> SentenceScorer<'a> {
    pub fn new(table: &'a WordFrequencyTable, cfg: &SummaryConfig) -> Self {
        Self {
            table,
            min_word_length: cfg.min_word_length,
            min_sentence_length: cfg.min_sentence_length,
        }
    }

    /// Score one sentence.
    ///
    /// Returns `0.0` when none of its words appear in the table, which is the
    /// case for sentences made only of stopwords and short words.
    pub fn score(&self, sentence: &str) -> f64 {
        let mut total = 0usize;
        let mut valid_words = 0usize;

        for token in tokenizer::tokens(sentence) {
            if token.len() <= self.min_word_length {
                continue;
            }
            if let Some(count) = self.table.get(&token) {
                total += count;
                valid_words += 1;
            }
        }

        if valid_words > 0 {
            total as f64 / valid_words as f64
        } else {
            0.0
        }
    }

    /// Trim and score every piece long enough to be a candidate.
    ///
    /// Each candidate keeps the index of its piece, so indices of dropped
    /// pieces show up as gaps.
    pub fn score_candidates(&self, pieces: &[&str]) -> Vec<Sentence> {
        pieces
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| {
                let text = piece.trim();
                (text.len() > self.min_sentence_length)
                    .then(|| Sentence::new(text, index, self.score(text)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;

    fn table(text: &str) -> WordFrequencyTable {
        WordFrequencyTable::build(text, 2, &StopwordFilter::new())
    }

    #[test]
    fn test_score_is_average_of_counts() {
        let t = table("rust rust rust cargo cargo crate");
        let cfg = SummaryConfig::default();
        let scorer = SentenceScorer::new(&t, &cfg);

        // rust=3, cargo=2 -> (3 + 2) / 2
        assert!((scorer.score("Rust and cargo") - 2.5).abs() < 1e-12);
        // unknown words do not dilute the average
        assert!((scorer.score("rust unknownword") - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_stopword_only_sentence_scores_zero() {
        let t = table("they were with them and it is so on the");
        let cfg = SummaryConfig::default();
        let scorer = SentenceScorer::new(&t, &cfg);
        assert_eq!(scorer.score("They were with them and it is so on"), 0.0);
    }

    #[test]
    fn test_candidates_keep_original_indices() {
        let t = table("alpha beta gamma delta");
        let cfg = SummaryConfig::default();
        let scorer = SentenceScorer::new(&t, &cfg);

        let pieces = ["Alpha is long enough", " tiny", "", "  Gamma and delta here "];
        let candidates = scorer.score_candidates(&pieces);

        let indices: Vec<_> = candidates.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
        assert_eq!(candidates[1].text, "Gamma and delta here");
    }

    #[test]
    fn test_length_threshold_is_exclusive() {
        let t = table("");
        let cfg = SummaryConfig::default();
        let scorer = SentenceScorer::new(&t, &cfg);

        // exactly 10 chars is dropped, 11 is kept
        let pieces = ["0123456789", "0123456789a"];
        let candidates = scorer.score_candidates(&pieces);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].index, 1);
        assert_eq!(candidates[0].score, 0.0);
    }
}
