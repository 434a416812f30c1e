//! Corpus-wide word significance
//!
//! A [`WordFrequencyTable`] counts how often each significant token occurs in
//! the cleaned document. It is built once per summarization call and is
//! read-only afterwards.

use rustc_hash::FxHashMap;

use super::stopwords::StopwordFilter;
use super::tokenizer;

/// Token -> occurrence count over a whole document.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count every token of `text` longer than `min_word_length` characters
    /// that is not a stopword.
    pub fn build(text: &str, min_word_length: usize, stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokenizer::tokens(text) {
            if token.len() > min_word_length && !stopwords.is_stopword(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count of `token`, if it is significant.
    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct significant tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Top `n` tokens by count, ties ordered alphabetically.
    pub fn top_n(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}
