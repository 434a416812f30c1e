//! Stopword filtering
//!
//! Stopwords are excluded from the word-frequency table, so they never
//! contribute to a sentence score. The default set is a fixed English list of
//! articles, pronouns, auxiliaries and conjunctions; it is deliberately small
//! so that summaries stay byte-compatible across releases.

use rustc_hash::FxHashSet;

/// The built-in English stopword list.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// A filter for removing stopwords from the frequency table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create a filter holding the built-in English list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword.
    ///
    /// Tokens reaching the filter are already lowercase, so the lookup is exact.
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
