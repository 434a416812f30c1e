//! Natural Language Processing components
//!
//! This module provides normalization, tokenization, stopword filtering and
//! the word-frequency table.

pub mod frequency;
pub mod stopwords;
pub mod tokenizer;
