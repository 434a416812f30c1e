//! Summarization components
//!
//! Provides extractive summarization by word-frequency scoring: sentences
//! are scored by the average corpus frequency of their significant words and
//! the best ones are kept in document order.

pub mod engine;
pub mod scorer;
pub mod selector;
