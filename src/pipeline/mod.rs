//! Configuration specs, validation and stage observation
//!
//! [`spec::SummarySpec`] is the serializable form of a
//! [`SummaryConfig`](crate::types::SummaryConfig); [`validation`] checks it
//! and [`observer`] exposes stage-level hooks of a running summary.

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod spec;
pub mod validation;
