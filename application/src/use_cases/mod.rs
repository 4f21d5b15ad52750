//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_document;
pub mod answer_questions;
pub mod resilient_call;
pub mod sentiment;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;
