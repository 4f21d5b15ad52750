//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the remote text-generation model identifier
//! - [`text`]: word counting, context truncation and the error-tag convention
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod text;
