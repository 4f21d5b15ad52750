//! Completion domain
//!
//! Wire-independent description of a single text-completion call.

pub mod api_key;
pub mod request;
