//! Completion endpoint adapter
//!
//! Implements the [`CompletionTransport`](analyst_application::CompletionTransport)
//! port over HTTPS with `reqwest`.

mod protocol;
mod transport;

pub use transport::HttpCompletionTransport;
