//! Analysis subdomain: the request, per-task outcomes and result shapes.
//!
//! - [`request::AnalysisRequest`]: immutable input shared by all tasks
//! - [`task::TaskKind`]: which of the three tasks produced an event
//! - [`outcome::TaskOutcome`]: settled result of one task
//! - [`results`]: summary, sentiment, Q&A and aggregate value objects

pub mod outcome;
pub mod request;
pub mod results;
pub mod task;
