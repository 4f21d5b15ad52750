//! Logging infrastructure - machine-readable call logging.
//!
//! Provides [`JsonlCallLogger`], a JSONL file writer that implements the
//! [`AnalysisObserver`](analyst_application::AnalysisObserver) port.

mod call_logger;

pub use call_logger::JsonlCallLogger;
