//! Prompt domain
//!
//! Templates for the prompt sent by each analysis task.

mod template;

pub use template::PromptTemplate;
