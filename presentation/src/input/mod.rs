//! Document and question input

pub mod document;
