//! Report sinks for the terminal.
//!
//! # Guidelines
//!
//! - Keep this module format-only: the engine decides what is reported
//! - Diagnostics go to the error writer, never into the report body

pub mod json;
pub mod text;

pub use json::JsonSink;
pub use text::{LABEL_WIDTH, TextSink};
