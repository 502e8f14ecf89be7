//! Command handlers.
//!
//! Handlers are thin: resolve adapters, call the core engine, and map its
//! errors into `anyhow` with context for the terminal.

pub mod report;
