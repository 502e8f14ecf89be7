//! `clcaps` command-line adapter.
//!
//! Parses arguments, wires the OpenCL driver and an output sink together,
//! and hands both to the core report engine.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, OutputFormat};
pub use parser::Cli;
