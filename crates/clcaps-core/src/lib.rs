//! Core of `clcaps`, an OpenCL capability report.
//!
//! The engine walks immutable property tables against an abstract
//! [`ClDriver`], decides per row whether it applies to the device at hand,
//! and streams labelled lines into a [`ReportSink`]. Adapters for the real
//! driver and for output formats live in the runtime and CLI crates.

#![deny(unused_crate_dependencies)]

pub mod cl;
pub mod domain;
pub mod format;
pub mod ports;
pub mod query;
pub mod traits;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use domain::{
    Capability, DeviceGates, DeviceType, ExtensionRegistry, NamedFlags, PlatformGates,
    parse_ordinal,
};
pub use format::{bool_str, decode_bitmask, format_mem, hex_str};
pub use ports::{
    ClDriver, ClStatus, ContextId, DeviceId, DriverResult, KernelId, LabelMode, Line, PlatformId,
    ProgramId, ReportOptions, ReportSink, Section,
};
pub use query::{DriverFailure, QueryContext, QueryError, ScratchBuffer, Target};
pub use walker::{ReportError, ReportSummary, run_report};

#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use clcaps_core as _;
