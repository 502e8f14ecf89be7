//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core engine expects from
//! infrastructure. They contain no implementation details.
//!
//! # Design Rules
//!
//! - No FFI types in any signature
//! - Handles are opaque newtypes
//! - The driver port moves bytes and status codes only

pub mod driver;
pub mod report_sink;

pub use driver::{
    ClDriver, ClStatus, ContextId, DeviceId, DriverResult, KernelId, PlatformId, ProgramId,
};
pub use report_sink::{LabelMode, Line, ReportOptions, ReportSink, Section};
