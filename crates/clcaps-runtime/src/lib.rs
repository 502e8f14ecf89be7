//! Adapters that connect `clcaps-core` ports to the real system.
//!
//! [`OpenClDriver`] implements [`ClDriver`](clcaps_core::ClDriver) on top of
//! the OpenCL ICD loader, opened at runtime.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod opencl;

pub use opencl::{LibrarySource, LoadError, OpenClDriver};
