//! Query failure types.

use std::panic::Location;

use thiserror::Error;

use crate::ports::ClStatus;

/// A driver call that returned a non-success status.
///
/// Displays as the inline report diagnostic `<file:line: step NAME : error N>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("<{file}:{line}: {step} {sname} : error {status}>")]
pub struct DriverFailure {
    pub file: &'static str,
    pub line: u32,
    /// What the engine was doing (`get`, `get size of`, `create context for`...).
    pub step: &'static str,
    /// Symbolic name of the property being fetched.
    pub sname: String,
    pub status: ClStatus,
}

impl DriverFailure {
    pub fn new(
        location: &'static Location<'static>,
        step: &'static str,
        sname: impl Into<String>,
        status: ClStatus,
    ) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            step,
            sname: sname.into(),
            status,
        }
    }
}

/// Outcome of a failed property fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The driver rejected the call. Local to one report line.
    #[error("{0}")]
    Driver(DriverFailure),

    /// The driver returned fewer bytes than the value type needs.
    #[error("<{file}:{line}: {sname}: expected {expected} bytes, got {actual}>")]
    Size {
        file: &'static str,
        line: u32,
        sname: String,
        expected: usize,
        actual: usize,
    },

    /// The scratch buffer could not grow. Fatal to the whole run.
    #[error("out of host memory while growing the query buffer to {requested} bytes")]
    OutOfMemory { requested: usize },
}

impl QueryError {
    /// Whether this error must abort the run rather than degrade one line.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }

    /// Driver status carried by the failure, if any.
    pub const fn status(&self) -> Option<ClStatus> {
        match self {
            Self::Driver(failure) => Some(failure.status),
            _ => None,
        }
    }
}

impl From<DriverFailure> for QueryError {
    fn from(failure: DriverFailure) -> Self {
        Self::Driver(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_failure_renders_inline_diagnostic() {
        let failure = DriverFailure {
            file: "walker.rs",
            line: 42,
            step: "get",
            sname: "CL_DEVICE_NAME".to_string(),
            status: ClStatus::INVALID_VALUE,
        };
        assert_eq!(
            failure.to_string(),
            "<walker.rs:42: get CL_DEVICE_NAME : error -30>"
        );
    }

    #[test]
    fn only_out_of_memory_is_fatal() {
        let driver = QueryError::Driver(DriverFailure {
            file: "x.rs",
            line: 1,
            step: "get",
            sname: "CL_DEVICE_TYPE".to_string(),
            status: ClStatus::INVALID_DEVICE,
        });
        assert!(!driver.is_fatal());
        assert_eq!(driver.status(), Some(ClStatus::INVALID_DEVICE));
        assert!(QueryError::OutOfMemory { requested: 1 }.is_fatal());
    }
}
