//! Walkers: drive the property tables against the driver and stream the
//! report into a [`ReportSink`].
//!
//! The run is two passes. The platform pass prints every platform's own
//! properties and collects device handles. The device pass then prints each
//! platform's devices through the per-device state machine.

mod device;
mod fp;
mod memory;
mod partition;
mod platform;
mod probe;
mod vector;

pub use device::{DeviceState, DeviceWalker};
pub use partition::{describe_affinity_domains_ext, describe_partition_types, describe_partition_types_ext};
pub use platform::{PlatformInventory, PlatformWalker};
pub use probe::{BUILD_LOG_MARKER, PROBE_KERNEL_NAME, PROBE_SOURCE};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::GateSet;
use crate::ports::{ClDriver, ClStatus, Line, ReportOptions, ReportSink};
use crate::query::{QueryContext, QueryError, Target};
use crate::traits::{InfoTrait, render_row};

/// Failure that aborts the whole report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to enumerate OpenCL platforms (error {0})")]
    PlatformIds(ClStatus),

    #[error("failed to enumerate devices of platform #{platform} (error {status})")]
    DeviceIds { platform: usize, status: ClStatus },

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ReportError {
    /// Driver status behind the failure, if any.
    pub const fn status(&self) -> Option<ClStatus> {
        match self {
            Self::PlatformIds(status) | Self::DeviceIds { status, .. } => Some(*status),
            Self::Query(err) => err.status(),
        }
    }
}

/// Counts gathered during a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub platforms: usize,
    pub devices: usize,
}

/// Produce the full two-pass report.
pub fn run_report(
    driver: &dyn ClDriver,
    sink: &mut dyn ReportSink,
    options: &ReportOptions,
) -> Result<ReportSummary, ReportError> {
    let mut ctx = QueryContext::new(driver);

    let inventory = PlatformWalker::new(&mut ctx, sink, options).run()?;
    info!(
        platforms = inventory.platform_count(),
        devices = inventory.device_count(),
        "enumeration complete"
    );

    DeviceWalker::new(&mut ctx, sink, options).run(&inventory)?;

    Ok(ReportSummary {
        platforms: inventory.platform_count(),
        devices: inventory.device_count(),
    })
}

/// Walk one table: skip closed gates, render, absorb, emit.
///
/// Returns the lines of deferred rows, in table order, for the caller to
/// emit later.
pub(crate) fn walk_rows<G: GateSet>(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    target: Target,
    rows: &[InfoTrait<G>],
    gates: &mut G,
    options: &ReportOptions,
) -> Result<Vec<Line>, ReportError> {
    let mut deferred = Vec::new();

    for row in rows {
        if let Some(gate) = &row.gate {
            debug_assert!(
                gates.fed().contains(gate.needs),
                "{} gated before its inputs were fed",
                row.sname
            );
            if !gate.allows(gates) {
                debug!(row = row.sname, gate = gate.name, "gate closed");
                continue;
            }
        }

        let line = match render_row(ctx, target, row, gates, &options.separator) {
            Ok(rendered) => {
                if let Some(decoded) = rendered.decoded {
                    gates.absorb(decoded);
                }
                Line::new(1, row.sname, row.pname, rendered.value)
            }
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                debug!(row = row.sname, status = err.status().map(ClStatus::name), "query failed");
                Line::failure(1, row.sname, row.pname, err.to_string())
            }
        };

        if row.deferred {
            deferred.push(line);
        } else {
            sink.line(line);
        }
    }

    Ok(deferred)
}

/// Emit `result` as one line: the value, or the inline diagnostic.
/// Fatal errors are returned instead.
pub(crate) fn emit(
    sink: &mut dyn ReportSink,
    depth: u8,
    sname: &str,
    pname: &str,
    result: Result<String, QueryError>,
) -> Result<(), ReportError> {
    match result {
        Ok(value) => sink.line(Line::new(depth, sname, pname, value)),
        Err(err) if err.is_fatal() => return Err(err.into()),
        Err(err) => sink.line(Line::failure(depth, sname, pname, err.to_string())),
    }
    Ok(())
}
