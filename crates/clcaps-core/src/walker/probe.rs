//! Preferred work-group size multiple.
//!
//! OpenCL only reports this per kernel, so the probe builds a trivial
//! kernel on the device and asks for it. Every handle it creates is owned by
//! a guard that releases it on drop.

use std::panic::Location;

use tracing::{debug, warn};

use super::{ReportError, emit};
use crate::cl::{CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE, CL_PROGRAM_BUILD_LOG};
use crate::ports::{ClDriver, ClStatus, ContextId, DeviceId, KernelId, ProgramId, ReportOptions, ReportSink};
use crate::query::{DriverFailure, QueryContext, QueryError, Target};

/// Name of the kernel defined by [`PROBE_SOURCE`].
pub const PROBE_KERNEL_NAME: &str = "sum";

/// Element-wise addition, parameterized on the element type.
pub const PROBE_SOURCE: &str = "\
#define ELEMENTWISE_ADD(T) \\
    kernel void sum(global T *out, global const T *a, global const T *b) \\
    { \\
        size_t i = get_global_id(0); \\
        out[i] = a[i] + b[i]; \\
    }
ELEMENTWISE_ADD(float)
";

/// Line written to the diagnostic channel ahead of a failed build's log.
pub const BUILD_LOG_MARKER: &str = "=== CL_PROGRAM_BUILD_LOG ===";

const SNAME: &str = "CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE";

pub(super) fn report(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
    options: &ReportOptions,
) -> Result<(), ReportError> {
    if !options.probe_work_group {
        debug!(?device, "work-group probe disabled");
        return Ok(());
    }

    let result = preferred_multiple(ctx, sink, device);
    if let Err(err) = &result {
        if !err.is_fatal() {
            warn!(?device, %err, "work-group probe failed");
        }
    }
    emit(sink, 1, SNAME, "Preferred work group size multiple", result)
}

fn failure(location: &'static Location<'static>, step: &'static str, status: ClStatus) -> QueryError {
    DriverFailure::new(location, step, SNAME, status).into()
}

fn preferred_multiple(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
) -> Result<String, QueryError> {
    let driver = ctx.driver();

    let context = driver
        .create_context(device)
        .map_err(|status| failure(Location::caller(), "create context for", status))?;
    let context = ContextGuard { driver, id: context };

    let program = driver
        .create_program_with_source(context.id, PROBE_SOURCE)
        .map_err(|status| failure(Location::caller(), "create program for", status))?;
    let program = ProgramGuard { driver, id: program };

    if let Err(status) = driver.build_program(program.id, device) {
        if status == ClStatus::BUILD_PROGRAM_FAILURE {
            match ctx.string(Target::Build(program.id, device), CL_PROGRAM_BUILD_LOG, "CL_PROGRAM_BUILD_LOG") {
                Ok(log) => sink.diagnostic(BUILD_LOG_MARKER, &log),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => warn!(%err, "could not fetch the build log"),
            }
        }
        return Err(failure(Location::caller(), "build program for", status));
    }

    let kernel = driver
        .create_kernel(program.id, PROBE_KERNEL_NAME)
        .map_err(|status| failure(Location::caller(), "create kernel for", status))?;
    let kernel = KernelGuard { driver, id: kernel };

    let multiple: usize = ctx.scalar(Target::Kernel(kernel.id, device), CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE, SNAME)?;
    Ok(multiple.to_string())
}

struct ContextGuard<'d> {
    driver: &'d dyn ClDriver,
    id: ContextId,
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        self.driver.release_context(self.id);
    }
}

struct ProgramGuard<'d> {
    driver: &'d dyn ClDriver,
    id: ProgramId,
}

impl Drop for ProgramGuard<'_> {
    fn drop(&mut self) {
        self.driver.release_program(self.id);
    }
}

struct KernelGuard<'d> {
    driver: &'d dyn ClDriver,
    id: KernelId,
}

impl Drop for KernelGuard<'_> {
    fn drop(&mut self) {
        self.driver.release_kernel(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_defines_the_named_kernel() {
        assert!(PROBE_SOURCE.contains(&format!("kernel void {PROBE_KERNEL_NAME}(")));
        assert!(PROBE_SOURCE.lines().any(|l| l.starts_with("ELEMENTWISE_ADD(")));
    }
}
