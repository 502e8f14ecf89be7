use tracing::debug;

use super::{ReportError, walk_rows};
use crate::cl::CL_DEVICE_SVM_CAPABILITIES;
use crate::domain::{Capability, DeviceGates, NamedFlags, SvmCapabilities};
use crate::format::bool_str;
use crate::ports::{DeviceId, Line, ReportOptions, ReportSink};
use crate::query::{QueryContext, Target};
use crate::traits::MEMORY_TRAITS;

/// Memory rows followed by the SVM capability summary.
pub(super) fn report(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
    gates: &mut DeviceGates,
    options: &ReportOptions,
) -> Result<Vec<Line>, ReportError> {
    let deferred = walk_rows(ctx, sink, Target::Device(device), MEMORY_TRAITS, gates, options)?;
    svm(ctx, sink, device, gates)?;
    Ok(deferred)
}

fn svm(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
    gates: &DeviceGates,
) -> Result<(), ReportError> {
    const SNAME: &str = "CL_DEVICE_SVM_CAPABILITIES";
    const PNAME: &str = "Shared Virtual Memory (SVM) capabilities";

    if !gates.has_svm() {
        debug!(?device, "no SVM support");
        return Ok(());
    }

    let bits = match ctx.scalar::<u64>(Target::Device(device), CL_DEVICE_SVM_CAPABILITIES, SNAME) {
        Ok(bits) => bits,
        Err(err) if err.is_fatal() => return Err(err.into()),
        Err(err) => {
            sink.line(Line::failure(1, SNAME, PNAME, err.to_string()));
            return Ok(());
        }
    };

    let source = if gates.is_20() {
        "core"
    } else {
        gates.extensions().matched(Capability::Svm).unwrap_or("core")
    };
    sink.line(Line::new(1, SNAME, PNAME, format!("({source})")));

    let capabilities = SvmCapabilities::from_bits_retain(bits);
    for name in SvmCapabilities::NAMES {
        sink.line(Line::new(2, name.sname, name.pname, bool_str(capabilities.contains(name.flag))));
    }
    Ok(())
}
