use tracing::debug;

use super::ReportError;
use crate::cl::{CL_DEVICE_DOUBLE_FP_CONFIG, CL_DEVICE_HALF_FP_CONFIG, CL_DEVICE_SINGLE_FP_CONFIG};
use crate::domain::{Capability, DeviceGates, FpConfig, NamedFlags};
use crate::format::bool_str;
use crate::ports::{DeviceId, Line, ReportSink};
use crate::query::{QueryContext, Target};

struct Precision {
    param: u32,
    sname: &'static str,
    pname: &'static str,
    /// Extension that can provide it; `None` for always-core single precision.
    capability: Option<Capability>,
    applies: fn(&DeviceGates) -> bool,
}

const PRECISIONS: [Precision; 3] = [
    Precision {
        param: CL_DEVICE_HALF_FP_CONFIG,
        sname: "CL_DEVICE_HALF_FP_CONFIG",
        pname: "Half-precision Floating-point support",
        capability: Some(Capability::Half),
        applies: DeviceGates::has_half,
    },
    Precision {
        param: CL_DEVICE_SINGLE_FP_CONFIG,
        sname: "CL_DEVICE_SINGLE_FP_CONFIG",
        pname: "Single-precision Floating-point support",
        capability: None,
        applies: |_| true,
    },
    Precision {
        param: CL_DEVICE_DOUBLE_FP_CONFIG,
        sname: "CL_DEVICE_DOUBLE_FP_CONFIG",
        pname: "Double-precision Floating-point support",
        capability: Some(Capability::Double),
        applies: DeviceGates::has_double_support,
    },
];

/// Floating-point capabilities per precision, one `Yes`/`No` line per flag.
pub(super) fn report(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
    gates: &DeviceGates,
) -> Result<(), ReportError> {
    for precision in &PRECISIONS {
        if !(precision.applies)(gates) {
            debug!(?device, config = precision.sname, "precision not supported");
            continue;
        }

        let bits = match ctx.scalar::<u64>(Target::Device(device), precision.param, precision.sname) {
            Ok(bits) => bits,
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                sink.line(Line::failure(1, precision.sname, precision.pname, err.to_string()));
                continue;
            }
        };

        let source = precision
            .capability
            .and_then(|cap| gates.extensions().matched(cap))
            .unwrap_or("core");
        sink.line(Line::new(1, precision.sname, precision.pname, format!("({source})")));

        let config = FpConfig::from_bits_retain(bits);
        let single = precision.param == CL_DEVICE_SINGLE_FP_CONFIG;
        for name in FpConfig::NAMES {
            if name.flag == FpConfig::CORRECTLY_ROUNDED_DIVIDE_SQRT && !single {
                continue;
            }
            sink.line(Line::new(2, name.sname, name.pname, bool_str(config.contains(name.flag))));
        }
    }
    Ok(())
}
