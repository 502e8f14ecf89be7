use super::{ReportError, emit};
use crate::cl::*;
use crate::domain::{Capability, DeviceGates};
use crate::ports::{DeviceId, Line, ReportSink};
use crate::query::{QueryContext, QueryError, Target};

struct Lane {
    name: &'static str,
    preferred: (u32, &'static str),
    native: (u32, &'static str),
    /// Optional lane types also show the marker that enables them.
    capability: Option<Capability>,
}

macro_rules! lane {
    ($name:literal, $preferred:ident, $native:ident $(, $cap:expr)?) => {
        Lane {
            name: $name,
            preferred: ($preferred, stringify!($preferred)),
            native: ($native, stringify!($native)),
            capability: lane!(@cap $($cap)?),
        }
    };
    (@cap) => { None };
    (@cap $cap:expr) => { Some($cap) };
}

const LANES: [Lane; 7] = [
    lane!("char", CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR, CL_DEVICE_NATIVE_VECTOR_WIDTH_CHAR),
    lane!("short", CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT, CL_DEVICE_NATIVE_VECTOR_WIDTH_SHORT),
    lane!("int", CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT, CL_DEVICE_NATIVE_VECTOR_WIDTH_INT),
    lane!("long", CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG, CL_DEVICE_NATIVE_VECTOR_WIDTH_LONG),
    lane!(
        "half",
        CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF,
        CL_DEVICE_NATIVE_VECTOR_WIDTH_HALF,
        Capability::Half
    ),
    lane!("float", CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT, CL_DEVICE_NATIVE_VECTOR_WIDTH_FLOAT),
    lane!(
        "double",
        CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE,
        CL_DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE,
        Capability::Double
    ),
];

/// Preferred and native vector widths per lane type, `P / N`.
pub(super) fn report(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
    gates: &DeviceGates,
) -> Result<(), ReportError> {
    sink.line(Line::new(1, "#VECTOR_WIDTHS", "Preferred / native vector sizes", ""));

    for lane in &LANES {
        let result = widths(ctx, Target::Device(device), lane).map(|(preferred, native)| {
            let mut value = format!("{preferred} / {native}");
            if let Some(capability) = lane.capability {
                let marker = gates.extensions().matched(capability).unwrap_or("n/a");
                value.push_str(&format!(" ({marker})"));
            }
            value
        });
        emit(sink, 2, lane.preferred.1, lane.name, result)?;
    }
    Ok(())
}

fn widths(ctx: &mut QueryContext<'_>, target: Target, lane: &Lane) -> Result<(u32, u32), QueryError> {
    let preferred = ctx.scalar(target, lane.preferred.0, lane.preferred.1)?;
    let native = ctx.scalar(target, lane.native.0, lane.native.1)?;
    Ok((preferred, native))
}
