use crate::cl::*;
use crate::domain::{PlatformGates, gate};

use super::{InfoTrait, Render, row};

/// Platform properties, in display order.
pub static PLATFORM_TRAITS: &[InfoTrait<PlatformGates>] = &[
    row!(CL_PLATFORM_NAME, "Platform Name", Render::Str),
    row!(CL_PLATFORM_VENDOR, "Platform Vendor", Render::Str),
    row!(CL_PLATFORM_VERSION, "Platform Version", Render::Version),
    row!(CL_PLATFORM_PROFILE, "Platform Profile", Render::Str),
    row!(CL_PLATFORM_EXTENSIONS, "Platform Extensions", Render::Extensions),
    row!(
        CL_PLATFORM_ICD_SUFFIX_KHR,
        "Platform Extensions function suffix",
        Render::Str,
        gate = gate::PLATFORM_HAS_ICD
    ),
    row!(
        CL_PLATFORM_HOST_TIMER_RESOLUTION,
        "Platform Host timer resolution",
        Render::Ulong,
        suffix = "ns",
        gate = gate::PLATFORM_IS_21
    ),
];
