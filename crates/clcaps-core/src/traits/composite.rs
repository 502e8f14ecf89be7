//! Renderers for vendor properties with a structured layout.

use crate::cl::{
    CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV, CL_DEVICE_COMPUTE_CAPABILITY_MINOR_NV,
    CL_DEVICE_TOPOLOGY_AMD, CL_DEVICE_TOPOLOGY_TYPE_PCIE_AMD,
};
use crate::domain::DeviceGates;
use crate::query::{QueryContext, QueryError, Target};

/// Size of `cl_device_topology_amd`: a `cl_uint` type tag, padding, then
/// bus, device and function bytes at offsets 21 to 23.
const TOPOLOGY_LEN: usize = 24;

/// `CL_DEVICE_TOPOLOGY_AMD` as `PCI-E, bb:dd.f`.
pub fn amd_topology(
    ctx: &mut QueryContext<'_>,
    target: Target,
    _separator: &str,
    _gates: &DeviceGates,
) -> Result<String, QueryError> {
    let raw = ctx.sized_bytes(target, CL_DEVICE_TOPOLOGY_AMD, "CL_DEVICE_TOPOLOGY_AMD", TOPOLOGY_LEN)?;
    let kind = u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]);
    if kind != CL_DEVICE_TOPOLOGY_TYPE_PCIE_AMD {
        return Ok(format!("<unknown topology type {kind}>"));
    }
    let (bus, device, function) = (raw[21], raw[22], raw[23]);
    Ok(format!("PCI-E, {bus:02x}:{device:02x}.{function}"))
}

/// NVIDIA compute capability as `major.minor`.
pub fn nv_compute_capability(
    ctx: &mut QueryContext<'_>,
    target: Target,
    _separator: &str,
    _gates: &DeviceGates,
) -> Result<String, QueryError> {
    let major: u32 = ctx.scalar(
        target,
        CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV,
        "CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV",
    )?;
    let minor: u32 = ctx.scalar(
        target,
        CL_DEVICE_COMPUTE_CAPABILITY_MINOR_NV,
        "CL_DEVICE_COMPUTE_CAPABILITY_MINOR_NV",
    )?;
    Ok(format!("{major}.{minor}"))
}
