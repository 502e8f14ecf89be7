//! Driver port for the OpenCL property-query API.
//!
//! The port mirrors the two-call convention of the native API: a call with
//! no destination returns the required byte size, a second call with a
//! buffer of at least that size fills it. Implementations live in adapters
//! (e.g., clcaps-runtime); the core never links against a driver.

use std::fmt;

use serde::Serialize;

/// Opaque platform handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlatformId(pub usize);

/// Opaque device handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceId(pub usize);

/// Opaque context handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub usize);

/// Opaque program handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub usize);

/// Opaque kernel handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelId(pub usize);

/// Status code returned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClStatus(pub i32);

impl ClStatus {
    pub const SUCCESS: Self = Self(0);
    pub const DEVICE_NOT_FOUND: Self = Self(-1);
    pub const DEVICE_NOT_AVAILABLE: Self = Self(-2);
    pub const COMPILER_NOT_AVAILABLE: Self = Self(-3);
    pub const OUT_OF_RESOURCES: Self = Self(-5);
    pub const OUT_OF_HOST_MEMORY: Self = Self(-6);
    pub const BUILD_PROGRAM_FAILURE: Self = Self(-11);
    pub const INVALID_VALUE: Self = Self(-30);
    pub const INVALID_PLATFORM: Self = Self(-32);
    pub const INVALID_DEVICE: Self = Self(-33);
    pub const INVALID_KERNEL_NAME: Self = Self(-46);
    pub const PLATFORM_NOT_FOUND_KHR: Self = Self(-1001);

    /// Symbolic name for the well-known codes, used in log fields.
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "CL_SUCCESS",
            -1 => "CL_DEVICE_NOT_FOUND",
            -2 => "CL_DEVICE_NOT_AVAILABLE",
            -3 => "CL_COMPILER_NOT_AVAILABLE",
            -5 => "CL_OUT_OF_RESOURCES",
            -6 => "CL_OUT_OF_HOST_MEMORY",
            -11 => "CL_BUILD_PROGRAM_FAILURE",
            -30 => "CL_INVALID_VALUE",
            -32 => "CL_INVALID_PLATFORM",
            -33 => "CL_INVALID_DEVICE",
            -46 => "CL_INVALID_KERNEL_NAME",
            -1001 => "CL_PLATFORM_NOT_FOUND_KHR",
            _ => "CL_UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ClStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result type for raw driver calls.
pub type DriverResult<T> = Result<T, ClStatus>;

/// Port for the native OpenCL query API.
///
/// Every info query follows the size-then-fill convention: `dst == None`
/// asks for the required size in bytes, `Some(buf)` fills `buf` and returns
/// the number of bytes written.
pub trait ClDriver {
    /// List all platform handles.
    fn platform_ids(&self) -> DriverResult<Vec<PlatformId>>;

    /// List all device handles of a platform.
    ///
    /// An empty platform is reported as `Err(ClStatus::DEVICE_NOT_FOUND)`.
    fn device_ids(&self, platform: PlatformId) -> DriverResult<Vec<DeviceId>>;

    fn platform_info(
        &self,
        platform: PlatformId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize>;

    fn device_info(&self, device: DeviceId, param: u32, dst: Option<&mut [u8]>)
    -> DriverResult<usize>;

    fn create_context(&self, device: DeviceId) -> DriverResult<ContextId>;

    fn create_program_with_source(
        &self,
        context: ContextId,
        source: &str,
    ) -> DriverResult<ProgramId>;

    fn build_program(&self, program: ProgramId, device: DeviceId) -> DriverResult<()>;

    fn program_build_info(
        &self,
        program: ProgramId,
        device: DeviceId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize>;

    fn create_kernel(&self, program: ProgramId, name: &str) -> DriverResult<KernelId>;

    fn kernel_work_group_info(
        &self,
        kernel: KernelId,
        device: DeviceId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize>;

    fn release_kernel(&self, kernel: KernelId);

    fn release_program(&self, program: ProgramId);

    fn release_context(&self, context: ContextId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_cover_common_codes() {
        assert_eq!(ClStatus::DEVICE_NOT_FOUND.name(), "CL_DEVICE_NOT_FOUND");
        assert_eq!(ClStatus::INVALID_VALUE.name(), "CL_INVALID_VALUE");
        assert_eq!(ClStatus(-9999).name(), "CL_UNKNOWN_ERROR");
    }

    #[test]
    fn status_displays_numeric_code() {
        assert_eq!(ClStatus::BUILD_PROGRAM_FAILURE.to_string(), "-11");
    }
}
