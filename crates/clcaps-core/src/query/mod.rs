//! Query primitive: one "ask the driver for property X of handle Y".
//!
//! [`QueryContext`] owns the scratch buffer and the driver reference for a
//! run, so no query depends on hidden shared state. Every fetch performs the
//! size probe, grows the buffer if needed, then performs the fill.

mod buffer;
mod error;

use std::panic::Location;

pub use buffer::ScratchBuffer;
pub use error::{DriverFailure, QueryError};

use crate::ports::{ClDriver, DeviceId, DriverResult, KernelId, PlatformId, ProgramId};

/// What a property query is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Platform(PlatformId),
    Device(DeviceId),
    /// Work-group info of a kernel on a device.
    Kernel(KernelId, DeviceId),
    /// Build info of a program on a device.
    Build(ProgramId, DeviceId),
}

impl Target {
    fn call(self, driver: &dyn ClDriver, param: u32, dst: Option<&mut [u8]>) -> DriverResult<usize> {
        match self {
            Self::Platform(platform) => driver.platform_info(platform, param, dst),
            Self::Device(device) => driver.device_info(device, param, dst),
            Self::Kernel(kernel, device) => driver.kernel_work_group_info(kernel, device, param, dst),
            Self::Build(program, device) => driver.program_build_info(program, device, param, dst),
        }
    }
}

/// Fixed-size value that can be read from native-endian driver bytes.
pub trait Scalar: Copy {
    const SIZE: usize;

    fn from_ne(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const SIZE: usize = size_of::<$t>();

                fn from_ne(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$t>()];
                    raw.copy_from_slice(&bytes[..size_of::<$t>()]);
                    <$t>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_scalar!(u32, u64, usize, isize);

/// `cl_bool` is a 32-bit integer.
impl Scalar for bool {
    const SIZE: usize = size_of::<u32>();

    fn from_ne(bytes: &[u8]) -> Self {
        u32::from_ne(bytes) != 0
    }
}

/// Per-run query state: driver handle plus scratch buffer.
pub struct QueryContext<'d> {
    driver: &'d dyn ClDriver,
    buffer: ScratchBuffer,
}

impl<'d> QueryContext<'d> {
    pub const fn new(driver: &'d dyn ClDriver) -> Self {
        Self {
            driver,
            buffer: ScratchBuffer::new(),
        }
    }

    pub fn driver(&self) -> &'d dyn ClDriver {
        self.driver
    }

    pub const fn buffer(&self) -> &ScratchBuffer {
        &self.buffer
    }

    /// Fetch the raw bytes of a property using the two-call convention.
    #[track_caller]
    pub fn fetch_bytes(
        &mut self,
        target: Target,
        param: u32,
        sname: &str,
    ) -> Result<&[u8], QueryError> {
        let location = Location::caller();
        let driver = self.driver;

        let size = target
            .call(driver, param, None)
            .map_err(|status| DriverFailure::new(location, "get size of", sname, status))?;
        if size == 0 {
            return Ok(&[]);
        }

        self.buffer.ensure_capacity(size)?;
        let written = target
            .call(driver, param, Some(self.buffer.slice_mut(size)))
            .map_err(|status| DriverFailure::new(location, "get", sname, status))?;

        Ok(self.buffer.filled(written.min(size)))
    }

    /// Fetch raw bytes, failing with [`QueryError::Size`] if fewer than
    /// `expected` came back.
    #[track_caller]
    pub fn sized_bytes(
        &mut self,
        target: Target,
        param: u32,
        sname: &str,
        expected: usize,
    ) -> Result<&[u8], QueryError> {
        let location = Location::caller();
        let bytes = self.fetch_bytes(target, param, sname)?;
        if bytes.len() < expected {
            return Err(QueryError::Size {
                file: location.file(),
                line: location.line(),
                sname: sname.to_string(),
                expected,
                actual: bytes.len(),
            });
        }
        Ok(bytes)
    }

    /// Fetch a fixed-size scalar property.
    #[track_caller]
    pub fn scalar<T: Scalar>(
        &mut self,
        target: Target,
        param: u32,
        sname: &str,
    ) -> Result<T, QueryError> {
        let bytes = self.sized_bytes(target, param, sname, T::SIZE)?;
        Ok(T::from_ne(bytes))
    }

    /// Fetch a NUL-terminated string property, leading ASCII whitespace trimmed.
    #[track_caller]
    pub fn string(&mut self, target: Target, param: u32, sname: &str) -> Result<String, QueryError> {
        let bytes = self.fetch_bytes(target, param, sname)?;
        Ok(decode_c_string(bytes))
    }

    /// Fetch an array property; the element count follows from the byte length.
    #[track_caller]
    pub fn array<T: Scalar>(
        &mut self,
        target: Target,
        param: u32,
        sname: &str,
    ) -> Result<Vec<T>, QueryError> {
        let bytes = self.fetch_bytes(target, param, sname)?;
        Ok(bytes.chunks_exact(T::SIZE).map(T::from_ne).collect())
    }
}

/// Decode bytes up to the first NUL and trim leading ASCII whitespace.
pub fn decode_c_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end])
        .trim_start_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}
