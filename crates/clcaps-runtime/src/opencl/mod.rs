//! OpenCL driver backed by the system ICD loader.

mod ffi;
mod loader;

use std::path::{Path, PathBuf};

use clcaps_core::{
    ClDriver, ContextId, DeviceId, DriverResult, KernelId, PlatformId, ProgramId,
};
use thiserror::Error;
use tracing::{debug, info};

pub use loader::{LibrarySource, default_candidates};

/// Errors from opening the ICD loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("OpenCL library lacks symbol {symbol}: {source}")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("no OpenCL library could be loaded (tried: {tried})")]
    NotFound { tried: String },
}

/// [`ClDriver`] over a dynamically loaded ICD loader.
pub struct OpenClDriver {
    api: ffi::Api,
    path: PathBuf,
}

impl OpenClDriver {
    /// Open the first usable candidate from `source`.
    ///
    /// A candidate that opens but lacks a required entry point is an error
    /// on its own; a candidate that fails to open moves on to the next.
    pub fn load(source: &LibrarySource) -> Result<Self, LoadError> {
        let candidates = source.candidates();
        for candidate in &candidates {
            match ffi::Api::open(candidate) {
                Ok(api) => {
                    info!(library = %candidate.display(), "Loaded OpenCL library");
                    return Ok(Self {
                        api,
                        path: candidate.clone(),
                    });
                }
                Err(err @ LoadError::MissingSymbol { .. }) => return Err(err),
                Err(err) => debug!(%err, "Skipping OpenCL library candidate"),
            }
        }

        let tried = candidates
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(LoadError::NotFound { tried })
    }

    /// The library that was opened.
    pub fn library_path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for OpenClDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenClDriver")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ClDriver for OpenClDriver {
    fn platform_ids(&self) -> DriverResult<Vec<PlatformId>> {
        Ok(self.api.platform_ids()?.into_iter().map(PlatformId).collect())
    }

    fn device_ids(&self, platform: PlatformId) -> DriverResult<Vec<DeviceId>> {
        Ok(self
            .api
            .device_ids(platform.0)?
            .into_iter()
            .map(DeviceId)
            .collect())
    }

    fn platform_info(
        &self,
        platform: PlatformId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        self.api.platform_info(platform.0, param, dst)
    }

    fn device_info(
        &self,
        device: DeviceId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        self.api.device_info(device.0, param, dst)
    }

    fn create_context(&self, device: DeviceId) -> DriverResult<ContextId> {
        self.api.create_context(device.0).map(ContextId)
    }

    fn create_program_with_source(
        &self,
        context: ContextId,
        source: &str,
    ) -> DriverResult<ProgramId> {
        self.api
            .create_program_with_source(context.0, source)
            .map(ProgramId)
    }

    fn build_program(&self, program: ProgramId, device: DeviceId) -> DriverResult<()> {
        self.api.build_program(program.0, device.0)
    }

    fn program_build_info(
        &self,
        program: ProgramId,
        device: DeviceId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        self.api.program_build_info(program.0, device.0, param, dst)
    }

    fn create_kernel(&self, program: ProgramId, name: &str) -> DriverResult<KernelId> {
        self.api.create_kernel(program.0, name).map(KernelId)
    }

    fn kernel_work_group_info(
        &self,
        kernel: KernelId,
        device: DeviceId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        self.api.kernel_work_group_info(kernel.0, device.0, param, dst)
    }

    fn release_kernel(&self, kernel: KernelId) {
        self.api.release_kernel(kernel.0);
    }

    fn release_program(&self, program: ProgramId) {
        self.api.release_program(program.0);
    }

    fn release_context(&self, context: ContextId) {
        self.api.release_context(context.0);
    }
}
