//! Raw entry points of the ICD loader.
//!
//! Handles cross the port boundary as `usize`; every pointer cast in the
//! crate happens here.

#![allow(unsafe_code)]

use std::ffi::{CString, c_char, c_void};
use std::path::Path;
use std::ptr;

use clcaps_core::{ClStatus, DriverResult};
use libloading::Library;
use tracing::debug;

use super::LoadError;

type Handle = *mut c_void;

/// `CL_DEVICE_TYPE_ALL`
const DEVICE_TYPE_ALL: u64 = 0xFFFF_FFFF;

type GetPlatformIds = unsafe extern "system" fn(u32, *mut Handle, *mut u32) -> i32;
type GetDeviceIds = unsafe extern "system" fn(Handle, u64, u32, *mut Handle, *mut u32) -> i32;
type GetInfo = unsafe extern "system" fn(Handle, u32, usize, *mut c_void, *mut usize) -> i32;
type GetPairInfo =
    unsafe extern "system" fn(Handle, Handle, u32, usize, *mut c_void, *mut usize) -> i32;
type ContextNotify = unsafe extern "system" fn(*const c_char, *const c_void, usize, *mut c_void);
type CreateContext = unsafe extern "system" fn(
    *const isize,
    u32,
    *const Handle,
    Option<ContextNotify>,
    *mut c_void,
    *mut i32,
) -> Handle;
type CreateProgramWithSource =
    unsafe extern "system" fn(Handle, u32, *const *const c_char, *const usize, *mut i32) -> Handle;
type BuildNotify = unsafe extern "system" fn(Handle, *mut c_void);
type BuildProgram = unsafe extern "system" fn(
    Handle,
    u32,
    *const Handle,
    *const c_char,
    Option<BuildNotify>,
    *mut c_void,
) -> i32;
type CreateKernel = unsafe extern "system" fn(Handle, *const c_char, *mut i32) -> Handle;
type Release = unsafe extern "system" fn(Handle) -> i32;

/// Entry points resolved from one loaded library.
///
/// The function pointers stay valid for as long as `_library` is alive.
pub(super) struct Api {
    get_platform_ids: GetPlatformIds,
    get_platform_info: GetInfo,
    get_device_ids: GetDeviceIds,
    get_device_info: GetInfo,
    create_context: CreateContext,
    create_program_with_source: CreateProgramWithSource,
    build_program: BuildProgram,
    get_program_build_info: GetPairInfo,
    create_kernel: CreateKernel,
    get_kernel_work_group_info: GetPairInfo,
    release_kernel: Release,
    release_program: Release,
    release_context: Release,
    _library: Library,
}

impl Api {
    /// Open `path` and resolve every entry point the report needs.
    pub(super) fn open(path: &Path) -> Result<Self, LoadError> {
        // SAFETY: loading the ICD loader runs its initializers; it is a
        // system library with no extra preconditions.
        let library = unsafe { Library::new(path) }.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: each symbol is cast to the signature from the OpenCL headers.
        unsafe {
            Ok(Self {
                get_platform_ids: symbol(&library, "clGetPlatformIDs")?,
                get_platform_info: symbol(&library, "clGetPlatformInfo")?,
                get_device_ids: symbol(&library, "clGetDeviceIDs")?,
                get_device_info: symbol(&library, "clGetDeviceInfo")?,
                create_context: symbol(&library, "clCreateContext")?,
                create_program_with_source: symbol(&library, "clCreateProgramWithSource")?,
                build_program: symbol(&library, "clBuildProgram")?,
                get_program_build_info: symbol(&library, "clGetProgramBuildInfo")?,
                create_kernel: symbol(&library, "clCreateKernel")?,
                get_kernel_work_group_info: symbol(&library, "clGetKernelWorkGroupInfo")?,
                release_kernel: symbol(&library, "clReleaseKernel")?,
                release_program: symbol(&library, "clReleaseProgram")?,
                release_context: symbol(&library, "clReleaseContext")?,
                _library: library,
            })
        }
    }

    pub(super) fn platform_ids(&self) -> DriverResult<Vec<usize>> {
        let mut count = 0u32;
        // SAFETY: a null list with zero entries only asks for the count.
        check(unsafe { (self.get_platform_ids)(0, ptr::null_mut(), &mut count) })?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let mut ids: Vec<Handle> = vec![ptr::null_mut(); count as usize];
        // SAFETY: `ids` holds exactly `count` slots.
        check(unsafe { (self.get_platform_ids)(count, ids.as_mut_ptr(), ptr::null_mut()) })?;
        Ok(ids.into_iter().map(to_id).collect())
    }

    pub(super) fn device_ids(&self, platform: usize) -> DriverResult<Vec<usize>> {
        let platform = to_handle(platform);
        let mut count = 0u32;
        // SAFETY: as in `platform_ids`.
        check(unsafe {
            (self.get_device_ids)(platform, DEVICE_TYPE_ALL, 0, ptr::null_mut(), &mut count)
        })?;
        if count == 0 {
            return Err(ClStatus::DEVICE_NOT_FOUND);
        }
        let mut ids: Vec<Handle> = vec![ptr::null_mut(); count as usize];
        // SAFETY: `ids` holds exactly `count` slots.
        check(unsafe {
            (self.get_device_ids)(platform, DEVICE_TYPE_ALL, count, ids.as_mut_ptr(), ptr::null_mut())
        })?;
        Ok(ids.into_iter().map(to_id).collect())
    }

    pub(super) fn platform_info(
        &self,
        platform: usize,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        info(self.get_platform_info, to_handle(platform), param, dst)
    }

    pub(super) fn device_info(
        &self,
        device: usize,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        info(self.get_device_info, to_handle(device), param, dst)
    }

    pub(super) fn create_context(&self, device: usize) -> DriverResult<usize> {
        let devices = [to_handle(device)];
        let mut status = 0i32;
        // SAFETY: one valid device, no properties and no callback.
        let context = unsafe {
            (self.create_context)(
                ptr::null(),
                1,
                devices.as_ptr(),
                None,
                ptr::null_mut(),
                &mut status,
            )
        };
        check(status)?;
        Ok(to_id(context))
    }

    pub(super) fn create_program_with_source(
        &self,
        context: usize,
        source: &str,
    ) -> DriverResult<usize> {
        let strings = [source.as_ptr().cast::<c_char>()];
        let lengths = [source.len()];
        let mut status = 0i32;
        // SAFETY: explicit lengths are given, so the source need not be
        // NUL-terminated.
        let program = unsafe {
            (self.create_program_with_source)(
                to_handle(context),
                1,
                strings.as_ptr(),
                lengths.as_ptr(),
                &mut status,
            )
        };
        check(status)?;
        Ok(to_id(program))
    }

    pub(super) fn build_program(&self, program: usize, device: usize) -> DriverResult<()> {
        let devices = [to_handle(device)];
        // SAFETY: null options and no callback make the build synchronous.
        check(unsafe {
            (self.build_program)(
                to_handle(program),
                1,
                devices.as_ptr(),
                ptr::null(),
                None,
                ptr::null_mut(),
            )
        })
    }

    pub(super) fn program_build_info(
        &self,
        program: usize,
        device: usize,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        pair_info(
            self.get_program_build_info,
            to_handle(program),
            to_handle(device),
            param,
            dst,
        )
    }

    pub(super) fn create_kernel(&self, program: usize, name: &str) -> DriverResult<usize> {
        let name = CString::new(name).map_err(|_| ClStatus::INVALID_KERNEL_NAME)?;
        let mut status = 0i32;
        // SAFETY: `name` is NUL-terminated and outlives the call.
        let kernel = unsafe { (self.create_kernel)(to_handle(program), name.as_ptr(), &mut status) };
        check(status)?;
        Ok(to_id(kernel))
    }

    pub(super) fn kernel_work_group_info(
        &self,
        kernel: usize,
        device: usize,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        pair_info(
            self.get_kernel_work_group_info,
            to_handle(kernel),
            to_handle(device),
            param,
            dst,
        )
    }

    pub(super) fn release_kernel(&self, kernel: usize) {
        release(self.release_kernel, "kernel", kernel);
    }

    pub(super) fn release_program(&self, program: usize) {
        release(self.release_program, "program", program);
    }

    pub(super) fn release_context(&self, context: usize) {
        release(self.release_context, "context", context);
    }
}

/// # Safety
///
/// `T` must be the function pointer type matching the symbol's C signature.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, LoadError> {
    // SAFETY: forwarded to the caller.
    let symbol = unsafe { library.get::<T>(name.as_bytes()) }
        .map_err(|source| LoadError::MissingSymbol { symbol: name, source })?;
    Ok(*symbol)
}

fn check(status: i32) -> DriverResult<()> {
    if status == ClStatus::SUCCESS.0 {
        Ok(())
    } else {
        Err(ClStatus(status))
    }
}

fn to_handle(id: usize) -> Handle {
    id as Handle
}

fn to_id(handle: Handle) -> usize {
    handle as usize
}

fn destination(dst: Option<&mut [u8]>) -> (usize, *mut c_void) {
    dst.map_or((0, ptr::null_mut()), |buf| (buf.len(), buf.as_mut_ptr().cast()))
}

fn info(f: GetInfo, handle: Handle, param: u32, dst: Option<&mut [u8]>) -> DriverResult<usize> {
    let (len, value) = destination(dst);
    let mut written = 0usize;
    // SAFETY: `value` is null with `len == 0`, or points at `len` writable bytes.
    check(unsafe { f(handle, param, len, value, &mut written) })?;
    Ok(written)
}

fn pair_info(
    f: GetPairInfo,
    object: Handle,
    device: Handle,
    param: u32,
    dst: Option<&mut [u8]>,
) -> DriverResult<usize> {
    let (len, value) = destination(dst);
    let mut written = 0usize;
    // SAFETY: as in `info`.
    check(unsafe { f(object, device, param, len, value, &mut written) })?;
    Ok(written)
}

fn release(f: Release, kind: &'static str, id: usize) {
    // SAFETY: the handle came from the matching create call and is released once.
    let status = unsafe { f(to_handle(id)) };
    if status != 0 {
        debug!(kind, status, "release failed");
    }
}
