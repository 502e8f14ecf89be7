//! Scripted driver and recording sink for tests.
//!
//! Available to this crate's unit tests and, through the `test-utils`
//! feature, to integration tests of downstream crates.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::ports::{
    ClDriver, ClStatus, ContextId, DeviceId, DriverResult, KernelId, Line, PlatformId, ProgramId,
    ReportSink, Section,
};

/// Step of the work-group probe at which a scripted failure happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    Context,
    Program,
    Build,
    Kernel,
    Query,
}

/// Scripted behaviour of the kernel-compile probe.
#[derive(Debug, Clone)]
pub struct ProbeScript {
    pub fail_at: Option<(ProbeStep, ClStatus)>,
    pub build_log: String,
    pub preferred_multiple: usize,
}

impl Default for ProbeScript {
    fn default() -> Self {
        Self {
            fail_at: None,
            build_log: String::new(),
            preferred_multiple: 64,
        }
    }
}

type InfoMap = HashMap<u32, Result<Vec<u8>, ClStatus>>;

#[derive(Debug, Default)]
struct FakePlatform {
    info: InfoMap,
    devices: Vec<DeviceId>,
    device_ids_error: Option<ClStatus>,
}

/// In-memory [`ClDriver`] whose answers are set up by the test.
///
/// Properties that were never set answer `CL_INVALID_VALUE`, like a driver
/// that does not know the parameter.
#[derive(Debug, Default)]
pub struct FakeDriver {
    platforms: Vec<FakePlatform>,
    devices: Vec<InfoMap>,
    platform_ids_error: Option<ClStatus>,
    probe: ProbeScript,
    claimed: HashMap<(DeviceId, u32), usize>,
    queried: RefCell<Vec<(DeviceId, u32)>>,
    released: RefCell<Vec<&'static str>>,
    sources: RefCell<Vec<String>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_platform(&mut self) -> PlatformId {
        self.platforms.push(FakePlatform::default());
        PlatformId(self.platforms.len() - 1)
    }

    pub fn add_device(&mut self, platform: PlatformId) -> DeviceId {
        self.devices.push(InfoMap::new());
        let device = DeviceId(self.devices.len() - 1);
        self.platforms[platform.0].devices.push(device);
        device
    }

    pub fn fail_platform_ids(&mut self, status: ClStatus) {
        self.platform_ids_error = Some(status);
    }

    pub fn fail_device_ids(&mut self, platform: PlatformId, status: ClStatus) {
        self.platforms[platform.0].device_ids_error = Some(status);
    }

    pub fn set_platform_str(&mut self, platform: PlatformId, param: u32, value: &str) {
        self.platforms[platform.0]
            .info
            .insert(param, Ok(c_string(value)));
    }

    pub fn set_platform_u64(&mut self, platform: PlatformId, param: u32, value: u64) {
        self.platforms[platform.0]
            .info
            .insert(param, Ok(value.to_ne_bytes().to_vec()));
    }

    pub fn set_device_bytes(&mut self, device: DeviceId, param: u32, bytes: Vec<u8>) {
        self.devices[device.0].insert(param, Ok(bytes));
    }

    pub fn set_device_str(&mut self, device: DeviceId, param: u32, value: &str) {
        self.set_device_bytes(device, param, c_string(value));
    }

    pub fn set_device_u32(&mut self, device: DeviceId, param: u32, value: u32) {
        self.set_device_bytes(device, param, value.to_ne_bytes().to_vec());
    }

    pub fn set_device_u64(&mut self, device: DeviceId, param: u32, value: u64) {
        self.set_device_bytes(device, param, value.to_ne_bytes().to_vec());
    }

    pub fn set_device_bool(&mut self, device: DeviceId, param: u32, value: bool) {
        self.set_device_u32(device, param, u32::from(value));
    }

    pub fn set_device_size(&mut self, device: DeviceId, param: u32, value: usize) {
        self.set_device_bytes(device, param, value.to_ne_bytes().to_vec());
    }

    pub fn set_device_sizes(&mut self, device: DeviceId, param: u32, values: &[usize]) {
        let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        self.set_device_bytes(device, param, bytes);
    }

    pub fn set_device_isizes(&mut self, device: DeviceId, param: u32, values: &[isize]) {
        let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        self.set_device_bytes(device, param, bytes);
    }

    pub fn set_device_u64s(&mut self, device: DeviceId, param: u32, values: &[u64]) {
        let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        self.set_device_bytes(device, param, bytes);
    }

    pub fn fail_device(&mut self, device: DeviceId, param: u32, status: ClStatus) {
        self.devices[device.0].insert(param, Err(status));
    }

    /// Make the size probe for `param` report `size` bytes, whatever the
    /// stored value is.
    pub fn claim_device_size(&mut self, device: DeviceId, param: u32, size: usize) {
        self.claimed.insert((device, param), size);
    }

    pub fn set_probe(&mut self, probe: ProbeScript) {
        self.probe = probe;
    }

    /// Whether the engine ever asked for `param` on `device`.
    pub fn was_queried(&self, device: DeviceId, param: u32) -> bool {
        self.queried.borrow().contains(&(device, param))
    }

    /// Release calls observed so far, in order.
    pub fn releases(&self) -> Vec<&'static str> {
        self.released.borrow().clone()
    }

    /// Program sources handed to the driver.
    pub fn sources(&self) -> Vec<String> {
        self.sources.borrow().clone()
    }

    fn probe_step(&self, step: ProbeStep) -> DriverResult<()> {
        match self.probe.fail_at {
            Some((failing, status)) if failing == step => Err(status),
            _ => Ok(()),
        }
    }
}

fn c_string(value: &str) -> Vec<u8> {
    let mut bytes = value.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

fn answer(value: Option<&Result<Vec<u8>, ClStatus>>, dst: Option<&mut [u8]>) -> DriverResult<usize> {
    let bytes = match value {
        Some(Ok(bytes)) => bytes,
        Some(Err(status)) => return Err(*status),
        None => return Err(ClStatus::INVALID_VALUE),
    };
    match dst {
        None => Ok(bytes.len()),
        Some(buf) if buf.len() < bytes.len() => Err(ClStatus::INVALID_VALUE),
        Some(buf) => {
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(bytes.len())
        }
    }
}

impl ClDriver for FakeDriver {
    fn platform_ids(&self) -> DriverResult<Vec<PlatformId>> {
        if let Some(status) = self.platform_ids_error {
            return Err(status);
        }
        Ok((0..self.platforms.len()).map(PlatformId).collect())
    }

    fn device_ids(&self, platform: PlatformId) -> DriverResult<Vec<DeviceId>> {
        let entry = self
            .platforms
            .get(platform.0)
            .ok_or(ClStatus::INVALID_PLATFORM)?;
        if let Some(status) = entry.device_ids_error {
            return Err(status);
        }
        if entry.devices.is_empty() {
            return Err(ClStatus::DEVICE_NOT_FOUND);
        }
        Ok(entry.devices.clone())
    }

    fn platform_info(
        &self,
        platform: PlatformId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        let entry = self
            .platforms
            .get(platform.0)
            .ok_or(ClStatus::INVALID_PLATFORM)?;
        answer(entry.info.get(&param), dst)
    }

    fn device_info(
        &self,
        device: DeviceId,
        param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        self.queried.borrow_mut().push((device, param));
        if let (Some(&size), None) = (self.claimed.get(&(device, param)), &dst) {
            return Ok(size);
        }
        let info = self.devices.get(device.0).ok_or(ClStatus::INVALID_DEVICE)?;
        answer(info.get(&param), dst)
    }

    fn create_context(&self, device: DeviceId) -> DriverResult<ContextId> {
        self.probe_step(ProbeStep::Context)?;
        Ok(ContextId(device.0))
    }

    fn create_program_with_source(
        &self,
        context: ContextId,
        source: &str,
    ) -> DriverResult<ProgramId> {
        self.probe_step(ProbeStep::Program)?;
        self.sources.borrow_mut().push(source.to_string());
        Ok(ProgramId(context.0))
    }

    fn build_program(&self, _program: ProgramId, _device: DeviceId) -> DriverResult<()> {
        self.probe_step(ProbeStep::Build)
    }

    fn program_build_info(
        &self,
        _program: ProgramId,
        _device: DeviceId,
        _param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        let log = Ok(c_string(&self.probe.build_log));
        answer(Some(&log), dst)
    }

    fn create_kernel(&self, program: ProgramId, _name: &str) -> DriverResult<KernelId> {
        self.probe_step(ProbeStep::Kernel)?;
        Ok(KernelId(program.0))
    }

    fn kernel_work_group_info(
        &self,
        _kernel: KernelId,
        _device: DeviceId,
        _param: u32,
        dst: Option<&mut [u8]>,
    ) -> DriverResult<usize> {
        self.probe_step(ProbeStep::Query)?;
        let value = Ok(self.probe.preferred_multiple.to_ne_bytes().to_vec());
        answer(Some(&value), dst)
    }

    fn release_kernel(&self, _kernel: KernelId) {
        self.released.borrow_mut().push("kernel");
    }

    fn release_program(&self, _program: ProgramId) {
        self.released.borrow_mut().push("program");
    }

    fn release_context(&self, _context: ContextId) {
        self.released.borrow_mut().push("context");
    }
}

/// Something the walkers sent to a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Section(Section),
    Line(Line),
    Diagnostic { marker: String, body: String },
}

/// [`ReportSink`] that keeps everything for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Recorded>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.events.iter().filter_map(|e| match e {
            Recorded::Line(line) => Some(line),
            _ => None,
        })
    }

    /// First line with the given symbolic name.
    pub fn find(&self, sname: &str) -> Option<&Line> {
        self.lines().find(|l| l.sname == sname)
    }

    /// Value of the first line with the given symbolic name.
    pub fn value(&self, sname: &str) -> Option<&str> {
        self.find(sname).map(|l| l.value.as_str())
    }

    /// Index of the first line with the given symbolic name.
    pub fn position(&self, sname: &str) -> Option<usize> {
        self.lines().position(|l| l.sname == sname)
    }

    pub fn diagnostics(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Recorded::Diagnostic { marker, body } => Some((marker.as_str(), body.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn sections(&self) -> Vec<Section> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Recorded::Section(section) => Some(*section),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn section(&mut self, section: Section) {
        self.events.push(Recorded::Section(section));
    }

    fn line(&mut self, line: Line) {
        self.events.push(Recorded::Line(line));
    }

    fn diagnostic(&mut self, marker: &str, body: &str) {
        self.events.push(Recorded::Diagnostic {
            marker: marker.to_string(),
            body: body.to_string(),
        });
    }
}
