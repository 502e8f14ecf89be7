use tracing::debug;

use super::{ReportError, emit, fp, memory, partition, probe, vector, walk_rows};
use crate::cl::CL_PLATFORM_NAME;
use crate::domain::DeviceGates;
use crate::ports::{DeviceId, Line, ReportOptions, ReportSink, Section};
use crate::query::{QueryContext, Target};
use crate::traits::{DEVICE_TRAITS, MISC_TRAITS, QUEUE_TRAITS};

use super::platform::PlatformInventory;

/// Stage of one device traversal. Each device visits every state once, in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    RowIteration,
    PartitionSummary,
    WorkgroupProbe,
    VectorWidths,
    FpConfig,
    MemorySections,
    QueueCaps,
    MiscAvailability,
    ExtensionsOutput,
    Done,
}

impl DeviceState {
    pub const fn next(self) -> Self {
        match self {
            Self::RowIteration => Self::PartitionSummary,
            Self::PartitionSummary => Self::WorkgroupProbe,
            Self::WorkgroupProbe => Self::VectorWidths,
            Self::VectorWidths => Self::FpConfig,
            Self::FpConfig => Self::MemorySections,
            Self::MemorySections => Self::QueueCaps,
            Self::QueueCaps => Self::MiscAvailability,
            Self::MiscAvailability => Self::ExtensionsOutput,
            Self::ExtensionsOutput | Self::Done => Self::Done,
        }
    }
}

/// Second pass: every platform's devices.
pub struct DeviceWalker<'a, 'd> {
    ctx: &'a mut QueryContext<'d>,
    sink: &'a mut dyn ReportSink,
    options: &'a ReportOptions,
}

impl<'a, 'd> DeviceWalker<'a, 'd> {
    pub fn new(
        ctx: &'a mut QueryContext<'d>,
        sink: &'a mut dyn ReportSink,
        options: &'a ReportOptions,
    ) -> Self {
        Self { ctx, sink, options }
    }

    pub fn run(mut self, inventory: &PlatformInventory) -> Result<(), ReportError> {
        for (index, &platform) in inventory.platforms().iter().enumerate() {
            self.sink.section(Section::PlatformDevices { index });

            let name = self
                .ctx
                .string(Target::Platform(platform), CL_PLATFORM_NAME, "CL_PLATFORM_NAME");
            emit(self.sink, 1, "CL_PLATFORM_NAME", "Platform Name", name)?;

            let devices = inventory.devices_of(index);
            self.sink.line(Line::new(
                0,
                "#DEVICES",
                "Number of devices",
                devices.len().to_string(),
            ));

            for (device_index, &device) in devices.iter().enumerate() {
                self.sink.section(Section::Device {
                    platform: index,
                    index: device_index,
                });
                self.walk_device(device)?;
            }
        }
        Ok(())
    }

    /// Report one device. Returns the gates it accumulated.
    pub fn walk_device(&mut self, device: DeviceId) -> Result<DeviceGates, ReportError> {
        let target = Target::Device(device);
        let mut gates = DeviceGates::new();
        let mut deferred: Vec<Line> = Vec::new();
        let mut state = DeviceState::RowIteration;

        loop {
            debug!(?device, ?state, "device traversal");
            match state {
                DeviceState::RowIteration => {
                    deferred.extend(walk_rows(
                        self.ctx,
                        self.sink,
                        target,
                        DEVICE_TRAITS,
                        &mut gates,
                        self.options,
                    )?);
                    let capabilities: Vec<&str> =
                        gates.extensions().iter().map(|(cap, _)| cap.name()).collect();
                    debug!(?device, version = gates.version(), ?capabilities, "device gates");
                }
                DeviceState::PartitionSummary => {
                    partition::report(self.ctx, self.sink, device, &gates, self.options)?;
                }
                DeviceState::WorkgroupProbe => {
                    probe::report(self.ctx, self.sink, device, self.options)?;
                }
                DeviceState::VectorWidths => vector::report(self.ctx, self.sink, device, &gates)?,
                DeviceState::FpConfig => fp::report(self.ctx, self.sink, device, &gates)?,
                DeviceState::MemorySections => deferred.extend(memory::report(
                    self.ctx,
                    self.sink,
                    device,
                    &mut gates,
                    self.options,
                )?),
                DeviceState::QueueCaps => deferred.extend(walk_rows(
                    self.ctx,
                    self.sink,
                    target,
                    QUEUE_TRAITS,
                    &mut gates,
                    self.options,
                )?),
                DeviceState::MiscAvailability => deferred.extend(walk_rows(
                    self.ctx,
                    self.sink,
                    target,
                    MISC_TRAITS,
                    &mut gates,
                    self.options,
                )?),
                DeviceState::ExtensionsOutput => {
                    for line in deferred.drain(..) {
                        self.sink.line(line);
                    }
                }
                DeviceState::Done => return Ok(gates),
            }
            state = state.next();
        }
    }
}
