use tracing::debug;

use super::{ReportError, walk_rows};
use crate::domain::PlatformGates;
use crate::ports::{ClStatus, DeviceId, Line, PlatformId, ReportOptions, ReportSink, Section};
use crate::query::{QueryContext, Target};
use crate::traits::PLATFORM_TRAITS;

/// Platforms and their devices as found by the first pass.
///
/// All device handles live in one array; each platform owns the contiguous
/// slice given by its count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformInventory {
    platforms: Vec<PlatformId>,
    devices: Vec<DeviceId>,
    counts: Vec<usize>,
}

impl PlatformInventory {
    pub fn push(&mut self, platform: PlatformId, devices: Vec<DeviceId>) {
        self.platforms.push(platform);
        self.counts.push(devices.len());
        self.devices.extend(devices);
    }

    pub fn platforms(&self) -> &[PlatformId] {
        &self.platforms
    }

    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Devices of the platform at `index`; empty for an unknown index.
    pub fn devices_of(&self, index: usize) -> &[DeviceId] {
        let Some(&count) = self.counts.get(index) else {
            return &[];
        };
        let offset: usize = self.counts[..index].iter().sum();
        &self.devices[offset..offset + count]
    }
}

/// First pass: platform properties and device enumeration.
pub struct PlatformWalker<'a, 'd> {
    ctx: &'a mut QueryContext<'d>,
    sink: &'a mut dyn ReportSink,
    options: &'a ReportOptions,
}

impl<'a, 'd> PlatformWalker<'a, 'd> {
    pub fn new(
        ctx: &'a mut QueryContext<'d>,
        sink: &'a mut dyn ReportSink,
        options: &'a ReportOptions,
    ) -> Self {
        Self { ctx, sink, options }
    }

    pub fn run(self) -> Result<PlatformInventory, ReportError> {
        let driver = self.ctx.driver();
        let platforms = match driver.platform_ids() {
            Ok(platforms) => platforms,
            // The ICD loader's way of saying "zero platforms".
            Err(ClStatus::PLATFORM_NOT_FOUND_KHR) => Vec::new(),
            Err(status) => return Err(ReportError::PlatformIds(status)),
        };

        self.sink.line(Line::new(
            0,
            "#PLATFORMS",
            "Number of platforms",
            platforms.len().to_string(),
        ));

        let mut inventory = PlatformInventory::default();
        for (index, &platform) in platforms.iter().enumerate() {
            self.sink.section(Section::PlatformInfo { index });

            let mut gates = PlatformGates::new();
            walk_rows(
                self.ctx,
                self.sink,
                Target::Platform(platform),
                PLATFORM_TRAITS,
                &mut gates,
                self.options,
            )?;

            let devices = match driver.device_ids(platform) {
                Ok(devices) => devices,
                Err(ClStatus::DEVICE_NOT_FOUND) => Vec::new(),
                Err(status) => return Err(ReportError::DeviceIds { platform: index, status }),
            };
            debug!(platform = index, devices = devices.len(), "enumerated devices");
            inventory.push(platform, devices);
        }

        Ok(inventory)
    }
}
