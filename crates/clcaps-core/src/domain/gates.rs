//! Gate sets: facts accumulated while walking a platform or device that
//! decide whether later rows apply.
//!
//! A gate set starts empty and is fed by decoded row values (version,
//! extensions, device type). Gated rows must come after the rows feeding
//! what they read; [`Gate::needs`] records that dependency so the tables can
//! be checked.

use bitflags::bitflags;

use super::extensions::{Capability, ExtensionRegistry};
use super::flags::DeviceType;

bitflags! {
    /// Which facts a gate reads, or which facts a gate set has absorbed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Needs: u8 {
        const VERSION = 1 << 0;
        const EXTENSIONS = 1 << 1;
        const DEVICE_TYPE = 1 << 2;
    }
}

/// A fact decoded from a row, fed back into the gate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Version(u32),
    Extensions(ExtensionRegistry),
    DeviceType(DeviceType),
}

impl Decoded {
    pub const fn feeds(&self) -> Needs {
        match self {
            Self::Version(_) => Needs::VERSION,
            Self::Extensions(_) => Needs::EXTENSIONS,
            Self::DeviceType(_) => Needs::DEVICE_TYPE,
        }
    }
}

/// Gate state that rows can be checked against.
pub trait GateSet {
    /// Store a decoded fact.
    fn absorb(&mut self, decoded: Decoded);

    /// Facts absorbed so far.
    fn fed(&self) -> Needs;
}

/// A named predicate over a gate set.
pub struct Gate<G: 'static> {
    pub name: &'static str,
    pub needs: Needs,
    pub check: fn(&G) -> bool,
}

impl<G> Gate<G> {
    pub fn allows(&self, gates: &G) -> bool {
        (self.check)(gates)
    }
}

impl<G> Clone for Gate<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Gate<G> {}

impl<G> std::fmt::Debug for Gate<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate")
            .field("name", &self.name)
            .field("needs", &self.needs)
            .finish_non_exhaustive()
    }
}

/// Facts about one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceGates {
    version: u32,
    device_type: DeviceType,
    extensions: ExtensionRegistry,
    fed: Needs,
}

impl Default for DeviceGates {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceGates {
    /// All facts cleared: version 0, no type, no extensions.
    pub fn new() -> Self {
        Self {
            version: 0,
            device_type: DeviceType::empty(),
            extensions: ExtensionRegistry::default(),
            fed: Needs::empty(),
        }
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub const fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub const fn at_least(&self, ordinal: u32) -> bool {
        self.version >= ordinal
    }

    pub const fn is_11(&self) -> bool {
        self.at_least(11)
    }

    pub const fn is_12(&self) -> bool {
        self.at_least(12)
    }

    pub const fn is_20(&self) -> bool {
        self.at_least(20)
    }

    pub const fn is_gpu(&self) -> bool {
        self.device_type.contains(DeviceType::GPU)
    }

    pub const fn has_amd(&self) -> bool {
        self.extensions.has(Capability::Amd)
    }

    pub const fn has_nv(&self) -> bool {
        self.extensions.has(Capability::Nv)
    }

    pub const fn is_gpu_amd(&self) -> bool {
        self.is_gpu() && self.has_amd()
    }

    /// Core in 2.0, or through `cl_amd_svm`.
    pub const fn has_svm(&self) -> bool {
        self.is_20() || self.extensions.has(Capability::Svm)
    }

    /// Half precision is only ever an extension.
    pub const fn has_half(&self) -> bool {
        self.extensions.has(Capability::Half)
    }

    /// Double precision is an extension before 1.2 and optional core from 1.2.
    pub const fn has_double_support(&self) -> bool {
        self.extensions.has(Capability::Double) || self.is_12()
    }

    pub const fn has_fission(&self) -> bool {
        self.extensions.has(Capability::Fission)
    }

    pub const fn has_atomic_counters(&self) -> bool {
        self.extensions.has(Capability::AtomicCounters)
    }

    /// Image pitch properties: core in 2.0, or `cl_khr_image2d_from_buffer`.
    pub const fn has_image2d_buffer(&self) -> bool {
        self.is_20() || self.extensions.has(Capability::Image2dBuffer)
    }

    pub const fn has_spir(&self) -> bool {
        self.extensions.has(Capability::Spir)
    }
}

impl GateSet for DeviceGates {
    fn absorb(&mut self, decoded: Decoded) {
        self.fed |= decoded.feeds();
        match decoded {
            Decoded::Version(ordinal) => self.version = ordinal,
            Decoded::Extensions(registry) => self.extensions = registry,
            Decoded::DeviceType(device_type) => self.device_type = device_type,
        }
    }

    fn fed(&self) -> Needs {
        self.fed
    }
}

/// Facts about one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformGates {
    version: u32,
    extensions: ExtensionRegistry,
    fed: Needs,
}

impl Default for PlatformGates {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformGates {
    pub fn new() -> Self {
        Self {
            version: 0,
            extensions: ExtensionRegistry::default(),
            fed: Needs::empty(),
        }
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    pub const fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub const fn is_21(&self) -> bool {
        self.version >= 21
    }

    pub const fn has_icd(&self) -> bool {
        self.extensions.has(Capability::Icd)
    }
}

impl GateSet for PlatformGates {
    fn absorb(&mut self, decoded: Decoded) {
        self.fed |= decoded.feeds();
        match decoded {
            Decoded::Version(ordinal) => self.version = ordinal,
            Decoded::Extensions(registry) => self.extensions = registry,
            // Platforms have no type.
            Decoded::DeviceType(_) => {}
        }
    }

    fn fed(&self) -> Needs {
        self.fed
    }
}

/// Named gates used by the property tables.
pub mod gate {
    use super::{DeviceGates, Gate, Needs, PlatformGates};

    const fn device(
        name: &'static str,
        needs: Needs,
        check: fn(&DeviceGates) -> bool,
    ) -> Gate<DeviceGates> {
        Gate { name, needs, check }
    }

    pub const IS_11: Gate<DeviceGates> = device("is_11", Needs::VERSION, DeviceGates::is_11);
    pub const IS_12: Gate<DeviceGates> = device("is_12", Needs::VERSION, DeviceGates::is_12);
    pub const IS_20: Gate<DeviceGates> = device("is_20", Needs::VERSION, DeviceGates::is_20);
    pub const HAS_NV: Gate<DeviceGates> = device("has_nv", Needs::EXTENSIONS, DeviceGates::has_nv);
    pub const IS_GPU_AMD: Gate<DeviceGates> = device(
        "is_gpu_amd",
        Needs::EXTENSIONS.union(Needs::DEVICE_TYPE),
        DeviceGates::is_gpu_amd,
    );
    pub const HAS_AMD: Gate<DeviceGates> = device("has_amd", Needs::EXTENSIONS, DeviceGates::has_amd);
    pub const HAS_ATOMIC_COUNTERS: Gate<DeviceGates> = device(
        "has_atomic_counters",
        Needs::EXTENSIONS,
        DeviceGates::has_atomic_counters,
    );
    pub const HAS_IMAGE2D_BUFFER: Gate<DeviceGates> = device(
        "has_image2d_buffer",
        Needs::VERSION.union(Needs::EXTENSIONS),
        DeviceGates::has_image2d_buffer,
    );
    pub const HAS_SPIR: Gate<DeviceGates> = device("has_spir", Needs::EXTENSIONS, DeviceGates::has_spir);

    pub const PLATFORM_HAS_ICD: Gate<PlatformGates> = Gate {
        name: "has_icd",
        needs: Needs::EXTENSIONS,
        check: PlatformGates::has_icd,
    };
    pub const PLATFORM_IS_21: Gate<PlatformGates> = Gate {
        name: "is_21",
        needs: Needs::VERSION,
        check: PlatformGates::is_21,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extensions::{DEVICE_MARKERS, PLATFORM_MARKERS};

    fn device(version: u32, device_type: DeviceType, extensions: &str) -> DeviceGates {
        let mut gates = DeviceGates::new();
        gates.absorb(Decoded::Version(version));
        gates.absorb(Decoded::DeviceType(device_type));
        gates.absorb(Decoded::Extensions(ExtensionRegistry::scan(extensions, DEVICE_MARKERS)));
        gates
    }

    #[test]
    fn fresh_gates_allow_nothing_optional() {
        let gates = DeviceGates::new();
        assert_eq!(gates.version(), 0);
        assert!(!gates.is_11());
        assert!(!gates.is_gpu());
        assert!(!gates.has_double_support());
        assert!(!gates.has_svm());
        assert!(gates.fed().is_empty());
    }

    #[test]
    fn absorb_records_what_was_fed() {
        let mut gates = DeviceGates::new();
        gates.absorb(Decoded::Version(12));
        assert_eq!(gates.fed(), Needs::VERSION);
        gates.absorb(Decoded::DeviceType(DeviceType::CPU));
        assert_eq!(gates.fed(), Needs::VERSION | Needs::DEVICE_TYPE);
    }

    #[test]
    fn version_predicates_are_monotonic() {
        let gates = device(11, DeviceType::CPU, "");
        assert!(gates.is_11());
        assert!(!gates.is_12());
        assert!(!gates.is_20());

        let gates = device(20, DeviceType::CPU, "");
        assert!(gates.is_11() && gates.is_12() && gates.is_20());
    }

    #[test]
    fn double_support_is_extension_or_one_two() {
        assert!(device(11, DeviceType::GPU, "cl_khr_fp64").has_double_support());
        assert!(device(12, DeviceType::GPU, "").has_double_support());
        assert!(!device(11, DeviceType::GPU, "cl_khr_fp16").has_double_support());
    }

    #[test]
    fn half_is_never_core() {
        assert!(!device(20, DeviceType::GPU, "").has_half());
        assert!(device(11, DeviceType::GPU, "cl_khr_fp16").has_half());
    }

    #[test]
    fn svm_is_core_in_two_zero_or_amd_extension() {
        assert!(device(20, DeviceType::GPU, "").has_svm());
        assert!(device(12, DeviceType::GPU, "cl_amd_svm").has_svm());
        assert!(!device(12, DeviceType::GPU, "").has_svm());
    }

    #[test]
    fn amd_gpu_needs_both_type_and_extension() {
        let ext = "cl_amd_device_attribute_query";
        assert!(device(12, DeviceType::GPU, ext).is_gpu_amd());
        assert!(!device(12, DeviceType::CPU, ext).is_gpu_amd());
        assert!(!device(12, DeviceType::GPU, "").is_gpu_amd());
        assert!(device(12, DeviceType::CPU, ext).has_amd());
    }

    #[test]
    fn gates_evaluate_through_table_constants() {
        let gates = device(12, DeviceType::GPU, "cl_nv_device_attribute_query");
        assert!(gate::IS_12.allows(&gates));
        assert!(!gate::IS_20.allows(&gates));
        assert!(gate::HAS_NV.allows(&gates));
        assert!(!gate::IS_GPU_AMD.allows(&gates));
    }

    #[test]
    fn platform_gates_ignore_device_type() {
        let mut gates = PlatformGates::new();
        gates.absorb(Decoded::DeviceType(DeviceType::GPU));
        gates.absorb(Decoded::Version(21));
        gates.absorb(Decoded::Extensions(ExtensionRegistry::scan("cl_khr_icd", PLATFORM_MARKERS)));
        assert!(gates.is_21());
        assert!(gates.has_icd());
        assert!(gate::PLATFORM_HAS_ICD.allows(&gates));
        assert_eq!(gates.fed(), Needs::all());
    }
}
