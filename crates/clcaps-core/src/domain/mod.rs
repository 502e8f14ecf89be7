//! Domain types: bitfields, version ordinals, extensions and gates.

pub mod extensions;
pub mod flags;
pub mod gates;
pub mod version;

pub use extensions::{
    Capability, DEVICE_MARKERS, ExtensionRegistry, MARKER_DISPLAY_CAP, MarkerSet, PLATFORM_MARKERS,
};
pub use flags::{
    AffinityDomain, DeviceType, ExecCapabilities, FlagName, FpConfig, NamedFlags, QueueProperties,
    SvmCapabilities,
};
pub use gates::{Decoded, DeviceGates, Gate, GateSet, Needs, PlatformGates, gate};
pub use version::{DEFAULT_ORDINAL, VERSION_PREFIX_LEN, parse_ordinal};
