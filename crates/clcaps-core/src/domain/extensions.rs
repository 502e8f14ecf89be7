//! Extension registry: which optional capabilities a platform or device
//! advertises, and through which marker.

use std::fmt;

/// Longest marker kept in a registry entry. Longer markers are cut at the
/// nearest character boundary below this length.
pub const MARKER_DISPLAY_CAP: usize = 32;

/// Optional capability recognized from an extensions string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Half,
    Double,
    Amd,
    Nv,
    Svm,
    Fission,
    AtomicCounters,
    Image2dBuffer,
    Spir,
    Icd,
}

impl Capability {
    pub const ALL: [Self; 10] = [
        Self::Half,
        Self::Double,
        Self::Amd,
        Self::Nv,
        Self::Svm,
        Self::Fission,
        Self::AtomicCounters,
        Self::Image2dBuffer,
        Self::Spir,
        Self::Icd,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::Double => "double",
            Self::Amd => "amd",
            Self::Nv => "nv",
            Self::Svm => "svm",
            Self::Fission => "fission",
            Self::AtomicCounters => "atomic_counters",
            Self::Image2dBuffer => "image2d_buffer",
            Self::Spir => "spir",
            Self::Icd => "icd",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| cap.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Markers that reveal one capability, tried in order.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSet {
    pub capability: Capability,
    pub markers: &'static [&'static str],
}

const fn markers(capability: Capability, markers: &'static [&'static str]) -> MarkerSet {
    MarkerSet { capability, markers }
}

/// Capabilities recognized in device extension strings.
pub const DEVICE_MARKERS: &[MarkerSet] = &[
    markers(Capability::Half, &["cl_khr_fp16"]),
    markers(
        Capability::Double,
        &["cl_khr_fp64", "cl_amd_fp64", "cl_APPLE_fp64_basic_ops"],
    ),
    markers(Capability::Amd, &["cl_amd_device_attribute_query"]),
    markers(Capability::Nv, &["cl_nv_device_attribute_query"]),
    markers(Capability::Svm, &["cl_amd_svm"]),
    markers(Capability::Fission, &["cl_ext_device_fission"]),
    markers(
        Capability::AtomicCounters,
        &["cl_ext_atomic_counters_64", "cl_ext_atomic_counters_32"],
    ),
    markers(Capability::Image2dBuffer, &["cl_khr_image2d_from_buffer"]),
    markers(Capability::Spir, &["cl_khr_spir"]),
];

/// Capabilities recognized in platform extension strings.
pub const PLATFORM_MARKERS: &[MarkerSet] = &[markers(Capability::Icd, &["cl_khr_icd"])];

/// Cut `marker` to at most `cap` bytes without splitting a character.
pub fn truncate_marker(marker: &str, cap: usize) -> &str {
    if marker.len() <= cap {
        return marker;
    }
    let mut end = cap;
    while !marker.is_char_boundary(end) {
        end -= 1;
    }
    &marker[..end]
}

/// Which capabilities were found, and the marker that matched each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionRegistry {
    matched: [Option<&'static str>; Capability::ALL.len()],
}

impl ExtensionRegistry {
    /// Scan an extensions string. Matching is by substring; for each
    /// capability the first marker found wins.
    pub fn scan(extensions: &str, table: &[MarkerSet]) -> Self {
        let mut registry = Self::default();
        for set in table {
            if let Some(marker) = set.markers.iter().find(|m| extensions.contains(*m)) {
                registry.matched[set.capability.index()] =
                    Some(truncate_marker(marker, MARKER_DISPLAY_CAP));
            }
        }
        registry
    }

    pub const fn has(&self, capability: Capability) -> bool {
        self.matched[capability.index()].is_some()
    }

    /// The marker that revealed `capability`, if any.
    pub const fn matched(&self, capability: Capability) -> Option<&'static str> {
        self.matched[capability.index()]
    }

    /// Lookup by capability name. Unknown names are simply absent.
    pub fn has_named(&self, name: &str) -> bool {
        Capability::from_name(name).is_some_and(|cap| self.has(cap))
    }

    pub fn matched_named(&self, name: &str) -> Option<&'static str> {
        Capability::from_name(name).and_then(|cap| self.matched(cap))
    }

    /// Present capabilities with their markers.
    pub fn iter(&self) -> impl Iterator<Item = (Capability, &'static str)> + '_ {
        Capability::ALL
            .into_iter()
            .filter_map(|cap| self.matched(cap).map(|marker| (cap, marker)))
    }

    pub fn is_empty(&self) -> bool {
        self.matched.iter().all(Option::is_none)
    }
}
