//! Device partition summary: core (1.2) partitioning and the older
//! `cl_ext_device_fission` extension.

use tracing::debug;

use super::{ReportError, emit};
use crate::cl::*;
use crate::domain::{AffinityDomain, Capability, DeviceGates, NamedFlags};
use crate::ports::{DeviceId, Line, ReportOptions, ReportSink};
use crate::query::{QueryContext, Target};

const EMPTY_LIST: &str = "none specified";

pub(super) fn report(
    ctx: &mut QueryContext<'_>,
    sink: &mut dyn ReportSink,
    device: DeviceId,
    gates: &DeviceGates,
    options: &ReportOptions,
) -> Result<(), ReportError> {
    let core = gates.is_12();
    let fission = gates.has_fission();
    if !core && !fission {
        debug!(?device, "no partition support");
        return Ok(());
    }

    let target = Target::Device(device);
    let sep = options.separator.as_str();
    let marker = gates.extensions().matched(Capability::Fission);
    sink.line(Line::new(1, "#PARTITION", "Device Partition", header(core, marker)));

    if core {
        let max = ctx
            .scalar::<u32>(target, CL_DEVICE_PARTITION_MAX_SUB_DEVICES, "CL_DEVICE_PARTITION_MAX_SUB_DEVICES")
            .map(|n| n.to_string());
        emit(sink, 2, "CL_DEVICE_PARTITION_MAX_SUB_DEVICES", "Max number of sub-devices", max)?;

        let types = ctx
            .array::<isize>(target, CL_DEVICE_PARTITION_PROPERTIES, "CL_DEVICE_PARTITION_PROPERTIES")
            .map(|codes| describe_partition_types(&codes, sep));
        emit(sink, 2, "CL_DEVICE_PARTITION_PROPERTIES", "Supported partition types", types)?;

        let domains = ctx
            .scalar::<u64>(target, CL_DEVICE_PARTITION_AFFINITY_DOMAIN, "CL_DEVICE_PARTITION_AFFINITY_DOMAIN")
            .map(|bits| non_empty(AffinityDomain::describe_bits(bits, sep)));
        emit(sink, 2, "CL_DEVICE_PARTITION_AFFINITY_DOMAIN", "Supported affinity domains", domains)?;
    }

    if fission {
        let types = ctx
            .array::<u64>(target, CL_DEVICE_PARTITION_TYPES_EXT, "CL_DEVICE_PARTITION_TYPES_EXT")
            .map(|codes| describe_partition_types_ext(&codes, sep));
        emit(sink, 2, "CL_DEVICE_PARTITION_TYPES_EXT", "Supported partition types (ext)", types)?;

        let domains = ctx
            .array::<u64>(target, CL_DEVICE_AFFINITY_DOMAINS_EXT, "CL_DEVICE_AFFINITY_DOMAINS_EXT")
            .map(|codes| describe_affinity_domains_ext(&codes, sep));
        emit(sink, 2, "CL_DEVICE_AFFINITY_DOMAINS_EXT", "Supported affinity domains (ext)", domains)?;
    }

    Ok(())
}

fn header(core: bool, fission: Option<&str>) -> String {
    let sources: Vec<&str> = core.then_some("core").into_iter().chain(fission).collect();
    format!("({})", sources.join(", "))
}

fn non_empty(decoded: String) -> String {
    if decoded.is_empty() { "(n/a)".to_string() } else { decoded }
}

fn describe_list<T: Copy>(codes: &[T], sep: &str, name: impl Fn(T) -> String) -> String {
    if codes.is_empty() {
        return EMPTY_LIST.to_string();
    }
    codes.iter().map(|&code| name(code)).collect::<Vec<_>>().join(sep)
}

/// Core partition types (`cl_device_partition_property` list).
pub fn describe_partition_types(codes: &[isize], sep: &str) -> String {
    describe_list(codes, sep, |code| match code as i64 {
        0 => "none".to_string(),
        CL_DEVICE_PARTITION_EQUALLY => "equally".to_string(),
        CL_DEVICE_PARTITION_BY_COUNTS => "by counts".to_string(),
        CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN => "by affinity domain".to_string(),
        CL_DEVICE_PARTITION_BY_NAMES_INTEL => "by names (Intel)".to_string(),
        other => format!("by <unknown> ({other:#x})"),
    })
}

/// `cl_ext_device_fission` partition types.
pub fn describe_partition_types_ext(codes: &[u64], sep: &str) -> String {
    describe_list(codes, sep, |code| match code {
        0 => "none".to_string(),
        CL_DEVICE_PARTITION_EQUALLY_EXT => "equally".to_string(),
        CL_DEVICE_PARTITION_BY_COUNTS_EXT => "by counts".to_string(),
        CL_DEVICE_PARTITION_BY_NAMES_EXT => "by names".to_string(),
        CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN_EXT => "by affinity domain".to_string(),
        other => format!("by <unknown> ({other:#x})"),
    })
}

/// `cl_ext_device_fission` affinity domains. Unlike the core bitfield these
/// are plain codes.
pub fn describe_affinity_domains_ext(codes: &[u64], sep: &str) -> String {
    describe_list(codes, sep, |code| match code {
        0 => "none".to_string(),
        CL_AFFINITY_DOMAIN_L1_CACHE_EXT => "L1 cache".to_string(),
        CL_AFFINITY_DOMAIN_L2_CACHE_EXT => "L2 cache".to_string(),
        CL_AFFINITY_DOMAIN_L3_CACHE_EXT => "L3 cache".to_string(),
        CL_AFFINITY_DOMAIN_L4_CACHE_EXT => "L4 cache".to_string(),
        CL_AFFINITY_DOMAIN_NUMA_EXT => "NUMA".to_string(),
        CL_AFFINITY_DOMAIN_NEXT_FISSIONABLE_EXT => "next fissionable".to_string(),
        other => format!("<unknown> ({other:#x})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_every_source() {
        assert_eq!(header(true, None), "(core)");
        assert_eq!(header(false, Some("cl_ext_device_fission")), "(cl_ext_device_fission)");
        assert_eq!(
            header(true, Some("cl_ext_device_fission")),
            "(core, cl_ext_device_fission)"
        );
    }

    #[test]
    fn empty_list_differs_from_zero_code() {
        assert_eq!(describe_partition_types(&[], ", "), "none specified");
        assert_eq!(describe_partition_types(&[0], ", "), "none");
    }

    #[test]
    fn core_types_in_driver_order() {
        let codes = [0x1087, 0x1086, 0x1088];
        assert_eq!(
            describe_partition_types(&codes, ", "),
            "by counts, equally, by affinity domain"
        );
    }

    #[test]
    fn intel_and_unknown_core_types() {
        assert_eq!(describe_partition_types(&[0x4052], ", "), "by names (Intel)");
        assert_eq!(describe_partition_types(&[0x1234], ", "), "by <unknown> (0x1234)");
    }

    #[test]
    fn extension_types_and_domains() {
        assert_eq!(
            describe_partition_types_ext(&[0x4050, 0x4053], " | "),
            "equally | by affinity domain"
        );
        assert_eq!(
            describe_affinity_domains_ext(&[1, 0x10, 0x100], ", "),
            "L1 cache, NUMA, next fissionable"
        );
        assert_eq!(describe_affinity_domains_ext(&[], ", "), "none specified");
    }
}
