//! Bitfield types reported by the driver, with their display names.
//!
//! Every OpenCL bitfield is a 64-bit `cl_bitfield`. The name tables are in
//! declaration (bit) order, which is the order the decoder emits.

use bitflags::bitflags;
use bitflags::Flags;

use crate::format::decode_bitmask;

/// Symbolic and display name of one flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagName<F: 'static> {
    pub flag: F,
    pub sname: &'static str,
    pub pname: &'static str,
}

const fn named<F>(flag: F, sname: &'static str, pname: &'static str) -> FlagName<F> {
    FlagName { flag, sname, pname }
}

/// A bitfield type with a display-name table.
pub trait NamedFlags: Flags<Bits = u64> + Copy + 'static {
    const NAMES: &'static [FlagName<Self>];

    /// Names of the set flags joined by `sep`.
    fn describe(self, sep: &str) -> String {
        decode_bitmask(self, Self::NAMES, sep)
    }

    /// Same as [`describe`](Self::describe) for a raw driver value.
    fn describe_bits(bits: u64, sep: &str) -> String {
        Self::from_bits_retain(bits).describe(sep)
    }
}

bitflags! {
    /// `cl_device_type`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceType: u64 {
        const DEFAULT = 1 << 0;
        const CPU = 1 << 1;
        const GPU = 1 << 2;
        const ACCELERATOR = 1 << 3;
        const CUSTOM = 1 << 4;
    }
}

impl NamedFlags for DeviceType {
    const NAMES: &'static [FlagName<Self>] = &[
        named(Self::DEFAULT, "CL_DEVICE_TYPE_DEFAULT", "Default"),
        named(Self::CPU, "CL_DEVICE_TYPE_CPU", "CPU"),
        named(Self::GPU, "CL_DEVICE_TYPE_GPU", "GPU"),
        named(Self::ACCELERATOR, "CL_DEVICE_TYPE_ACCELERATOR", "Accelerator"),
        named(Self::CUSTOM, "CL_DEVICE_TYPE_CUSTOM", "Custom"),
    ];
}

bitflags! {
    /// `cl_device_fp_config`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FpConfig: u64 {
        const DENORM = 1 << 0;
        const INF_NAN = 1 << 1;
        const ROUND_TO_NEAREST = 1 << 2;
        const ROUND_TO_ZERO = 1 << 3;
        const ROUND_TO_INF = 1 << 4;
        const FMA = 1 << 5;
        const SOFT_FLOAT = 1 << 6;
        const CORRECTLY_ROUNDED_DIVIDE_SQRT = 1 << 7;
    }
}

impl NamedFlags for FpConfig {
    const NAMES: &'static [FlagName<Self>] = &[
        named(Self::DENORM, "CL_FP_DENORM", "Denormals"),
        named(Self::INF_NAN, "CL_FP_INF_NAN", "Infinity and NANs"),
        named(Self::ROUND_TO_NEAREST, "CL_FP_ROUND_TO_NEAREST", "Round to nearest"),
        named(Self::ROUND_TO_ZERO, "CL_FP_ROUND_TO_ZERO", "Round to zero"),
        named(Self::ROUND_TO_INF, "CL_FP_ROUND_TO_INF", "Round to infinity"),
        named(Self::FMA, "CL_FP_FMA", "IEEE754-2008 fused multiply-add"),
        named(Self::SOFT_FLOAT, "CL_FP_SOFT_FLOAT", "Support is emulated in software"),
        named(
            Self::CORRECTLY_ROUNDED_DIVIDE_SQRT,
            "CL_FP_CORRECTLY_ROUNDED_DIVIDE_SQRT",
            "Correctly-rounded divide and sqrt operations",
        ),
    ];
}

bitflags! {
    /// `cl_device_svm_capabilities`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SvmCapabilities: u64 {
        const COARSE_GRAIN_BUFFER = 1 << 0;
        const FINE_GRAIN_BUFFER = 1 << 1;
        const FINE_GRAIN_SYSTEM = 1 << 2;
        const ATOMICS = 1 << 3;
    }
}

impl NamedFlags for SvmCapabilities {
    const NAMES: &'static [FlagName<Self>] = &[
        named(
            Self::COARSE_GRAIN_BUFFER,
            "CL_DEVICE_SVM_COARSE_GRAIN_BUFFER",
            "Coarse-grained buffer sharing",
        ),
        named(
            Self::FINE_GRAIN_BUFFER,
            "CL_DEVICE_SVM_FINE_GRAIN_BUFFER",
            "Fine-grained buffer sharing",
        ),
        named(
            Self::FINE_GRAIN_SYSTEM,
            "CL_DEVICE_SVM_FINE_GRAIN_SYSTEM",
            "Fine-grained system sharing",
        ),
        named(Self::ATOMICS, "CL_DEVICE_SVM_ATOMICS", "Atomics"),
    ];
}

bitflags! {
    /// `cl_device_affinity_domain`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AffinityDomain: u64 {
        const NUMA = 1 << 0;
        const L4_CACHE = 1 << 1;
        const L3_CACHE = 1 << 2;
        const L2_CACHE = 1 << 3;
        const L1_CACHE = 1 << 4;
        const NEXT_PARTITIONABLE = 1 << 5;
    }
}

impl NamedFlags for AffinityDomain {
    const NAMES: &'static [FlagName<Self>] = &[
        named(Self::NUMA, "CL_DEVICE_AFFINITY_DOMAIN_NUMA", "NUMA"),
        named(Self::L4_CACHE, "CL_DEVICE_AFFINITY_DOMAIN_L4_CACHE", "L4 cache"),
        named(Self::L3_CACHE, "CL_DEVICE_AFFINITY_DOMAIN_L3_CACHE", "L3 cache"),
        named(Self::L2_CACHE, "CL_DEVICE_AFFINITY_DOMAIN_L2_CACHE", "L2 cache"),
        named(Self::L1_CACHE, "CL_DEVICE_AFFINITY_DOMAIN_L1_CACHE", "L1 cache"),
        named(
            Self::NEXT_PARTITIONABLE,
            "CL_DEVICE_AFFINITY_DOMAIN_NEXT_PARTITIONABLE",
            "next partitionable",
        ),
    ];
}

bitflags! {
    /// `cl_command_queue_properties`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueueProperties: u64 {
        const OUT_OF_ORDER_EXEC_MODE = 1 << 0;
        const PROFILING = 1 << 1;
        const ON_DEVICE = 1 << 2;
        const ON_DEVICE_DEFAULT = 1 << 3;
    }
}

impl NamedFlags for QueueProperties {
    const NAMES: &'static [FlagName<Self>] = &[
        named(
            Self::OUT_OF_ORDER_EXEC_MODE,
            "CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE",
            "Out-of-order execution",
        ),
        named(Self::PROFILING, "CL_QUEUE_PROFILING_ENABLE", "Profiling"),
        named(Self::ON_DEVICE, "CL_QUEUE_ON_DEVICE", "On device"),
        named(Self::ON_DEVICE_DEFAULT, "CL_QUEUE_ON_DEVICE_DEFAULT", "Default on device"),
    ];
}

bitflags! {
    /// `cl_device_exec_capabilities`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExecCapabilities: u64 {
        const KERNEL = 1 << 0;
        const NATIVE_KERNEL = 1 << 1;
    }
}

impl NamedFlags for ExecCapabilities {
    const NAMES: &'static [FlagName<Self>] = &[
        named(Self::KERNEL, "CL_EXEC_KERNEL", "Run OpenCL kernels"),
        named(Self::NATIVE_KERNEL, "CL_EXEC_NATIVE_KERNEL", "Run native kernels"),
    ];
}
