use crate::cl::*;
use crate::domain::{DeviceGates, ExecCapabilities, NamedFlags, QueueProperties, gate};

use super::{InfoTrait, Render, amd_topology, nv_compute_capability, row};

const CACHE_TYPES: &[(u32, &str)] = &[(0, "None"), (1, "Read-Only"), (2, "Read/Write")];
const LOCAL_MEM_TYPES: &[(u32, &str)] = &[(0, "None"), (1, "Local"), (2, "Global")];

/// General device properties. Feeds version, extensions and type.
pub static DEVICE_TRAITS: &[InfoTrait<DeviceGates>] = &[
    row!(CL_DEVICE_NAME, "Device Name", Render::Str),
    row!(CL_DEVICE_VENDOR, "Device Vendor", Render::Str),
    row!(CL_DEVICE_VENDOR_ID, "Device Vendor ID", Render::Hex),
    row!(CL_DEVICE_VERSION, "Device Version", Render::Version),
    row!(CL_DRIVER_VERSION, "Driver Version", Render::Str),
    row!(CL_DEVICE_OPENCL_C_VERSION, "Device OpenCL C Version", Render::Str, gate = gate::IS_11),
    InfoTrait {
        deferred: true,
        ..row!(CL_DEVICE_EXTENSIONS, "Device Extensions", Render::Extensions)
    },
    row!(CL_DEVICE_TYPE, "Device Type", Render::DeviceType),
    row!(CL_DEVICE_BOARD_NAME_AMD, "Device Board Name (AMD)", Render::Str, gate = gate::IS_GPU_AMD),
    row!(
        CL_DEVICE_TOPOLOGY_AMD,
        "Device Topology (AMD)",
        Render::Composite(amd_topology),
        gate = gate::IS_GPU_AMD
    ),
    row!(CL_DEVICE_PROFILE, "Device Profile", Render::Str),
    row!(CL_DEVICE_MAX_COMPUTE_UNITS, "Max compute units", Render::Uint),
    row!(
        CL_DEVICE_SIMD_PER_COMPUTE_UNIT_AMD,
        "SIMD per compute unit (AMD)",
        Render::Uint,
        gate = gate::IS_GPU_AMD
    ),
    row!(CL_DEVICE_SIMD_WIDTH_AMD, "SIMD width (AMD)", Render::Uint, gate = gate::IS_GPU_AMD),
    row!(
        CL_DEVICE_SIMD_INSTRUCTION_WIDTH_AMD,
        "SIMD instruction width (AMD)",
        Render::Uint,
        gate = gate::IS_GPU_AMD
    ),
    row!(CL_DEVICE_MAX_CLOCK_FREQUENCY, "Max clock frequency", Render::Uint, suffix = "MHz"),
    row!(
        CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV,
        "Compute Capability (NV)",
        Render::Composite(nv_compute_capability),
        gate = gate::HAS_NV
    ),
    row!(CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS, "Max work item dimensions", Render::Uint),
    row!(CL_DEVICE_MAX_WORK_ITEM_SIZES, "Max work item sizes", Render::SizeArray),
    row!(CL_DEVICE_MAX_WORK_GROUP_SIZE, "Max work group size", Render::Size),
    row!(
        CL_DEVICE_WAVEFRONT_WIDTH_AMD,
        "Wavefront width (AMD)",
        Render::Uint,
        gate = gate::IS_GPU_AMD
    ),
    row!(CL_DEVICE_WARP_SIZE_NV, "Warp size (NV)", Render::Uint, gate = gate::HAS_NV),
    row!(
        CL_DEVICE_REGISTERS_PER_BLOCK_NV,
        "Registers per block (NV)",
        Render::Uint,
        gate = gate::HAS_NV
    ),
    row!(
        CL_DEVICE_MAX_ATOMIC_COUNTERS_EXT,
        "Max atomic counters",
        Render::Uint,
        gate = gate::HAS_ATOMIC_COUNTERS
    ),
    row!(CL_DEVICE_ADDRESS_BITS, "Address bits", Render::Uint),
    row!(CL_DEVICE_ENDIAN_LITTLE, "Little-Endian", Render::Bool),
    row!(
        CL_DEVICE_PREFERRED_INTEROP_USER_SYNC,
        "Prefer user sync for interop",
        Render::Bool,
        gate = gate::IS_12
    ),
    row!(
        CL_DEVICE_PROFILING_TIMER_RESOLUTION,
        "Profiling timer resolution",
        Render::Size,
        suffix = "ns"
    ),
    row!(
        CL_DEVICE_PROFILING_TIMER_OFFSET_AMD,
        "Profiling timer offset since Epoch (AMD)",
        Render::Ulong,
        suffix = "ns",
        gate = gate::HAS_AMD
    ),
    row!(
        CL_DEVICE_KERNEL_EXEC_TIMEOUT_NV,
        "Kernel execution timeout (NV)",
        Render::Bool,
        gate = gate::HAS_NV
    ),
    row!(
        CL_DEVICE_GPU_OVERLAP_NV,
        "Concurrent copy and kernel execution (NV)",
        Render::Bool,
        gate = gate::HAS_NV
    ),
    row!(
        CL_DEVICE_ATTRIBUTE_ASYNC_ENGINE_COUNT_NV,
        "Number of async copy engines (NV)",
        Render::Uint,
        gate = gate::HAS_NV
    ),
];

/// Global, local, constant and image memory.
pub static MEMORY_TRAITS: &[InfoTrait<DeviceGates>] = &[
    row!(CL_DEVICE_GLOBAL_MEM_SIZE, "Global memory size", Render::Mem),
    row!(
        CL_DEVICE_GLOBAL_FREE_MEMORY_AMD,
        "Global free memory (AMD)",
        Render::MemKib,
        gate = gate::IS_GPU_AMD
    ),
    row!(
        CL_DEVICE_GLOBAL_MEM_CHANNELS_AMD,
        "Global memory channels (AMD)",
        Render::Uint,
        gate = gate::IS_GPU_AMD
    ),
    row!(
        CL_DEVICE_GLOBAL_MEM_CHANNEL_BANKS_AMD,
        "Global memory banks per channel (AMD)",
        Render::Uint,
        gate = gate::IS_GPU_AMD
    ),
    row!(
        CL_DEVICE_GLOBAL_MEM_CHANNEL_BANK_WIDTH_AMD,
        "Global memory bank width (AMD)",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_GPU_AMD
    ),
    row!(CL_DEVICE_ERROR_CORRECTION_SUPPORT, "Error Correction support", Render::Bool),
    row!(CL_DEVICE_MAX_MEM_ALLOC_SIZE, "Max memory allocation", Render::Mem),
    row!(
        CL_DEVICE_HOST_UNIFIED_MEMORY,
        "Unified memory for Host and Device",
        Render::Bool,
        gate = gate::IS_11
    ),
    row!(
        CL_DEVICE_INTEGRATED_MEMORY_NV,
        "Integrated memory (NV)",
        Render::Bool,
        gate = gate::HAS_NV
    ),
    row!(
        CL_DEVICE_MIN_DATA_TYPE_ALIGN_SIZE,
        "Minimum alignment for any data type",
        Render::Uint,
        suffix = "bytes"
    ),
    row!(CL_DEVICE_MEM_BASE_ADDR_ALIGN, "Alignment of base address", Render::Uint, suffix = "bits"),
    row!(
        CL_DEVICE_PREFERRED_PLATFORM_ATOMIC_ALIGNMENT,
        "Preferred alignment for atomics (SVM)",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_PREFERRED_GLOBAL_ATOMIC_ALIGNMENT,
        "Preferred alignment for atomics (global)",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_PREFERRED_LOCAL_ATOMIC_ALIGNMENT,
        "Preferred alignment for atomics (local)",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_MAX_GLOBAL_VARIABLE_SIZE,
        "Max size for global variable",
        Render::MemSize,
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_GLOBAL_VARIABLE_PREFERRED_TOTAL_SIZE,
        "Preferred total size of global vars",
        Render::MemSize,
        gate = gate::IS_20
    ),
    row!(CL_DEVICE_GLOBAL_MEM_CACHE_TYPE, "Global Memory cache type", Render::Enum(CACHE_TYPES)),
    row!(CL_DEVICE_GLOBAL_MEM_CACHE_SIZE, "Global Memory cache size", Render::Mem),
    row!(
        CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE,
        "Global Memory cache line size",
        Render::Uint,
        suffix = "bytes"
    ),
    row!(CL_DEVICE_IMAGE_SUPPORT, "Image support", Render::Bool),
    row!(CL_DEVICE_MAX_SAMPLERS, "Max number of samplers per kernel", Render::Uint),
    row!(
        CL_DEVICE_IMAGE_MAX_BUFFER_SIZE,
        "Max size for 1D images from buffer",
        Render::Size,
        suffix = "pixels",
        gate = gate::IS_12
    ),
    row!(
        CL_DEVICE_IMAGE_MAX_ARRAY_SIZE,
        "Max 1D or 2D image array size",
        Render::Size,
        suffix = "images",
        gate = gate::IS_12
    ),
    row!(
        CL_DEVICE_IMAGE_BASE_ADDRESS_ALIGNMENT,
        "Base address alignment for 2D image buffers",
        Render::Uint,
        suffix = "bytes",
        gate = gate::HAS_IMAGE2D_BUFFER
    ),
    row!(
        CL_DEVICE_IMAGE_PITCH_ALIGNMENT,
        "Pitch alignment for 2D image buffers",
        Render::Uint,
        suffix = "bytes",
        gate = gate::HAS_IMAGE2D_BUFFER
    ),
    row!(CL_DEVICE_IMAGE2D_MAX_WIDTH, "Max 2D image width", Render::Size, suffix = "pixels"),
    row!(CL_DEVICE_IMAGE2D_MAX_HEIGHT, "Max 2D image height", Render::Size, suffix = "pixels"),
    row!(CL_DEVICE_IMAGE3D_MAX_WIDTH, "Max 3D image width", Render::Size, suffix = "pixels"),
    row!(CL_DEVICE_IMAGE3D_MAX_HEIGHT, "Max 3D image height", Render::Size, suffix = "pixels"),
    row!(CL_DEVICE_IMAGE3D_MAX_DEPTH, "Max 3D image depth", Render::Size, suffix = "pixels"),
    row!(CL_DEVICE_MAX_READ_IMAGE_ARGS, "Max number of read image args", Render::Uint),
    row!(CL_DEVICE_MAX_WRITE_IMAGE_ARGS, "Max number of write image args", Render::Uint),
    row!(
        CL_DEVICE_MAX_READ_WRITE_IMAGE_ARGS,
        "Max number of read/write image args",
        Render::Uint,
        gate = gate::IS_20
    ),
    row!(CL_DEVICE_LOCAL_MEM_TYPE, "Local memory type", Render::Enum(LOCAL_MEM_TYPES)),
    row!(CL_DEVICE_LOCAL_MEM_SIZE, "Local memory size", Render::Mem),
    row!(
        CL_DEVICE_LOCAL_MEM_SIZE_PER_COMPUTE_UNIT_AMD,
        "Local memory size per CU (AMD)",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_GPU_AMD
    ),
    row!(
        CL_DEVICE_LOCAL_MEM_BANKS_AMD,
        "Local memory banks (AMD)",
        Render::Uint,
        gate = gate::IS_GPU_AMD
    ),
    row!(CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE, "Max constant buffer size", Render::Mem),
    row!(CL_DEVICE_MAX_CONSTANT_ARGS, "Max number of constant args", Render::Uint),
    row!(CL_DEVICE_MAX_PARAMETER_SIZE, "Max size of kernel argument", Render::MemSize),
];

/// Command queue and execution capabilities.
pub static QUEUE_TRAITS: &[InfoTrait<DeviceGates>] = &[
    row!(
        CL_DEVICE_QUEUE_PROPERTIES,
        "Queue properties (on host)",
        Render::Bitfield(QueueProperties::describe_bits)
    ),
    row!(
        CL_DEVICE_QUEUE_ON_DEVICE_PROPERTIES,
        "Queue properties (on device)",
        Render::Bitfield(QueueProperties::describe_bits),
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_QUEUE_ON_DEVICE_PREFERRED_SIZE,
        "Preferred size of device queue",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_QUEUE_ON_DEVICE_MAX_SIZE,
        "Max size of device queue",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_20
    ),
    row!(CL_DEVICE_MAX_ON_DEVICE_QUEUES, "Max queues on device", Render::Uint, gate = gate::IS_20),
    row!(
        CL_DEVICE_MAX_ON_DEVICE_EVENTS,
        "Max events on device",
        Render::Uint,
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_EXECUTION_CAPABILITIES,
        "Execution capabilities",
        Render::Bitfield(ExecCapabilities::describe_bits)
    ),
];

/// Availability, built-in kernels, SPIR and pipes.
pub static MISC_TRAITS: &[InfoTrait<DeviceGates>] = &[
    row!(CL_DEVICE_AVAILABLE, "Device Available", Render::Bool),
    row!(CL_DEVICE_COMPILER_AVAILABLE, "Compiler Available", Render::Bool),
    row!(CL_DEVICE_LINKER_AVAILABLE, "Linker Available", Render::Bool, gate = gate::IS_12),
    row!(
        CL_DEVICE_PRINTF_BUFFER_SIZE,
        "printf() buffer size",
        Render::MemSize,
        gate = gate::IS_12
    ),
    row!(CL_DEVICE_BUILT_IN_KERNELS, "Built-in kernels", Render::Str, gate = gate::IS_12),
    row!(CL_DEVICE_SPIR_VERSIONS, "SPIR versions", Render::Str, gate = gate::HAS_SPIR),
    row!(CL_DEVICE_MAX_PIPE_ARGS, "Max number of pipe args", Render::Uint, gate = gate::IS_20),
    row!(
        CL_DEVICE_PIPE_MAX_ACTIVE_RESERVATIONS,
        "Max active pipe reservations",
        Render::Uint,
        gate = gate::IS_20
    ),
    row!(
        CL_DEVICE_PIPE_MAX_PACKET_SIZE,
        "Max pipe packet size",
        Render::Uint,
        suffix = "bytes",
        gate = gate::IS_20
    ),
];
