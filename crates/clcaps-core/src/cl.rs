//! OpenCL parameter identifiers and enumerant values used by the trait tables.

// Platform info
pub const CL_PLATFORM_PROFILE: u32 = 0x0900;
pub const CL_PLATFORM_VERSION: u32 = 0x0901;
pub const CL_PLATFORM_NAME: u32 = 0x0902;
pub const CL_PLATFORM_VENDOR: u32 = 0x0903;
pub const CL_PLATFORM_EXTENSIONS: u32 = 0x0904;
pub const CL_PLATFORM_HOST_TIMER_RESOLUTION: u32 = 0x0905;
pub const CL_PLATFORM_ICD_SUFFIX_KHR: u32 = 0x0920;

// Device info, core
pub const CL_DEVICE_TYPE: u32 = 0x1000;
pub const CL_DEVICE_VENDOR_ID: u32 = 0x1001;
pub const CL_DEVICE_MAX_COMPUTE_UNITS: u32 = 0x1002;
pub const CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS: u32 = 0x1003;
pub const CL_DEVICE_MAX_WORK_GROUP_SIZE: u32 = 0x1004;
pub const CL_DEVICE_MAX_WORK_ITEM_SIZES: u32 = 0x1005;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR: u32 = 0x1006;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT: u32 = 0x1007;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT: u32 = 0x1008;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG: u32 = 0x1009;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT: u32 = 0x100A;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE: u32 = 0x100B;
pub const CL_DEVICE_MAX_CLOCK_FREQUENCY: u32 = 0x100C;
pub const CL_DEVICE_ADDRESS_BITS: u32 = 0x100D;
pub const CL_DEVICE_MAX_READ_IMAGE_ARGS: u32 = 0x100E;
pub const CL_DEVICE_MAX_WRITE_IMAGE_ARGS: u32 = 0x100F;
pub const CL_DEVICE_MAX_MEM_ALLOC_SIZE: u32 = 0x1010;
pub const CL_DEVICE_IMAGE2D_MAX_WIDTH: u32 = 0x1011;
pub const CL_DEVICE_IMAGE2D_MAX_HEIGHT: u32 = 0x1012;
pub const CL_DEVICE_IMAGE3D_MAX_WIDTH: u32 = 0x1013;
pub const CL_DEVICE_IMAGE3D_MAX_HEIGHT: u32 = 0x1014;
pub const CL_DEVICE_IMAGE3D_MAX_DEPTH: u32 = 0x1015;
pub const CL_DEVICE_IMAGE_SUPPORT: u32 = 0x1016;
pub const CL_DEVICE_MAX_PARAMETER_SIZE: u32 = 0x1017;
pub const CL_DEVICE_MAX_SAMPLERS: u32 = 0x1018;
pub const CL_DEVICE_MEM_BASE_ADDR_ALIGN: u32 = 0x1019;
pub const CL_DEVICE_MIN_DATA_TYPE_ALIGN_SIZE: u32 = 0x101A;
pub const CL_DEVICE_SINGLE_FP_CONFIG: u32 = 0x101B;
pub const CL_DEVICE_GLOBAL_MEM_CACHE_TYPE: u32 = 0x101C;
pub const CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE: u32 = 0x101D;
pub const CL_DEVICE_GLOBAL_MEM_CACHE_SIZE: u32 = 0x101E;
pub const CL_DEVICE_GLOBAL_MEM_SIZE: u32 = 0x101F;
pub const CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE: u32 = 0x1020;
pub const CL_DEVICE_MAX_CONSTANT_ARGS: u32 = 0x1021;
pub const CL_DEVICE_LOCAL_MEM_TYPE: u32 = 0x1022;
pub const CL_DEVICE_LOCAL_MEM_SIZE: u32 = 0x1023;
pub const CL_DEVICE_ERROR_CORRECTION_SUPPORT: u32 = 0x1024;
pub const CL_DEVICE_PROFILING_TIMER_RESOLUTION: u32 = 0x1025;
pub const CL_DEVICE_ENDIAN_LITTLE: u32 = 0x1026;
pub const CL_DEVICE_AVAILABLE: u32 = 0x1027;
pub const CL_DEVICE_COMPILER_AVAILABLE: u32 = 0x1028;
pub const CL_DEVICE_EXECUTION_CAPABILITIES: u32 = 0x1029;
pub const CL_DEVICE_QUEUE_PROPERTIES: u32 = 0x102A;
pub const CL_DEVICE_NAME: u32 = 0x102B;
pub const CL_DEVICE_VENDOR: u32 = 0x102C;
pub const CL_DRIVER_VERSION: u32 = 0x102D;
pub const CL_DEVICE_PROFILE: u32 = 0x102E;
pub const CL_DEVICE_VERSION: u32 = 0x102F;
pub const CL_DEVICE_EXTENSIONS: u32 = 0x1030;
pub const CL_DEVICE_DOUBLE_FP_CONFIG: u32 = 0x1032;
pub const CL_DEVICE_HALF_FP_CONFIG: u32 = 0x1033;
pub const CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF: u32 = 0x1034;
pub const CL_DEVICE_HOST_UNIFIED_MEMORY: u32 = 0x1035;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_CHAR: u32 = 0x1036;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_SHORT: u32 = 0x1037;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_INT: u32 = 0x1038;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_LONG: u32 = 0x1039;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_FLOAT: u32 = 0x103A;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE: u32 = 0x103B;
pub const CL_DEVICE_NATIVE_VECTOR_WIDTH_HALF: u32 = 0x103C;
pub const CL_DEVICE_OPENCL_C_VERSION: u32 = 0x103D;
pub const CL_DEVICE_LINKER_AVAILABLE: u32 = 0x103E;
pub const CL_DEVICE_BUILT_IN_KERNELS: u32 = 0x103F;
pub const CL_DEVICE_IMAGE_MAX_BUFFER_SIZE: u32 = 0x1040;
pub const CL_DEVICE_IMAGE_MAX_ARRAY_SIZE: u32 = 0x1041;
pub const CL_DEVICE_PARTITION_MAX_SUB_DEVICES: u32 = 0x1043;
pub const CL_DEVICE_PARTITION_PROPERTIES: u32 = 0x1044;
pub const CL_DEVICE_PARTITION_AFFINITY_DOMAIN: u32 = 0x1045;
pub const CL_DEVICE_PREFERRED_INTEROP_USER_SYNC: u32 = 0x1048;
pub const CL_DEVICE_PRINTF_BUFFER_SIZE: u32 = 0x1049;
pub const CL_DEVICE_IMAGE_PITCH_ALIGNMENT: u32 = 0x104A;
pub const CL_DEVICE_IMAGE_BASE_ADDRESS_ALIGNMENT: u32 = 0x104B;
pub const CL_DEVICE_MAX_READ_WRITE_IMAGE_ARGS: u32 = 0x104C;
pub const CL_DEVICE_MAX_GLOBAL_VARIABLE_SIZE: u32 = 0x104D;
pub const CL_DEVICE_QUEUE_ON_DEVICE_PROPERTIES: u32 = 0x104E;
pub const CL_DEVICE_QUEUE_ON_DEVICE_PREFERRED_SIZE: u32 = 0x104F;
pub const CL_DEVICE_QUEUE_ON_DEVICE_MAX_SIZE: u32 = 0x1050;
pub const CL_DEVICE_MAX_ON_DEVICE_QUEUES: u32 = 0x1051;
pub const CL_DEVICE_MAX_ON_DEVICE_EVENTS: u32 = 0x1052;
pub const CL_DEVICE_SVM_CAPABILITIES: u32 = 0x1053;
pub const CL_DEVICE_GLOBAL_VARIABLE_PREFERRED_TOTAL_SIZE: u32 = 0x1054;
pub const CL_DEVICE_MAX_PIPE_ARGS: u32 = 0x1055;
pub const CL_DEVICE_PIPE_MAX_ACTIVE_RESERVATIONS: u32 = 0x1056;
pub const CL_DEVICE_PIPE_MAX_PACKET_SIZE: u32 = 0x1057;
pub const CL_DEVICE_PREFERRED_PLATFORM_ATOMIC_ALIGNMENT: u32 = 0x1058;
pub const CL_DEVICE_PREFERRED_GLOBAL_ATOMIC_ALIGNMENT: u32 = 0x1059;
pub const CL_DEVICE_PREFERRED_LOCAL_ATOMIC_ALIGNMENT: u32 = 0x105A;

// cl_nv_device_attribute_query
pub const CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV: u32 = 0x4000;
pub const CL_DEVICE_COMPUTE_CAPABILITY_MINOR_NV: u32 = 0x4001;
pub const CL_DEVICE_REGISTERS_PER_BLOCK_NV: u32 = 0x4002;
pub const CL_DEVICE_WARP_SIZE_NV: u32 = 0x4003;
pub const CL_DEVICE_GPU_OVERLAP_NV: u32 = 0x4004;
pub const CL_DEVICE_KERNEL_EXEC_TIMEOUT_NV: u32 = 0x4005;
pub const CL_DEVICE_INTEGRATED_MEMORY_NV: u32 = 0x4006;
pub const CL_DEVICE_ATTRIBUTE_ASYNC_ENGINE_COUNT_NV: u32 = 0x4017;

// cl_ext_atomic_counters
pub const CL_DEVICE_MAX_ATOMIC_COUNTERS_EXT: u32 = 0x4032;

// cl_amd_device_attribute_query
pub const CL_DEVICE_PROFILING_TIMER_OFFSET_AMD: u32 = 0x4036;
pub const CL_DEVICE_TOPOLOGY_AMD: u32 = 0x4037;
pub const CL_DEVICE_BOARD_NAME_AMD: u32 = 0x4038;
pub const CL_DEVICE_GLOBAL_FREE_MEMORY_AMD: u32 = 0x4039;
pub const CL_DEVICE_SIMD_PER_COMPUTE_UNIT_AMD: u32 = 0x4040;
pub const CL_DEVICE_SIMD_WIDTH_AMD: u32 = 0x4041;
pub const CL_DEVICE_SIMD_INSTRUCTION_WIDTH_AMD: u32 = 0x4042;
pub const CL_DEVICE_WAVEFRONT_WIDTH_AMD: u32 = 0x4043;
pub const CL_DEVICE_GLOBAL_MEM_CHANNELS_AMD: u32 = 0x4044;
pub const CL_DEVICE_GLOBAL_MEM_CHANNEL_BANKS_AMD: u32 = 0x4045;
pub const CL_DEVICE_GLOBAL_MEM_CHANNEL_BANK_WIDTH_AMD: u32 = 0x4046;
pub const CL_DEVICE_LOCAL_MEM_SIZE_PER_COMPUTE_UNIT_AMD: u32 = 0x4047;
pub const CL_DEVICE_LOCAL_MEM_BANKS_AMD: u32 = 0x4048;
pub const CL_DEVICE_TOPOLOGY_TYPE_PCIE_AMD: u32 = 1;

// cl_ext_device_fission
pub const CL_DEVICE_PARTITION_TYPES_EXT: u32 = 0x4055;
pub const CL_DEVICE_AFFINITY_DOMAINS_EXT: u32 = 0x4056;

// cl_khr_spir
pub const CL_DEVICE_SPIR_VERSIONS: u32 = 0x40E0;

// Core partition property codes
pub const CL_DEVICE_PARTITION_EQUALLY: i64 = 0x1086;
pub const CL_DEVICE_PARTITION_BY_COUNTS: i64 = 0x1087;
pub const CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN: i64 = 0x1088;
pub const CL_DEVICE_PARTITION_BY_NAMES_INTEL: i64 = 0x4052;

// Extension partition property codes
pub const CL_DEVICE_PARTITION_EQUALLY_EXT: u64 = 0x4050;
pub const CL_DEVICE_PARTITION_BY_COUNTS_EXT: u64 = 0x4051;
pub const CL_DEVICE_PARTITION_BY_NAMES_EXT: u64 = 0x4052;
pub const CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN_EXT: u64 = 0x4053;

// Extension affinity domain codes (a list of values, not a bitfield)
pub const CL_AFFINITY_DOMAIN_L1_CACHE_EXT: u64 = 0x1;
pub const CL_AFFINITY_DOMAIN_L2_CACHE_EXT: u64 = 0x2;
pub const CL_AFFINITY_DOMAIN_L3_CACHE_EXT: u64 = 0x3;
pub const CL_AFFINITY_DOMAIN_L4_CACHE_EXT: u64 = 0x4;
pub const CL_AFFINITY_DOMAIN_NUMA_EXT: u64 = 0x10;
pub const CL_AFFINITY_DOMAIN_NEXT_FISSIONABLE_EXT: u64 = 0x100;

// Program / kernel info
pub const CL_PROGRAM_BUILD_LOG: u32 = 0x1183;
pub const CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE: u32 = 0x11B3;
