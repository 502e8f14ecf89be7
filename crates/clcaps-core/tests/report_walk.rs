//! End-to-end tests of the report engine against the scripted driver.
//!
//! Each test builds a `FakeDriver` describing one or two devices, runs the
//! walkers into a `RecordingSink`, and checks what was (and was not) asked
//! of the driver and what reached the sink.

use clcaps_core::cl::*;
use clcaps_core::testing::{FakeDriver, ProbeScript, ProbeStep, RecordingSink};
use clcaps_core::walker::{BUILD_LOG_MARKER, DeviceWalker};
use clcaps_core::{
    Capability, ClStatus, DeviceGates, DeviceId, DeviceType, PlatformId, QueryContext, QueryError,
    ReportError, ReportOptions, Section, run_report,
};

// ── Fixtures ───────────────────────────────────────────────────────

const AMD_EXTENSIONS: &str = "cl_khr_fp64 cl_amd_fp64 cl_khr_global_int32_base_atomics \
    cl_amd_device_attribute_query cl_ext_atomic_counters_32 cl_khr_spir \
    cl_khr_image2d_from_buffer";

fn platform(driver: &mut FakeDriver, extensions: &str) -> PlatformId {
    let platform = driver.add_platform();
    driver.set_platform_str(platform, CL_PLATFORM_NAME, "Test Platform");
    driver.set_platform_str(platform, CL_PLATFORM_VENDOR, "Test Vendor");
    driver.set_platform_str(platform, CL_PLATFORM_VERSION, "OpenCL 1.2 test");
    driver.set_platform_str(platform, CL_PLATFORM_PROFILE, "FULL_PROFILE");
    driver.set_platform_str(platform, CL_PLATFORM_EXTENSIONS, extensions);
    platform
}

fn device(
    driver: &mut FakeDriver,
    platform: PlatformId,
    version: &str,
    device_type: DeviceType,
    extensions: &str,
) -> DeviceId {
    let device = driver.add_device(platform);
    driver.set_device_str(device, CL_DEVICE_NAME, "Test Device");
    driver.set_device_str(device, CL_DEVICE_VERSION, version);
    driver.set_device_str(device, CL_DEVICE_EXTENSIONS, extensions);
    driver.set_device_u64(device, CL_DEVICE_TYPE, device_type.bits());
    driver.set_device_u64(device, CL_DEVICE_GLOBAL_MEM_SIZE, 8_589_934_592);
    driver.set_device_u64(device, CL_DEVICE_SINGLE_FP_CONFIG, 0b0011_1110);
    driver.set_device_u64(device, CL_DEVICE_HALF_FP_CONFIG, 0b0000_0110);
    driver.set_device_u64(device, CL_DEVICE_DOUBLE_FP_CONFIG, 0b0011_1111);
    for (preferred, native) in [
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR, CL_DEVICE_NATIVE_VECTOR_WIDTH_CHAR),
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT, CL_DEVICE_NATIVE_VECTOR_WIDTH_SHORT),
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT, CL_DEVICE_NATIVE_VECTOR_WIDTH_INT),
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG, CL_DEVICE_NATIVE_VECTOR_WIDTH_LONG),
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF, CL_DEVICE_NATIVE_VECTOR_WIDTH_HALF),
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT, CL_DEVICE_NATIVE_VECTOR_WIDTH_FLOAT),
        (CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE, CL_DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE),
    ] {
        driver.set_device_u32(device, preferred, 4);
        driver.set_device_u32(device, native, 1);
    }
    device
}

fn walk(driver: &FakeDriver, device: DeviceId) -> (RecordingSink, DeviceGates) {
    walk_with(driver, device, &ReportOptions::default())
}

fn walk_with(
    driver: &FakeDriver,
    device: DeviceId,
    options: &ReportOptions,
) -> (RecordingSink, DeviceGates) {
    let mut sink = RecordingSink::new();
    let mut ctx = QueryContext::new(driver);
    let gates = DeviceWalker::new(&mut ctx, &mut sink, options)
        .walk_device(device)
        .expect("device walk should not fail");
    (sink, gates)
}

// ── Platform pass ──────────────────────────────────────────────────

#[test]
fn test_zero_platforms_reports_zero() {
    let driver = FakeDriver::new();
    let mut sink = RecordingSink::new();

    let summary = run_report(&driver, &mut sink, &ReportOptions::default()).unwrap();

    assert_eq!(summary.platforms, 0);
    assert_eq!(sink.value("#PLATFORMS"), Some("0"));
    assert!(sink.sections().is_empty());
}

#[test]
fn test_icd_loader_without_platforms_is_not_an_error() {
    let mut driver = FakeDriver::new();
    driver.fail_platform_ids(ClStatus::PLATFORM_NOT_FOUND_KHR);
    let mut sink = RecordingSink::new();

    let summary = run_report(&driver, &mut sink, &ReportOptions::default()).unwrap();
    assert_eq!(summary.platforms, 0);
}

#[test]
fn test_platform_enumeration_failure_is_fatal() {
    let mut driver = FakeDriver::new();
    driver.fail_platform_ids(ClStatus::OUT_OF_HOST_MEMORY);
    let mut sink = RecordingSink::new();

    let err = run_report(&driver, &mut sink, &ReportOptions::default()).unwrap_err();
    assert!(matches!(err, ReportError::PlatformIds(ClStatus::OUT_OF_HOST_MEMORY)));
    assert_eq!(err.status(), Some(ClStatus::OUT_OF_HOST_MEMORY));
}

#[test]
fn test_platform_without_devices_lists_zero() {
    let mut driver = FakeDriver::new();
    platform(&mut driver, "cl_khr_icd");
    let mut sink = RecordingSink::new();

    let summary = run_report(&driver, &mut sink, &ReportOptions::default()).unwrap();

    assert_eq!(summary.devices, 0);
    assert_eq!(sink.value("#DEVICES"), Some("0"));
    assert_eq!(
        sink.sections(),
        [Section::PlatformInfo { index: 0 }, Section::PlatformDevices { index: 0 }]
    );
}

#[test]
fn test_device_enumeration_failure_is_fatal() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    device(&mut driver, p, "OpenCL 1.2", DeviceType::CPU, "");
    driver.fail_device_ids(p, ClStatus::INVALID_PLATFORM);
    let mut sink = RecordingSink::new();

    let err = run_report(&driver, &mut sink, &ReportOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ReportError::DeviceIds { platform: 0, status: ClStatus::INVALID_PLATFORM }
    ));
}

#[test]
fn test_platform_rows_are_gated() {
    let mut driver = FakeDriver::new();
    let with_icd = platform(&mut driver, "cl_khr_icd");
    driver.set_platform_str(with_icd, CL_PLATFORM_ICD_SUFFIX_KHR, "AMD");
    platform(&mut driver, "cl_khr_fp64");
    let mut sink = RecordingSink::new();

    run_report(&driver, &mut sink, &ReportOptions::default()).unwrap();

    let suffixes: Vec<_> = sink
        .lines()
        .filter(|l| l.sname == "CL_PLATFORM_ICD_SUFFIX_KHR")
        .map(|l| l.value.clone())
        .collect();
    assert_eq!(suffixes, ["AMD"]);
    // Version 1.2 platforms have no host timer row.
    assert!(sink.find("CL_PLATFORM_HOST_TIMER_RESOLUTION").is_none());
}

#[test]
fn test_sections_follow_two_pass_order() {
    let mut driver = FakeDriver::new();
    let p0 = platform(&mut driver, "");
    device(&mut driver, p0, "OpenCL 1.2", DeviceType::CPU, "");
    device(&mut driver, p0, "OpenCL 1.2", DeviceType::GPU, "");
    let p1 = platform(&mut driver, "");
    device(&mut driver, p1, "OpenCL 2.0", DeviceType::GPU, "");
    let mut sink = RecordingSink::new();
    let options = ReportOptions { probe_work_group: false, ..ReportOptions::default() };

    let summary = run_report(&driver, &mut sink, &options).unwrap();

    assert_eq!(summary.devices, 3);
    assert_eq!(
        sink.sections(),
        [
            Section::PlatformInfo { index: 0 },
            Section::PlatformInfo { index: 1 },
            Section::PlatformDevices { index: 0 },
            Section::Device { platform: 0, index: 0 },
            Section::Device { platform: 0, index: 1 },
            Section::PlatformDevices { index: 1 },
            Section::Device { platform: 1, index: 0 },
        ]
    );
}

#[test]
fn test_sections_serialize_with_kind_tag() {
    let value = serde_json::to_value(Section::Device { platform: 0, index: 1 }).unwrap();
    assert_eq!(value, serde_json::json!({ "kind": "device", "platform": 0, "index": 1 }));
}

// ── Row iteration and gates ────────────────────────────────────────

#[test]
fn test_one_one_device_skips_newer_rows() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.1 Mesa", DeviceType::GPU, "");

    let (sink, gates) = walk(&driver, d);

    assert_eq!(gates.version(), 11);
    assert!(!gates.is_12());
    assert!(driver.was_queried(d, CL_DEVICE_OPENCL_C_VERSION));
    assert!(!driver.was_queried(d, CL_DEVICE_LINKER_AVAILABLE));
    assert!(!driver.was_queried(d, CL_DEVICE_IMAGE_MAX_BUFFER_SIZE));
    assert!(!driver.was_queried(d, CL_DEVICE_MAX_PIPE_ARGS));
    assert!(sink.find("CL_DEVICE_LINKER_AVAILABLE").is_none());
    assert!(sink.find("#PARTITION").is_none());
}

#[test]
fn test_unparseable_version_counts_as_one_zero() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL unknown", DeviceType::CPU, "");

    let (_, gates) = walk(&driver, d);

    assert_eq!(gates.version(), 10);
    assert!(!driver.was_queried(d, CL_DEVICE_OPENCL_C_VERSION));
}

#[test]
fn test_amd_rows_need_amd_gpu() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let gpu = device(&mut driver, p, "OpenCL 1.2 AMD-APP", DeviceType::GPU, AMD_EXTENSIONS);
    let mut topology = vec![0u8; 24];
    topology[..4].copy_from_slice(&CL_DEVICE_TOPOLOGY_TYPE_PCIE_AMD.to_ne_bytes());
    topology[21] = 0x01;
    driver.set_device_bytes(gpu, CL_DEVICE_TOPOLOGY_AMD, topology);
    driver.set_device_str(gpu, CL_DEVICE_BOARD_NAME_AMD, "Radeon Test");
    let cpu = device(&mut driver, p, "OpenCL 1.2 AMD-APP", DeviceType::CPU, AMD_EXTENSIONS);

    let (sink, gates) = walk(&driver, gpu);
    assert!(gates.is_gpu_amd());
    assert_eq!(sink.value("CL_DEVICE_BOARD_NAME_AMD"), Some("Radeon Test"));
    assert_eq!(sink.value("CL_DEVICE_TOPOLOGY_AMD"), Some("PCI-E, 01:00.0"));

    let (sink, gates) = walk(&driver, cpu);
    assert!(gates.has_amd() && !gates.is_gpu());
    assert!(sink.find("CL_DEVICE_BOARD_NAME_AMD").is_none());
    assert!(!driver.was_queried(cpu, CL_DEVICE_WAVEFRONT_WIDTH_AMD));
    assert!(driver.was_queried(cpu, CL_DEVICE_PROFILING_TIMER_OFFSET_AMD));
}

#[test]
fn test_gpu_without_amd_marker_skips_amd_rows() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "cl_khr_fp64 cl_khr_spir");
    driver.set_device_u32(d, CL_DEVICE_SIMD_WIDTH_AMD, 16);
    driver.set_device_u32(d, CL_DEVICE_WAVEFRONT_WIDTH_AMD, 64);

    let (sink, gates) = walk(&driver, d);

    assert!(gates.is_gpu() && !gates.has_amd());
    for param in [
        CL_DEVICE_BOARD_NAME_AMD,
        CL_DEVICE_SIMD_PER_COMPUTE_UNIT_AMD,
        CL_DEVICE_SIMD_WIDTH_AMD,
        CL_DEVICE_SIMD_INSTRUCTION_WIDTH_AMD,
        CL_DEVICE_WAVEFRONT_WIDTH_AMD,
    ] {
        assert!(!driver.was_queried(d, param), "queried {param:#x}");
    }
    assert!(sink.find("CL_DEVICE_SIMD_WIDTH_AMD").is_none());
    assert!(sink.find("CL_DEVICE_WAVEFRONT_WIDTH_AMD").is_none());
    assert!(sink.lines().all(|line| !line.pname.ends_with("(AMD)")));
}

#[test]
fn test_nv_rows_need_nv_extension() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(
        &mut driver,
        p,
        "OpenCL 1.2 CUDA",
        DeviceType::GPU,
        "cl_khr_fp64 cl_nv_device_attribute_query",
    );
    driver.set_device_u32(d, CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV, 7);
    driver.set_device_u32(d, CL_DEVICE_COMPUTE_CAPABILITY_MINOR_NV, 5);
    driver.set_device_u32(d, CL_DEVICE_WARP_SIZE_NV, 32);

    let (sink, _) = walk(&driver, d);

    assert_eq!(sink.value("CL_DEVICE_COMPUTE_CAPABILITY_MAJOR_NV"), Some("7.5"));
    assert_eq!(sink.value("CL_DEVICE_WARP_SIZE_NV"), Some("32"));
    assert!(sink.find("CL_DEVICE_BOARD_NAME_AMD").is_none());
}

#[test]
fn test_failed_row_shows_inline_diagnostic() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::CPU, "");
    driver.fail_device(d, CL_DEVICE_NAME, ClStatus::INVALID_DEVICE);

    let (sink, _) = walk(&driver, d);

    let line = sink.find("CL_DEVICE_NAME").unwrap();
    assert!(line.failed);
    assert!(line.value.starts_with('<') && line.value.ends_with('>'));
    assert!(
        line.value.contains("get size of CL_DEVICE_NAME : error -33"),
        "{}",
        line.value
    );
    // The walk carries on with the next row.
    assert!(sink.find("CL_DEVICE_VERSION").is_some());
}

#[test]
fn test_memory_rows_use_binary_units() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");

    let (sink, _) = walk(&driver, d);

    assert_eq!(sink.value("CL_DEVICE_GLOBAL_MEM_SIZE"), Some("8589934592 (8GiB)"));
}

// ── Extensions output ──────────────────────────────────────────────

#[test]
fn test_extensions_are_fetched_early_and_shown_last() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, AMD_EXTENSIONS);
    driver.set_device_bool(d, CL_DEVICE_AVAILABLE, true);

    let (sink, gates) = walk(&driver, d);

    assert!(gates.extensions().has(Capability::Double));
    let extensions = sink.position("CL_DEVICE_EXTENSIONS").unwrap();
    assert!(extensions > sink.position("CL_DEVICE_AVAILABLE").unwrap());
    assert!(extensions > sink.position("CL_DEVICE_TYPE").unwrap());
    assert_eq!(extensions, sink.lines().count() - 1);
    assert_eq!(sink.value("CL_DEVICE_EXTENSIONS"), Some(AMD_EXTENSIONS));
}

#[test]
fn test_failed_extensions_still_shown_last() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
    driver.fail_device(d, CL_DEVICE_EXTENSIONS, ClStatus::INVALID_VALUE);

    let (sink, gates) = walk(&driver, d);

    assert!(gates.extensions().is_empty());
    let line = sink.lines().last().unwrap();
    assert_eq!(line.sname, "CL_DEVICE_EXTENSIONS");
    assert!(line.failed);
}

// ── Composite sections ─────────────────────────────────────────────

#[test]
fn test_partition_empty_list_and_zero_code_differ() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let empty = device(&mut driver, p, "OpenCL 1.2", DeviceType::CPU, "");
    driver.set_device_bytes(empty, CL_DEVICE_PARTITION_PROPERTIES, Vec::new());
    let zero = device(&mut driver, p, "OpenCL 1.2", DeviceType::CPU, "");
    driver.set_device_isizes(zero, CL_DEVICE_PARTITION_PROPERTIES, &[0]);

    let (sink, _) = walk(&driver, empty);
    assert_eq!(sink.value("#PARTITION"), Some("(core)"));
    assert_eq!(sink.value("CL_DEVICE_PARTITION_PROPERTIES"), Some("none specified"));

    let (sink, _) = walk(&driver, zero);
    assert_eq!(sink.value("CL_DEVICE_PARTITION_PROPERTIES"), Some("none"));
}

#[test]
fn test_fission_only_device_shows_extension_partitioning() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.1", DeviceType::CPU, "cl_ext_device_fission");
    driver.set_device_u64s(d, CL_DEVICE_PARTITION_TYPES_EXT, &[0x4050, 0x4051]);
    driver.set_device_u64s(d, CL_DEVICE_AFFINITY_DOMAINS_EXT, &[0x10]);

    let (sink, _) = walk(&driver, d);

    assert_eq!(sink.value("#PARTITION"), Some("(cl_ext_device_fission)"));
    assert_eq!(sink.value("CL_DEVICE_PARTITION_TYPES_EXT"), Some("equally, by counts"));
    assert_eq!(sink.value("CL_DEVICE_AFFINITY_DOMAINS_EXT"), Some("NUMA"));
    assert!(!driver.was_queried(d, CL_DEVICE_PARTITION_MAX_SUB_DEVICES));
}

#[test]
fn test_device_without_partitioning_skips_section() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.1", DeviceType::CPU, "cl_khr_fp64");

    let (sink, gates) = walk(&driver, d);

    assert!(!gates.is_12() && !gates.has_fission());
    assert!(sink.find("#PARTITION").is_none());
    assert!(!driver.was_queried(d, CL_DEVICE_PARTITION_MAX_SUB_DEVICES));
    assert!(!driver.was_queried(d, CL_DEVICE_PARTITION_TYPES_EXT));
}

#[test]
fn test_fp16_device_shows_half_but_not_double() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.1", DeviceType::GPU, "cl_khr_fp16");

    let (sink, gates) = walk(&driver, d);

    assert!(gates.has_half());
    assert!(!gates.has_double_support());
    assert_eq!(sink.value("CL_DEVICE_HALF_FP_CONFIG"), Some("(cl_khr_fp16)"));
    assert!(!driver.was_queried(d, CL_DEVICE_DOUBLE_FP_CONFIG));
    assert_eq!(
        sink.value("CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF"),
        Some("4 / 1 (cl_khr_fp16)")
    );
    assert_eq!(
        sink.value("CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE"),
        Some("4 / 1 (n/a)")
    );
}

#[test]
fn test_two_zero_device_has_core_double_and_svm_without_markers() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 2.0", DeviceType::GPU, "");
    driver.set_device_u64(d, CL_DEVICE_SVM_CAPABILITIES, 0b0001);

    let (sink, gates) = walk(&driver, d);

    assert!(gates.is_20());
    assert!(!gates.extensions().has(Capability::Double));
    assert!(gates.has_double_support());
    assert_eq!(sink.value("CL_DEVICE_DOUBLE_FP_CONFIG"), Some("(core)"));
    assert_eq!(sink.value("CL_DEVICE_SVM_CAPABILITIES"), Some("(core)"));
    assert_eq!(sink.value("CL_DEVICE_SVM_COARSE_GRAIN_BUFFER"), Some("Yes"));
    assert_eq!(sink.value("CL_DEVICE_SVM_ATOMICS"), Some("No"));
}

#[test]
fn test_fp_flags_decode_as_yes_no() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::CPU, "");

    let (sink, _) = walk(&driver, d);

    assert_eq!(sink.value("CL_DEVICE_SINGLE_FP_CONFIG"), Some("(core)"));
    let single: Vec<_> = sink
        .lines()
        .skip_while(|l| l.sname != "CL_DEVICE_SINGLE_FP_CONFIG")
        .skip(1)
        .take_while(|l| l.depth == 2)
        .map(|l| (l.sname.as_str(), l.value.as_str()))
        .collect();
    assert_eq!(single.len(), 8);
    assert_eq!(single[0], ("CL_FP_DENORM", "No"));
    assert_eq!(single[1], ("CL_FP_INF_NAN", "Yes"));
    assert_eq!(single[7], ("CL_FP_CORRECTLY_ROUNDED_DIVIDE_SQRT", "No"));

    // Correctly-rounded divide/sqrt is a single-precision flag only.
    let double = sink
        .lines()
        .skip_while(|l| l.sname != "CL_DEVICE_DOUBLE_FP_CONFIG")
        .skip(1)
        .take_while(|l| l.depth == 2)
        .count();
    assert_eq!(double, 7);
}

// ── Work-group probe ───────────────────────────────────────────────

#[test]
fn test_probe_reports_multiple_and_releases_everything() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
    driver.set_probe(ProbeScript { preferred_multiple: 32, ..ProbeScript::default() });

    let (sink, _) = walk(&driver, d);

    assert_eq!(sink.value("CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE"), Some("32"));
    assert_eq!(driver.releases(), ["kernel", "program", "context"]);
    assert!(driver.sources()[0].contains("kernel void sum("));
}

#[test]
fn test_probe_build_failure_prints_log_and_releases() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
    driver.set_probe(ProbeScript {
        fail_at: Some((ProbeStep::Build, ClStatus::BUILD_PROGRAM_FAILURE)),
        build_log: "error: unknown type 'float'".to_string(),
        ..ProbeScript::default()
    });

    let (sink, _) = walk(&driver, d);

    assert_eq!(
        sink.diagnostics(),
        [(BUILD_LOG_MARKER, "error: unknown type 'float'")]
    );
    let line = sink.find("CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE").unwrap();
    assert!(line.failed);
    assert!(
        line.value
            .contains("build program for CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE : error -11"),
        "{}",
        line.value
    );
    assert_eq!(driver.releases(), ["program", "context"]);
}

#[test]
fn test_probe_context_failure_releases_nothing() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
    driver.set_probe(ProbeScript {
        fail_at: Some((ProbeStep::Context, ClStatus::OUT_OF_RESOURCES)),
        ..ProbeScript::default()
    });

    let (sink, _) = walk(&driver, d);

    assert!(sink.find("CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE").unwrap().failed);
    assert!(driver.releases().is_empty());
    assert!(sink.diagnostics().is_empty());
}

fn diagnostic_location(value: &str) -> (&str, u32) {
    let head = value.trim_start_matches('<').split(": ").next().unwrap();
    let (file, line) = head.rsplit_once(':').unwrap();
    (file, line.parse().unwrap())
}

#[test]
fn test_probe_failures_name_the_failing_call_site() {
    let failing = |step, status| {
        let mut driver = FakeDriver::new();
        let p = platform(&mut driver, "");
        let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
        driver.set_probe(ProbeScript { fail_at: Some((step, status)), ..ProbeScript::default() });
        let (sink, _) = walk(&driver, d);
        sink.value("CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE").unwrap().to_string()
    };

    let context = failing(ProbeStep::Context, ClStatus::OUT_OF_RESOURCES);
    let program = failing(ProbeStep::Program, ClStatus::OUT_OF_RESOURCES);
    let kernel = failing(ProbeStep::Kernel, ClStatus::INVALID_KERNEL_NAME);

    let (context_file, context_line) = diagnostic_location(&context);
    let (_, program_line) = diagnostic_location(&program);
    let (kernel_file, kernel_line) = diagnostic_location(&kernel);

    assert!(context_file.ends_with("probe.rs"), "{context}");
    assert_eq!(context_file, kernel_file);
    assert!(context_line < program_line && program_line < kernel_line);
}

#[test]
fn test_probe_can_be_disabled() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
    let options = ReportOptions { probe_work_group: false, ..ReportOptions::default() };

    let (sink, _) = walk_with(&driver, d, &options);

    assert!(sink.find("CL_KERNEL_PREFERRED_WORK_GROUP_SIZE_MULTIPLE").is_none());
    assert!(driver.sources().is_empty());
}

// ── Fatal errors ───────────────────────────────────────────────────

#[test]
fn test_buffer_exhaustion_aborts_the_run() {
    let mut driver = FakeDriver::new();
    let p = platform(&mut driver, "");
    let d = device(&mut driver, p, "OpenCL 1.2", DeviceType::GPU, "");
    driver.claim_device_size(d, CL_DEVICE_VENDOR, usize::MAX);
    let mut sink = RecordingSink::new();

    let err = run_report(&driver, &mut sink, &ReportOptions::default()).unwrap_err();

    assert!(matches!(err, ReportError::Query(QueryError::OutOfMemory { .. })));
    // Nothing after the failing row was reported.
    assert!(sink.find("CL_DEVICE_VENDOR").is_none());
    assert!(sink.find("CL_DEVICE_VERSION").is_none());
}
