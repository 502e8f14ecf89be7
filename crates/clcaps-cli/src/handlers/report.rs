//! The report command: load the driver and write the capability report.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clcaps_core::{ClDriver, ReportSummary, run_report};
use clcaps_runtime::OpenClDriver;
use tracing::{debug, info};

use crate::bootstrap::{CliConfig, OutputFormat};
use crate::presentation::{JsonSink, TextSink};

/// Run the report against the system OpenCL library, writing to stdout.
pub fn execute(config: &CliConfig) -> Result<()> {
    let driver =
        OpenClDriver::load(&config.library).context("Failed to load the OpenCL library")?;
    debug!(library = %driver.library_path().display(), "Using OpenCL library");

    let summary = write_report(&driver, config, io::stdout().lock(), io::stderr().lock())?;
    info!(
        platforms = summary.platforms,
        devices = summary.devices,
        "Report complete"
    );
    Ok(())
}

/// Run the report against `driver`, writing the body to `out` and
/// diagnostics to `err`.
///
/// Text output is streamed, so a fatal error leaves the lines written so
/// far in place. JSON output is written only for a complete report.
pub fn write_report<W: Write, E: Write>(
    driver: &dyn ClDriver,
    config: &CliConfig,
    out: W,
    err: E,
) -> Result<ReportSummary> {
    let mode = config.options.label_mode;
    match config.format {
        OutputFormat::Text => {
            let mut sink = TextSink::new(out, err, mode);
            let result = run_report(driver, &mut sink, &config.options);
            sink.finish().context("Failed to write report")?;
            result.context("Report aborted")
        }
        OutputFormat::Json => {
            let mut sink = JsonSink::new(err, mode);
            let summary =
                run_report(driver, &mut sink, &config.options).context("Report aborted")?;
            sink.finish(out).context("Failed to write report")?;
            Ok(summary)
        }
    }
}
