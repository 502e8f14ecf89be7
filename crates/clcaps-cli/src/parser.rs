//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

/// Report the capabilities of every OpenCL platform and device.
#[derive(Debug, Parser)]
#[command(name = "clcaps")]
#[command(about = "Report OpenCL platform and device capabilities")]
#[command(version)]
pub struct Cli {
    /// Label lines with symbolic API names instead of display names
    #[arg(long, env = "CLCAPS_RAW")]
    pub raw: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to the OpenCL ICD loader library
    #[arg(long, env = "CLCAPS_OPENCL_LIBRARY", value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Separator used when joining flags and lists
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Skip compiling a probe kernel for the preferred work-group multiple
    #[arg(long = "no-probe")]
    pub no_probe: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
