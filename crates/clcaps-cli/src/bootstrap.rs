//! CLI bootstrap: environment, logging, and the resolved run configuration.

use std::ffi::OsStr;
use std::path::Path;

use clcaps_core::{LabelMode, ReportOptions};
use clcaps_runtime::LibrarySource;
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a report run needs, resolved from flags, environment and
/// invocation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub options: ReportOptions,
    pub format: OutputFormat,
    pub library: LibrarySource,
}

impl CliConfig {
    /// Resolve the configuration. `argv0` is the name the binary was run as.
    pub fn from_cli(cli: &Cli, argv0: Option<&OsStr>) -> Self {
        let label_mode = if cli.raw || argv0.is_some_and(invoked_as_raw) {
            LabelMode::Raw
        } else {
            LabelMode::Human
        };

        let mut options = ReportOptions::for_mode(label_mode);
        if let Some(separator) = &cli.separator {
            options.separator.clone_from(separator);
        }
        options.probe_work_group = !cli.no_probe;

        Self {
            options,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            library: LibrarySource::from_override(cli.library.clone()),
        }
    }
}

/// True when the binary name contains `raw` (e.g. a `clcaps-raw` symlink).
pub fn invoked_as_raw(argv0: &OsStr) -> bool {
    Path::new(argv0)
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains("raw"))
}

/// Load a `.env` file from the working directory, if there is one.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Install the tracing subscriber. Logs go to stderr so stdout holds only
/// the report. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
