//! CLI entry point - the composition root.

use clap::Parser;

use clcaps_cli::{Cli, CliConfig, bootstrap, handlers};

fn main() -> anyhow::Result<()> {
    // Load .env before parsing so it can supply CLCAPS_* and RUST_LOG
    bootstrap::load_env();

    let cli = Cli::parse();
    bootstrap::init_tracing(cli.verbose);

    let argv0 = std::env::args_os().next();
    let config = CliConfig::from_cli(&cli, argv0.as_deref());

    handlers::report::execute(&config)
}
