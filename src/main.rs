use clap::Parser;
use std::path::Path;

use rehook::cli::Cli;
use rehook::config_discovery::load_config_with_discovery;
use rehook::{cli_utils, commands, logging, ReloadError, ReloadSettings};

fn main() {
    // Initialize structured logging
    logging::init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        cli_utils::report(&err.diagnostics());
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), ReloadError> {
    let file_config = load_config_with_discovery(cli.config.as_deref().map(Path::new))?;
    let settings = ReloadSettings::merge(cli, file_config);

    let report = commands::reload::run(&settings)?;
    tracing::debug!(
        file_count = report.cache_files.len(),
        envrc = %report.envrc.display(),
        "reload complete"
    );

    Ok(())
}
