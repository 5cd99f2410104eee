//! devcontainer-docs - generates markdown documentation for dev container
//! configuration types.

use std::process::ExitCode;

use clap::Parser;
use devcontainer_docs::{
    cli::{self, Cli, formatting::format_error},
    config::DocsConfig,
    tracing_config,
};
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match DocsConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {err}", format_error("Error"));
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}: failed to initialize logging: {err}", format_error("Error"));
            return ExitCode::FAILURE;
        }
    };
    debug!(?config, "Configuration resolved");

    match cli::run(cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("{}: {err}", format_error("Error"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(
    config: &DocsConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    match &config.logging.log_dir {
        Some(log_dir) => tracing_config::init_with_file(config.logging.level, log_dir).map(Some),
        None => tracing_config::init(config.logging.level).map(|()| None),
    }
}
