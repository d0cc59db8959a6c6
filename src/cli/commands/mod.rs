//! CLI command implementations

mod kinds;
mod params;
mod preview;

use crate::cli::LogLevel;
use crate::config::{load_params, Cli, Command, OverrideArgs};
use crate::scheduler::ScheduleRequest;
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Preview(args) => preview::run_preview(args, log_level),
        Command::Params(args) => params::run_params(args, log_level),
        Command::Kinds(args) => kinds::run_kinds(args, log_level),
    }
}

/// Load the params file and apply command-line overrides.
fn load_request(config: &Path, overrides: &OverrideArgs) -> Result<ScheduleRequest, String> {
    let document = load_params(config).map_err(|e| format!("Config error: {e}"))?;
    let overrides = overrides.to_overrides().map_err(|e| format!("Override error: {e}"))?;
    let request = document.training.to_request().map_err(|e| format!("Config error: {e}"))?;

    if !overrides.is_empty() {
        tracing::debug!(?overrides, "Applying command-line overrides");
    }
    Ok(overrides.apply(request))
}
