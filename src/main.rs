//! lrpreview CLI
//!
//! Learning rate schedule preview for training params files.
//!
//! # Usage
//!
//! ```bash
//! # Print the per-epoch learning rate
//! lrpreview preview params.yaml
//!
//! # Try other scheduler settings without editing the file
//! lrpreview preview params.yaml --scheduler StepLR --param step_size=5
//!
//! # Show effective scheduler parameters
//! lrpreview params params.yaml --format json
//!
//! # List scheduler kinds
//! lrpreview kinds
//! ```

use clap::Parser;
use lrpreview::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
