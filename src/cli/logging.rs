//! Logging utilities for CLI output
//!
//! User-facing messages go through [`log`]; structured diagnostics use
//! `tracing` and only reach stderr when `--verbose` installs a subscriber.

use tracing::Level;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Maximum `tracing` level to emit, if any
    pub fn tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Verbose => Some(Level::DEBUG),
            LogLevel::Normal | LogLevel::Quiet => None,
        }
    }
}

/// Whether a message requiring `required` is shown at `level`
pub fn enabled(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if enabled(level, required) {
        println!("{msg}");
    }
}

/// Install a stderr `tracing` subscriber for verbose runs.
pub fn init_tracing(level: LogLevel) {
    if let Some(max_level) = level.tracing_level() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_writer(std::io::stderr)
            .finish();
        // A subscriber may already be installed (tests, embedding); keep it.
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
