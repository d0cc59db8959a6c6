//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::ScheduleOverrides;
use crate::error::Result;
use crate::scheduler::SchedulerKind;

/// lrpreview: learning rate schedule preview for training configurations
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lrpreview")]
#[command(version)]
#[command(about = "Preview the learning rate schedule implied by a training params file")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the per-epoch learning rate series
    Preview(PreviewArgs),

    /// Print the effective scheduler parameters (defaults filled in)
    Params(ParamsArgs),

    /// List supported scheduler kinds and their parameters
    Kinds(KindsArgs),
}

/// Overrides shared by preview and params
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct OverrideArgs {
    /// Override the base learning rate
    #[arg(long)]
    pub lr: Option<f64>,

    /// Override the number of epochs
    #[arg(long, allow_negative_numbers = true)]
    pub epochs: Option<i64>,

    /// Override the scheduler (StepLR, CosineAnnealingLR, ReduceLROnPlateau, none)
    #[arg(long)]
    pub scheduler: Option<SchedulerKind>,

    /// Override a scheduler parameter (repeatable), e.g. --param gamma=0.5
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> Result<ScheduleOverrides> {
        ScheduleOverrides::new(self.lr, self.epochs, self.scheduler, &self.params)
    }
}

/// Arguments for the preview command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PreviewArgs {
    /// Path to params file (YAML or JSON)
    #[arg(value_name = "FILE")]
    pub config: PathBuf,

    /// Output format (text, json, yaml, csv)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the params command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ParamsArgs {
    /// Path to params file (YAML or JSON)
    #[arg(value_name = "FILE")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the kinds command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct KindsArgs {
    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
