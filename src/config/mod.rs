//! Params documents, command-line overrides and CLI argument types

pub mod cli;
mod loader;
mod overrides;
mod schema;

pub use cli::{
    parse_args, Cli, Command, KindsArgs, OutputFormat, OverrideArgs, ParamsArgs, PreviewArgs,
};
pub use loader::{load_params, parse_params};
pub use overrides::{parse_param_override, ScheduleOverrides};
pub use schema::{is_param_node, node_value, ParamsDocument, TrainingSection};
