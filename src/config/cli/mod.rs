//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! lrpreview preview params.yaml
//! lrpreview preview params.yaml --format csv --epochs 50
//! lrpreview preview params.yaml --scheduler StepLR --param step_size=5 --param gamma=0.5
//! lrpreview params params.yaml --format json
//! lrpreview kinds
//! ```

mod core;
mod types;


pub use self::core::{parse_args, Cli, Command, KindsArgs, OverrideArgs, ParamsArgs, PreviewArgs};
pub use types::OutputFormat;
