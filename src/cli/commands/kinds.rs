//! Kinds command implementation

use crate::cli::logging::enabled;
use crate::cli::LogLevel;
use crate::config::{KindsArgs, OutputFormat};
use crate::scheduler::{param_specs, ParamSpec, SchedulerKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct KindInfo {
    name: &'static str,
    exact: bool,
    params: &'static [ParamSpec],
}

fn kind_infos() -> Vec<KindInfo> {
    SchedulerKind::ALL
        .iter()
        .map(|kind| KindInfo {
            name: kind.config_name(),
            exact: kind.is_exact(),
            params: param_specs(*kind),
        })
        .collect()
}

/// Format every scheduler kind with its parameters and defaults
pub fn format_kinds() -> String {
    let mut lines = Vec::new();
    for info in kind_infos() {
        let suffix = if info.exact { "" } else { " (approximate preview)" };
        lines.push(format!("{}{suffix}", info.name));
        for spec in info.params {
            lines.push(format!(
                "  {} (default {}): {}",
                spec.name, spec.default, spec.description
            ));
        }
    }
    lines.join("\n")
}

pub fn run_kinds(args: KindsArgs, level: LogLevel) -> Result<(), String> {
    if !enabled(level, LogLevel::Normal) {
        return Ok(());
    }
    match args.format {
        OutputFormat::Text | OutputFormat::Csv => println!("{}", format_kinds()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&kind_infos())
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&kind_infos())
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }
    Ok(())
}
