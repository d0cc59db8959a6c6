//! Params command implementation
//!
//! Shows the parameter set the preview actually uses, defaults filled in,
//! without writing anything back to the params file.

use super::load_request;
use crate::cli::logging::{enabled, log};
use crate::cli::LogLevel;
use crate::config::{OutputFormat, ParamsArgs};
use crate::scheduler::{EffectiveParams, ScheduleRequest};

/// Format the effective parameters as text
pub fn format_effective_params(request: &ScheduleRequest, params: &EffectiveParams) -> String {
    let mut lines = vec![
        format!("Scheduler: {}", request.kind),
        format!("Learning rate: {}", request.base_learning_rate),
        format!("Epochs: {}", request.total_epochs),
    ];
    let entries = params.entries();
    if !entries.is_empty() {
        lines.push("Parameters:".to_string());
        lines.extend(entries.into_iter().map(|(name, value)| format!("  {name}: {value}")));
    }
    if let Some(note) = request.kind.preview_note() {
        lines.push(format!("Note: {note}"));
    }
    lines.join("\n")
}

pub fn run_params(args: ParamsArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading params: {}", args.config.display()),
    );

    let request = load_request(&args.config, &args.overrides)?;
    let params = request.effective_params();
    if !enabled(level, LogLevel::Normal) {
        return Ok(());
    }

    match args.format {
        OutputFormat::Text | OutputFormat::Csv => {
            println!("{}", format_effective_params(&request, &params));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&params)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&params)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::SchedulerKind;

    #[test]
    fn test_format_cosine_defaults() {
        let request = ScheduleRequest::new(0.01, 40, SchedulerKind::CosineAnnealing);
        let text = format_effective_params(&request, &request.effective_params());
        assert!(text.contains("Scheduler: CosineAnnealingLR"));
        assert!(text.contains("T_max: 40"));
        assert!(text.contains("eta_min: 0"));
        assert!(!text.contains("Note:"));
    }

    #[test]
    fn test_format_constant_has_note_and_no_parameters() {
        let request = ScheduleRequest::new(0.01, 40, SchedulerKind::None);
        let text = format_effective_params(&request, &request.effective_params());
        assert!(!text.contains("Parameters:"));
        assert!(text.contains("Note: No scheduler configured"));
    }
}
