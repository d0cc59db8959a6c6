//! Preview command implementation

use super::load_request;
use crate::cli::logging::{enabled, log};
use crate::cli::LogLevel;
use crate::config::{OutputFormat, PreviewArgs};
use crate::scheduler::{
    evaluate, format_significant, EffectiveParams, PreviewSummary, ScheduleRequest,
    ScheduleSeries, SchedulerKind,
};
use serde::Serialize;

/// Message shown when the configuration cannot be previewed
pub const INSUFFICIENT_INFO: &str =
    "Not enough learning rate information to preview (need learning_rate > 0 and num_epochs between 1 and 100000).";

/// Everything the preview command reports
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub scheduler: SchedulerKind,
    pub base_learning_rate: f64,
    pub total_epochs: i64,
    pub effective_params: EffectiveParams,
    pub series: ScheduleSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PreviewSummary>,
}

impl PreviewReport {
    pub fn new(request: &ScheduleRequest) -> Self {
        let series = evaluate(request);
        let summary = PreviewSummary::from_series(request.kind, &series);
        Self {
            scheduler: request.kind,
            base_learning_rate: request.base_learning_rate,
            total_epochs: request.total_epochs,
            effective_params: request.effective_params(),
            series,
            summary,
        }
    }
}

/// Format the effective scheduler parameters as a string
pub fn format_scheduler_info(report: &PreviewReport) -> String {
    let mut lines = vec![format!("  Scheduler: {}", report.scheduler)];
    for (name, value) in report.effective_params.entries() {
        lines.push(format!("    {name}: {value}"));
    }
    lines.join("\n")
}

/// Format the series as an epoch / learning rate table
pub fn format_series_table(series: &ScheduleSeries) -> String {
    let width = series.last().map_or(1, |p| p.epoch.to_string().len()).max("epoch".len());
    let mut lines = vec![format!("{:>width$}  learning_rate", "epoch")];
    for point in series {
        lines.push(format!(
            "{:>width$}  {}",
            point.epoch,
            format_significant(point.value, 6)
        ));
    }
    lines.join("\n")
}

/// Format the series as CSV with a header row
pub fn format_series_csv(series: &ScheduleSeries) -> String {
    let mut out = String::from("epoch,learning_rate\n");
    for point in series {
        out.push_str(&format!("{},{}\n", point.epoch, point.value));
    }
    out
}

/// Format the summary line and note, if any
pub fn format_summary(summary: &PreviewSummary) -> String {
    match summary.note {
        Some(note) => format!("{summary}\nNote: {note}"),
        None => summary.to_string(),
    }
}

/// Rendered preview: stdout text plus an optional stderr notice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewOutput {
    pub stdout: String,
    pub notice: Option<&'static str>,
}

/// Render `report` in `format`; nothing at all when `level` is quiet.
///
/// An unpreviewable configuration is reported in place of the table for
/// text output. CSV keeps its header-only body on stdout and carries the
/// message as a notice for stderr.
pub fn render_preview(
    report: &PreviewReport,
    format: OutputFormat,
    level: LogLevel,
) -> Result<PreviewOutput, String> {
    if !enabled(level, LogLevel::Normal) {
        return Ok(PreviewOutput::default());
    }

    let output = match format {
        OutputFormat::Text => {
            let Some(summary) = &report.summary else {
                return Ok(PreviewOutput { stdout: format!("{INSUFFICIENT_INFO}\n"), notice: None });
            };
            let mut stdout = String::new();
            if enabled(level, LogLevel::Verbose) {
                stdout.push_str(&format!("{}\n\n", format_scheduler_info(report)));
            }
            stdout.push_str(&format!(
                "{}\n\n{}\n",
                format_series_table(&report.series),
                format_summary(summary)
            ));
            PreviewOutput { stdout, notice: None }
        }
        OutputFormat::Csv => PreviewOutput {
            stdout: format_series_csv(&report.series),
            notice: report.series.is_empty().then_some(INSUFFICIENT_INFO),
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            PreviewOutput { stdout: format!("{json}\n"), notice: None }
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            PreviewOutput { stdout: yaml, notice: None }
        }
    };

    Ok(output)
}

pub fn run_preview(args: PreviewArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading params: {}", args.config.display()),
    );

    let request = load_request(&args.config, &args.overrides)?;
    let report = PreviewReport::new(&request);
    tracing::debug!(
        scheduler = %report.scheduler,
        points = report.series.len(),
        "Evaluated learning rate schedule"
    );

    let output = render_preview(&report, args.format, level)?;
    print!("{}", output.stdout);
    if let Some(notice) = output.notice {
        eprintln!("{notice}");
    }

    Ok(())
}
