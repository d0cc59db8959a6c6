//! Preview summary: endpoints, range and the caution note

use super::{ScheduleSeries, SchedulerKind};
use serde::Serialize;
use std::fmt;

/// Significant digits used when printing learning rates
pub const SUMMARY_PRECISION: usize = 4;

/// What a preview shows next to the curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSummary {
    pub kind: SchedulerKind,
    pub initial: f64,
    #[serde(rename = "final")]
    pub final_value: f64,
    pub min: f64,
    pub max: f64,
    /// Whether the curve matches the runtime scheduler exactly
    pub exact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl PreviewSummary {
    /// Summarize a series; `None` when there is nothing to show.
    pub fn from_series(kind: SchedulerKind, series: &ScheduleSeries) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;
        let (min, max) = series
            .values()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        Some(Self {
            kind,
            initial: first.value,
            final_value: last.value,
            min,
            max,
            exact: kind.is_exact(),
            note: kind.preview_note(),
        })
    }
}

impl fmt::Display for PreviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Initial: {} / Final: {}",
            format_significant(self.initial, SUMMARY_PRECISION),
            format_significant(self.final_value, SUMMARY_PRECISION)
        )
    }
}

/// Format `value` with `precision` significant digits.
///
/// Fixed notation is used for decimal exponents in `-6..precision`,
/// scientific notation (`1.000e-7`, `1.235e+5`) otherwise.
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    // Rust's exponent form is already rounded, so its exponent is the one to use.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    let precision_i32 = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -6 || exponent >= precision_i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(precision_i32 - 1 - exponent).unwrap_or(0);
        format!("{value:.decimals$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{evaluate, ScheduleRequest};

    #[test]
    fn test_format_significant_fixed() {
        assert_eq!(format_significant(1.0, 4), "1.000");
        assert_eq!(format_significant(0.001, 4), "0.001000");
        assert_eq!(format_significant(0.123456, 4), "0.1235");
        assert_eq!(format_significant(12.5, 4), "12.50");
        assert_eq!(format_significant(0.0, 4), "0.000");
        assert_eq!(format_significant(-0.5, 4), "-0.5000");
    }

    #[test]
    fn test_format_significant_scientific() {
        assert_eq!(format_significant(1e-7, 4), "1.000e-7");
        assert_eq!(format_significant(123456.0, 4), "1.235e+5");
        assert_eq!(format_significant(9999.6, 4), "1.000e+4");
    }

    #[test]
    fn test_summary_for_empty_series() {
        let series = evaluate(&ScheduleRequest::new(0.0, 10, SchedulerKind::None));
        assert!(PreviewSummary::from_series(SchedulerKind::None, &series).is_none());
    }

    #[test]
    fn test_summary_step_decay() {
        let request = ScheduleRequest::new(1.0, 30, SchedulerKind::StepDecay)
            .with_param("step_size", 10)
            .with_param("gamma", 0.1);
        let series = evaluate(&request);
        let summary = PreviewSummary::from_series(request.kind, &series).unwrap();

        assert_eq!(summary.initial, 1.0);
        assert_eq!(summary.max, 1.0);
        assert!((summary.final_value - 0.001).abs() < 1e-12);
        assert_eq!(summary.min, summary.final_value);
        assert!(summary.exact);
        assert!(summary.note.is_none());
        assert_eq!(summary.to_string(), "Initial: 1.000 / Final: 0.001000");
    }

    #[test]
    fn test_summary_plateau_carries_note() {
        let request = ScheduleRequest::new(0.1, 20, SchedulerKind::PlateauReduction);
        let series = evaluate(&request);
        let summary = PreviewSummary::from_series(request.kind, &series).unwrap();

        assert!(!summary.exact);
        let note = summary.note.unwrap();
        assert!(note.contains("ReduceLROnPlateau"));
        assert!(note.contains("approximate"));
    }

    #[test]
    fn test_summary_constant_carries_note() {
        let series = evaluate(&ScheduleRequest::new(0.01, 5, SchedulerKind::None));
        let summary = PreviewSummary::from_series(SchedulerKind::None, &series).unwrap();
        assert_eq!(summary.min, summary.max);
        assert!(summary.note.unwrap().contains("constant"));
    }

    #[test]
    fn test_summary_serializes_final_field() {
        let series = evaluate(&ScheduleRequest::new(0.5, 2, SchedulerKind::StepDecay));
        let summary = PreviewSummary::from_series(SchedulerKind::StepDecay, &series).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["final"], serde_json::json!(0.5));
        assert_eq!(value["kind"], serde_json::json!("StepLR"));
        assert!(value.get("note").is_none());
    }
}
