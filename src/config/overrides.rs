//! Command-line overrides applied on top of a loaded configuration

use crate::error::{Error, Result};
use crate::scheduler::{ScheduleRequest, SchedulerKind};
use serde_json::Value;

/// Values that replace the ones read from the params document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleOverrides {
    pub learning_rate: Option<f64>,
    pub epochs: Option<i64>,
    pub scheduler: Option<SchedulerKind>,
    pub params: Vec<(String, Value)>,
}

impl ScheduleOverrides {
    /// Parse `key=value` parameter overrides alongside the scalar overrides.
    pub fn new(
        learning_rate: Option<f64>,
        epochs: Option<i64>,
        scheduler: Option<SchedulerKind>,
        params: &[String],
    ) -> Result<Self> {
        let params = params.iter().map(|raw| parse_param_override(raw)).collect::<Result<_>>()?;
        Ok(Self { learning_rate, epochs, scheduler, params })
    }

    pub fn is_empty(&self) -> bool {
        self.learning_rate.is_none()
            && self.epochs.is_none()
            && self.scheduler.is_none()
            && self.params.is_empty()
    }

    /// Produce the request to evaluate; `request` comes from the document and
    /// the document itself is left alone.
    pub fn apply(&self, mut request: ScheduleRequest) -> ScheduleRequest {
        if let Some(lr) = self.learning_rate {
            request.base_learning_rate = lr;
        }
        if let Some(epochs) = self.epochs {
            request.total_epochs = epochs;
        }
        if let Some(kind) = self.scheduler {
            request.kind = kind;
        }
        for (key, value) in &self.params {
            request.params.insert(key.clone(), value.clone());
        }
        request
    }
}

/// Parse a `key=value` scheduler parameter override.
///
/// Numeric values become numbers, everything else stays a string so the
/// usual coercion rules apply during resolution.
pub fn parse_param_override(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| Error::InvalidOverride(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidOverride(raw.to_string()));
    }

    let value = value.trim();
    let value = if let Ok(int) = value.parse::<i64>() {
        Value::from(int)
    } else {
        value
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| Value::from(value), Value::Number)
    };
    Ok((key.to_string(), value))
}
