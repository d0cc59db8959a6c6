//! Schema of training parameter documents
//!
//! A params document is the YAML (or JSON) file the training pipeline reads.
//! Only the `training` section matters for a learning rate preview:
//!
//! ```yaml
//! training:
//!   learning_rate: 0.001
//!   num_epochs: 30
//!   scheduler: StepLR
//!   scheduler_params:
//!     step_size: 10
//!     gamma: 0.1
//! ```
//!
//! Any value may instead be a parameter node carrying tuning metadata, e.g.
//! `learning_rate: {value: 0.001, type: float, low: 1.0e-5, high: 0.1, log: "true"}`.
//! The node's `value` is what the preview uses.

use crate::error::{Error, Result};
use crate::scheduler::{coerce_float, ScheduleRequest, SchedulerKind, SchedulerParams};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Complete params document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamsDocument {
    /// Training hyperparameters
    #[serde(default)]
    pub training: TrainingSection,

    /// Other sections (data, model, augmentation, ...), kept as-is
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// The `training` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_epochs: Option<Value>,

    /// Scheduler name, `null`, or a parameter node holding either
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_params: Option<Value>,

    /// Optimizer, batch size, weight decay, ... (not used by the preview)
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

static MISSING: Value = Value::Null;

/// Unwrap a parameter node to its `value`; plain values pass through.
///
/// A node without a `value` (only search bounds) unwraps to null.
pub fn node_value(node: &Value) -> &Value {
    if !is_param_node(node) {
        return node;
    }
    node.get("value").unwrap_or(&MISSING)
}

/// Whether `node` is a parameter node rather than a plain value
pub fn is_param_node(node: &Value) -> bool {
    matches!(node, Value::Object(map) if map.contains_key("value") || map.contains_key("type"))
}

impl TrainingSection {
    /// Base learning rate; NaN when missing or not a number.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate.as_ref().map(node_value).and_then(coerce_float).unwrap_or(f64::NAN)
    }

    /// Epoch count, truncated toward zero; 0 when missing or not a number.
    ///
    /// Counts beyond the `i64` range saturate and are rejected by the
    /// preview ceiling.
    pub fn num_epochs(&self) -> i64 {
        self.num_epochs
            .as_ref()
            .map(node_value)
            .and_then(coerce_float)
            .map_or(0, |epochs| epochs.trunc() as i64)
    }

    /// Configured scheduler kind; no scheduler when absent or null.
    pub fn scheduler_kind(&self) -> Result<SchedulerKind> {
        match self.scheduler.as_ref().map(node_value) {
            None | Some(Value::Null) => Ok(SchedulerKind::None),
            Some(Value::String(name)) => {
                name.parse().map_err(|_| Error::UnknownScheduler(name.clone()))
            }
            Some(other) => Err(Error::UnknownScheduler(other.to_string())),
        }
    }

    /// Scheduler parameters with parameter nodes unwrapped.
    ///
    /// A non-mapping `scheduler_params` counts as empty.
    pub fn scheduler_params(&self) -> SchedulerParams {
        match self.scheduler_params.as_ref().map(node_value) {
            Some(Value::Object(map)) => {
                map.iter().map(|(key, value)| (key.clone(), node_value(value).clone())).collect()
            }
            _ => SchedulerParams::new(),
        }
    }

    /// Build a fresh evaluation request from this section.
    ///
    /// Only an unrecognised scheduler name is an error. A missing or
    /// non-numeric learning rate or epoch count still produces a request,
    /// which then evaluates to an empty series.
    pub fn to_request(&self) -> Result<ScheduleRequest> {
        Ok(ScheduleRequest {
            base_learning_rate: self.learning_rate(),
            total_epochs: self.num_epochs(),
            kind: self.scheduler_kind()?,
            params: self.scheduler_params(),
        })
    }
}
