//! Schedule evaluation: request in, per-epoch series out

use super::params::{EffectiveParams, SchedulerParams};
use super::SchedulerKind;
use serde::{Deserialize, Serialize};

/// Largest epoch count a preview will sample; longer runs are not previewed.
pub const MAX_PREVIEW_EPOCHS: i64 = 100_000;

/// Everything needed to preview one schedule.
///
/// Built fresh from the current configuration for every evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Learning rate at epoch 0
    pub base_learning_rate: f64,

    /// Last epoch of the preview (inclusive)
    pub total_epochs: i64,

    /// Decay rule
    #[serde(default)]
    pub kind: SchedulerKind,

    /// Loose scheduler parameters, resolved by [`EffectiveParams::resolve`]
    #[serde(default)]
    pub params: SchedulerParams,
}

impl ScheduleRequest {
    pub fn new(base_learning_rate: f64, total_epochs: i64, kind: SchedulerKind) -> Self {
        Self { base_learning_rate, total_epochs, kind, params: SchedulerParams::new() }
    }

    /// Add a scheduler parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Whether the base rate and epoch count allow a preview at all
    pub fn is_previewable(&self) -> bool {
        self.base_learning_rate.is_finite()
            && self.base_learning_rate > 0.0
            && (1..=MAX_PREVIEW_EPOCHS).contains(&self.total_epochs)
    }

    /// Parameters the evaluation will use, defaults filled in
    pub fn effective_params(&self) -> EffectiveParams {
        EffectiveParams::resolve(self.kind, &self.params, self.total_epochs)
    }
}

/// One sample of the preview curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulePoint {
    pub epoch: u64,
    pub value: f64,
}

/// Samples for epochs `0..=total_epochs`, ascending; empty when the request
/// cannot be previewed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleSeries {
    points: Vec<SchedulePoint>,
}

impl ScheduleSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SchedulePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchedulePoint> {
        self.points.iter()
    }

    /// Value at `epoch`, if sampled
    pub fn value_at(&self, epoch: u64) -> Option<f64> {
        usize::try_from(epoch).ok().and_then(|i| self.points.get(i)).map(|p| p.value)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn first(&self) -> Option<&SchedulePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SchedulePoint> {
        self.points.last()
    }
}

impl<'a> IntoIterator for &'a ScheduleSeries {
    type Item = &'a SchedulePoint;
    type IntoIter = std::slice::Iter<'a, SchedulePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Evaluate the learning rate for every epoch of `request`.
///
/// Returns an empty series when the base rate is not a positive finite
/// number or the epoch count is outside `1..=MAX_PREVIEW_EPOCHS`.
/// Parameter problems never fail the call: they fall back to defaults.
/// Any sample that comes out non-finite is reported as `0.0`.
pub fn evaluate(request: &ScheduleRequest) -> ScheduleSeries {
    if !request.is_previewable() {
        return ScheduleSeries::empty();
    }

    let total_epochs = request.total_epochs.unsigned_abs();
    let schedule = request.effective_params().into_schedule(request.base_learning_rate);

    let points = (0..=total_epochs)
        .map(|epoch| {
            let lr = schedule.lr_at(epoch);
            SchedulePoint { epoch, value: if lr.is_finite() { lr } else { 0.0 } }
        })
        .collect();

    ScheduleSeries { points }
}
