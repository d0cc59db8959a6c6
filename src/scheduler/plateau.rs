//! Plateau reduction proxy schedule
//!
//! `ReduceLROnPlateau` multiplies the rate by `factor` once the monitored
//! metric has not improved for `patience` epochs. The metric is not known
//! ahead of training, so the preview assumes a plateau at every `patience`
//! boundary. Callers must show [`SchedulerKind::preview_note`] with this curve.
//!
//! [`SchedulerKind::preview_note`]: super::SchedulerKind::preview_note

use super::EpochSchedule;

/// Smallest factor applied per reduction
pub const MIN_FACTOR: f64 = 1e-6;

/// Largest factor applied per reduction
pub const MAX_FACTOR: f64 = 0.999;

/// Deterministic stand-in for metric-driven plateau reduction.
///
/// Formula: lr_t = lr_base * clamp(factor, 1e-6, 0.999)^(floor(epoch / patience))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateauReduction {
    lr_base: f64,
    patience: u64,
    factor: f64,
}

impl PlateauReduction {
    pub fn new(lr_base: f64, patience: u64, factor: f64) -> Self {
        Self { lr_base, patience: patience.max(1), factor: clamp_factor(factor) }
    }

    /// Factor actually applied per reduction
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

/// Clamp a reduction factor into `[MIN_FACTOR, MAX_FACTOR]`.
pub fn clamp_factor(factor: f64) -> f64 {
    factor.clamp(MIN_FACTOR, MAX_FACTOR)
}

impl EpochSchedule for PlateauReduction {
    fn lr_at(&self, epoch: u64) -> f64 {
        let reductions = epoch / self.patience;
        self.lr_base * self.factor.powf(reductions as f64)
    }
}
