//! Cosine annealing learning rate schedule

use super::EpochSchedule;
use std::f64::consts::PI;

/// Cosine Annealing Learning Rate Schedule
///
/// Decreases the learning rate following a cosine curve from lr_base to eta_min.
///
/// Formula: lr_t = eta_min + 0.5 * (lr_base - eta_min) * (1 + cos(pi * min(t, T) / T))
///
/// Where:
/// - t is the current epoch
/// - T is t_max, the half-period in epochs
/// - lr_base is the initial learning rate
/// - eta_min is the floor reached at t = T and held afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineAnnealing {
    lr_base: f64,
    eta_min: f64,
    t_max: u64,
}

impl CosineAnnealing {
    /// Create a new cosine annealing schedule
    ///
    /// # Arguments
    /// * `lr_base` - Initial (maximum) learning rate
    /// * `t_max` - Epochs to reach eta_min (values below 1 are raised to 1)
    /// * `eta_min` - Minimum learning rate
    pub fn new(lr_base: f64, t_max: u64, eta_min: f64) -> Self {
        Self { lr_base, eta_min, t_max: t_max.max(1) }
    }
}

impl EpochSchedule for CosineAnnealing {
    fn lr_at(&self, epoch: u64) -> f64 {
        let progress = epoch.min(self.t_max) as f64 / self.t_max as f64;
        let cosine_decay = 0.5 * (1.0 + (PI * progress).cos());
        self.eta_min + (self.lr_base - self.eta_min) * cosine_decay
    }
}
