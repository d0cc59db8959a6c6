//! Constant learning rate (no scheduler configured)

use super::EpochSchedule;

/// Keeps the base learning rate for every epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRate {
    lr: f64,
}

impl ConstantRate {
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }
}

impl EpochSchedule for ConstantRate {
    fn lr_at(&self, _epoch: u64) -> f64 {
        self.lr
    }
}
