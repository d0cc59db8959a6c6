//! Step decay learning rate schedule

use super::EpochSchedule;

/// Step Decay Learning Rate Schedule
///
/// Multiplies the base learning rate by gamma every step_size epochs.
///
/// Formula: lr_t = lr_base * gamma^(floor(epoch / step_size))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDecay {
    lr_base: f64,
    step_size: u64,
    gamma: f64,
}

impl StepDecay {
    /// Create a new step decay schedule
    ///
    /// # Arguments
    /// * `lr_base` - Learning rate at epoch 0
    /// * `step_size` - Decay every step_size epochs (values below 1 are raised to 1)
    /// * `gamma` - Multiplicative factor (e.g., 0.1 for 10x reduction)
    pub fn new(lr_base: f64, step_size: u64, gamma: f64) -> Self {
        Self { lr_base, step_size: step_size.max(1), gamma }
    }
}

impl EpochSchedule for StepDecay {
    fn lr_at(&self, epoch: u64) -> f64 {
        let num_decays = epoch / self.step_size;
        self.lr_base * self.gamma.powf(num_decays as f64)
    }
}
