//! Learning rate schedule preview
//!
//! Computes the per-epoch learning rate implied by a scheduler configuration:
//! - `ConstantRate` - No scheduler, the base rate throughout
//! - `StepDecay` - Decay by gamma every step_size epochs
//! - `CosineAnnealing` - Smooth cosine decay towards eta_min
//! - `PlateauReduction` - Fixed-interval proxy for metric-driven reduction
//!
//! The curves are for preview only; nothing here drives an optimizer.

mod constant;
mod cosine_annealing;
mod kind;
mod params;
mod plateau;
mod series;
mod step_decay;
mod summary;

#[cfg(test)]
mod proptests;

pub use constant::ConstantRate;
pub use cosine_annealing::CosineAnnealing;
pub use kind::SchedulerKind;
pub use params::{
    coerce_float, coerce_int, param_specs, EffectiveParams, ParamSpec, SchedulerParams,
};
pub use plateau::PlateauReduction;
pub use series::{
    evaluate, SchedulePoint, ScheduleRequest, ScheduleSeries, MAX_PREVIEW_EPOCHS,
};
pub use step_decay::StepDecay;
pub use summary::{format_significant, PreviewSummary};

/// Learning rate as a closed-form function of the epoch
pub trait EpochSchedule {
    /// Learning rate at the given epoch (epoch 0 is the base rate for every decay rule)
    fn lr_at(&self, epoch: u64) -> f64;
}
