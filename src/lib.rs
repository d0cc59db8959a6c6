//! lrpreview: learning rate schedule preview
//!
//! Given a base learning rate, an epoch count and a scheduler configuration
//! (`StepLR`, `CosineAnnealingLR`, `ReduceLROnPlateau` or none), compute the
//! per-epoch learning rate curve a training run would follow.
//!
//! # Example
//!
//! ```
//! use lrpreview::scheduler::{evaluate, ScheduleRequest, SchedulerKind};
//!
//! let request = ScheduleRequest::new(1.0, 30, SchedulerKind::StepDecay)
//!     .with_param("step_size", 10)
//!     .with_param("gamma", 0.1);
//! let series = evaluate(&request);
//!
//! assert_eq!(series.len(), 31);
//! assert_eq!(series.value_at(0), Some(1.0));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scheduler;

pub use error::{Error, Result};
pub use scheduler::{evaluate, ScheduleRequest, ScheduleSeries, SchedulerKind};
