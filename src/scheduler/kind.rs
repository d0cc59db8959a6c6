//! Scheduler kinds as named in training configurations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family of learning rate decay rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SchedulerKind {
    /// No scheduler: constant learning rate
    #[default]
    #[serde(rename = "none")]
    None,
    /// `StepLR`
    #[serde(rename = "StepLR")]
    StepDecay,
    /// `CosineAnnealingLR`
    #[serde(rename = "CosineAnnealingLR")]
    CosineAnnealing,
    /// `ReduceLROnPlateau`
    #[serde(rename = "ReduceLROnPlateau")]
    PlateauReduction,
}

impl SchedulerKind {
    pub const ALL: [SchedulerKind; 4] = [
        SchedulerKind::None,
        SchedulerKind::StepDecay,
        SchedulerKind::CosineAnnealing,
        SchedulerKind::PlateauReduction,
    ];

    /// Name written to the `scheduler` field of a training config
    pub fn config_name(&self) -> &'static str {
        match self {
            SchedulerKind::None => "none",
            SchedulerKind::StepDecay => "StepLR",
            SchedulerKind::CosineAnnealing => "CosineAnnealingLR",
            SchedulerKind::PlateauReduction => "ReduceLROnPlateau",
        }
    }

    /// Caution to display next to a preview of this kind, if any.
    pub fn preview_note(&self) -> Option<&'static str> {
        match self {
            SchedulerKind::PlateauReduction => Some(
                "ReduceLROnPlateau lowers the rate only when the monitored metric stops \
                 improving; this preview assumes a reduction every `patience` epochs and \
                 shows the approximate shape only.",
            ),
            SchedulerKind::None => {
                Some("No scheduler configured: the learning rate stays constant.")
            }
            SchedulerKind::StepDecay | SchedulerKind::CosineAnnealing => None,
        }
    }

    /// Whether the preview curve is exact for the runtime scheduler
    pub fn is_exact(&self) -> bool {
        !matches!(self, SchedulerKind::PlateauReduction)
    }
}

impl FromStr for SchedulerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "null" | "constant" => Ok(SchedulerKind::None),
            "steplr" | "step" | "step_decay" => Ok(SchedulerKind::StepDecay),
            "cosineannealinglr" | "cosine" | "cosine_annealing" => {
                Ok(SchedulerKind::CosineAnnealing)
            }
            "reducelronplateau" | "plateau" | "plateau_reduction" => {
                Ok(SchedulerKind::PlateauReduction)
            }
            _ => Err(format!(
                "Unknown scheduler: {s}. Valid schedulers: StepLR, CosineAnnealingLR, ReduceLROnPlateau, none"
            )),
        }
    }
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config_name())
    }
}
