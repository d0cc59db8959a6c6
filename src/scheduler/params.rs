//! Scheduler parameter resolution
//!
//! Parameters arrive as a loose map (form fields, YAML values) where numbers
//! may be strings, keys may be missing and values may be garbage. Resolution
//! reads that map and produces the effective, typed parameter set. The map
//! itself is never written to, so a caller can show the effective values
//! next to the persisted configuration without the two drifting apart.

use super::constant::ConstantRate;
use super::cosine_annealing::CosineAnnealing;
use super::plateau::{clamp_factor, PlateauReduction};
use super::step_decay::StepDecay;
use super::{EpochSchedule, SchedulerKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Loose scheduler parameters keyed by config name
pub type SchedulerParams = HashMap<String, serde_json::Value>;

pub const DEFAULT_STEP_SIZE: u64 = 10;
pub const DEFAULT_GAMMA: f64 = 0.1;
pub const DEFAULT_ETA_MIN: f64 = 0.0;
pub const DEFAULT_PATIENCE: u64 = 10;
pub const DEFAULT_FACTOR: f64 = 0.1;

const STEP_SIZE_KEYS: &[&str] = &["step_size", "stepSize"];
const GAMMA_KEYS: &[&str] = &["gamma"];
const T_MAX_KEYS: &[&str] = &["T_max", "t_max", "tMax"];
const ETA_MIN_KEYS: &[&str] = &["eta_min", "etaMin"];
const PATIENCE_KEYS: &[&str] = &["patience"];
const FACTOR_KEYS: &[&str] = &["factor"];

/// Fully resolved scheduler parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheduler", rename_all = "snake_case")]
pub enum EffectiveParams {
    Constant,
    StepDecay { step_size: u64, gamma: f64 },
    CosineAnnealing { t_max: u64, eta_min: f64 },
    PlateauReduction { patience: u64, factor: f64 },
}

impl EffectiveParams {
    /// Fill defaults and coerce values for `kind`.
    ///
    /// `total_epochs` only feeds the cosine `T_max` default.
    pub fn resolve(kind: SchedulerKind, params: &SchedulerParams, total_epochs: i64) -> Self {
        match kind {
            SchedulerKind::None => EffectiveParams::Constant,
            SchedulerKind::StepDecay => EffectiveParams::StepDecay {
                step_size: resolve_count(params, STEP_SIZE_KEYS, DEFAULT_STEP_SIZE),
                gamma: resolve_float(params, GAMMA_KEYS, DEFAULT_GAMMA),
            },
            SchedulerKind::CosineAnnealing => {
                let default_t_max = u64::try_from(total_epochs).unwrap_or(0).max(1);
                EffectiveParams::CosineAnnealing {
                    t_max: resolve_count(params, T_MAX_KEYS, default_t_max),
                    eta_min: resolve_float(params, ETA_MIN_KEYS, DEFAULT_ETA_MIN),
                }
            }
            SchedulerKind::PlateauReduction => EffectiveParams::PlateauReduction {
                patience: resolve_count(params, PATIENCE_KEYS, DEFAULT_PATIENCE),
                factor: clamp_factor(resolve_float(params, FACTOR_KEYS, DEFAULT_FACTOR)),
            },
        }
    }

    pub fn kind(&self) -> SchedulerKind {
        match self {
            EffectiveParams::Constant => SchedulerKind::None,
            EffectiveParams::StepDecay { .. } => SchedulerKind::StepDecay,
            EffectiveParams::CosineAnnealing { .. } => SchedulerKind::CosineAnnealing,
            EffectiveParams::PlateauReduction { .. } => SchedulerKind::PlateauReduction,
        }
    }

    /// Bind the parameters to a base learning rate.
    pub fn into_schedule(self, lr_base: f64) -> Box<dyn EpochSchedule> {
        match self {
            EffectiveParams::Constant => Box::new(ConstantRate::new(lr_base)),
            EffectiveParams::StepDecay { step_size, gamma } => {
                Box::new(StepDecay::new(lr_base, step_size, gamma))
            }
            EffectiveParams::CosineAnnealing { t_max, eta_min } => {
                Box::new(CosineAnnealing::new(lr_base, t_max, eta_min))
            }
            EffectiveParams::PlateauReduction { patience, factor } => {
                Box::new(PlateauReduction::new(lr_base, patience, factor))
            }
        }
    }

    /// Learning rate at a single epoch.
    pub fn learning_rate(&self, lr_base: f64, epoch: u64) -> f64 {
        self.into_schedule(lr_base).lr_at(epoch)
    }

    /// Parameters as `(config name, value)` pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        match *self {
            EffectiveParams::Constant => Vec::new(),
            EffectiveParams::StepDecay { step_size, gamma } => {
                vec![("step_size", step_size.to_string()), ("gamma", gamma.to_string())]
            }
            EffectiveParams::CosineAnnealing { t_max, eta_min } => {
                vec![("T_max", t_max.to_string()), ("eta_min", eta_min.to_string())]
            }
            EffectiveParams::PlateauReduction { patience, factor } => {
                vec![("patience", patience.to_string()), ("factor", factor.to_string())]
            }
        }
    }
}

/// Description of one scheduler parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Parameters read for `kind`, with their defaults.
pub fn param_specs(kind: SchedulerKind) -> &'static [ParamSpec] {
    match kind {
        SchedulerKind::None => &[],
        SchedulerKind::StepDecay => &[
            ParamSpec {
                name: "step_size",
                default: "10",
                description: "Epochs between decays (integer, at least 1)",
            },
            ParamSpec { name: "gamma", default: "0.1", description: "Multiplicative decay factor" },
        ],
        SchedulerKind::CosineAnnealing => &[
            ParamSpec {
                name: "T_max",
                default: "num_epochs",
                description: "Epochs to reach eta_min (integer, at least 1)",
            },
            ParamSpec { name: "eta_min", default: "0", description: "Minimum learning rate" },
        ],
        SchedulerKind::PlateauReduction => &[
            ParamSpec {
                name: "patience",
                default: "10",
                description: "Epochs assumed between reductions (integer, at least 1)",
            },
            ParamSpec {
                name: "factor",
                default: "0.1",
                description: "Reduction factor, clamped to [1e-6, 0.999]",
            },
        ],
    }
}

fn lookup<'a>(params: &'a SchedulerParams, keys: &[&str]) -> Option<&'a serde_json::Value> {
    keys.iter().filter_map(|key| params.get(*key)).find(|value| !value.is_null())
}

fn resolve_float(params: &SchedulerParams, keys: &[&str], default: f64) -> f64 {
    lookup(params, keys).and_then(coerce_float).unwrap_or(default)
}

fn resolve_count(params: &SchedulerParams, keys: &[&str], default: u64) -> u64 {
    lookup(params, keys)
        .and_then(coerce_int)
        .map_or(default, |value| value.max(1.0) as u64)
        .max(1)
}

/// Read a float parameter. Non-numeric, empty and non-finite values yield `None`.
pub fn coerce_float(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Read an integer parameter, truncated toward zero.
///
/// Strings are read up to the first character that cannot continue an
/// integer, so `"12 epochs"` and `"2.7"` give 12 and 2.
pub fn coerce_int(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => leading_integer(s),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).map(f64::trunc)
}

fn leading_integer(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(|c: char| c == '+' || c == '-'));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, serde_json::Value)]) -> SchedulerParams {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn test_step_decay_defaults() {
        let resolved = EffectiveParams::resolve(SchedulerKind::StepDecay, &params(&[]), 30);
        assert_eq!(resolved, EffectiveParams::StepDecay { step_size: 10, gamma: 0.1 });
    }

    #[test]
    fn test_step_size_truncated_and_clamped() {
        let p = params(&[("step_size", json!(2.9))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::StepDecay, &p, 30);
        assert_eq!(resolved, EffectiveParams::StepDecay { step_size: 2, gamma: 0.1 });

        for raw in [json!(0), json!(-4), json!("0"), json!(0.5)] {
            let p = params(&[("step_size", raw)]);
            let resolved = EffectiveParams::resolve(SchedulerKind::StepDecay, &p, 30);
            assert_eq!(resolved, EffectiveParams::StepDecay { step_size: 1, gamma: 0.1 });
        }
    }

    #[test]
    fn test_unparsable_values_fall_back_to_defaults() {
        let p = params(&[("step_size", json!("abc")), ("gamma", json!("not a number"))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::StepDecay, &p, 30);
        assert_eq!(resolved, EffectiveParams::StepDecay { step_size: 10, gamma: 0.1 });

        let p = params(&[("gamma", json!(null)), ("step_size", json!(true))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::StepDecay, &p, 30);
        assert_eq!(resolved, EffectiveParams::StepDecay { step_size: 10, gamma: 0.1 });
    }

    #[test]
    fn test_string_numbers_are_accepted() {
        let p = params(&[("step_size", json!("5")), ("gamma", json!(" 0.5 "))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::StepDecay, &p, 30);
        assert_eq!(resolved, EffectiveParams::StepDecay { step_size: 5, gamma: 0.5 });
    }

    #[test]
    fn test_cosine_t_max_defaults_to_total_epochs() {
        let resolved = EffectiveParams::resolve(SchedulerKind::CosineAnnealing, &params(&[]), 25);
        assert_eq!(resolved, EffectiveParams::CosineAnnealing { t_max: 25, eta_min: 0.0 });

        let resolved = EffectiveParams::resolve(SchedulerKind::CosineAnnealing, &params(&[]), 0);
        assert_eq!(resolved, EffectiveParams::CosineAnnealing { t_max: 1, eta_min: 0.0 });
    }

    #[test]
    fn test_cosine_accepts_alias_keys() {
        let p = params(&[("tMax", json!(7)), ("etaMin", json!(0.01))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::CosineAnnealing, &p, 25);
        assert_eq!(resolved, EffectiveParams::CosineAnnealing { t_max: 7, eta_min: 0.01 });
    }

    #[test]
    fn test_plateau_factor_is_clamped() {
        let p = params(&[("factor", json!(5.0))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::PlateauReduction, &p, 10);
        assert_eq!(resolved, EffectiveParams::PlateauReduction { patience: 10, factor: 0.999 });

        let p = params(&[("factor", json!(0.0)), ("patience", json!(3))]);
        let resolved = EffectiveParams::resolve(SchedulerKind::PlateauReduction, &p, 10);
        assert_eq!(resolved, EffectiveParams::PlateauReduction { patience: 3, factor: 1e-6 });
    }

    #[test]
    fn test_resolve_does_not_touch_params() {
        let p = params(&[("gamma", json!(0.5))]);
        let before = p.clone();
        let _ = EffectiveParams::resolve(SchedulerKind::StepDecay, &p, 30);
        assert_eq!(p, before);
        assert!(!p.contains_key("step_size"));
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("12 epochs"), Some(12.0));
        assert_eq!(leading_integer("  -3"), Some(-3.0));
        assert_eq!(leading_integer("+8x"), Some(8.0));
        assert_eq!(leading_integer("x8"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn test_coerce_float_rejects_empty_and_non_finite() {
        assert_eq!(coerce_float(&json!("")), None);
        assert_eq!(coerce_float(&json!("inf")), None);
        assert_eq!(coerce_float(&json!("NaN")), None);
        assert_eq!(coerce_float(&json!([1.0])), None);
        assert_eq!(coerce_float(&json!(2.5)), Some(2.5));
    }

    #[test]
    fn test_param_specs_match_resolved_entries() {
        for kind in SchedulerKind::ALL {
            let resolved = EffectiveParams::resolve(kind, &params(&[]), 10);
            let names: Vec<_> = resolved.entries().into_iter().map(|(name, _)| name).collect();
            let specs: Vec<_> = param_specs(kind).iter().map(|spec| spec.name).collect();
            assert_eq!(names, specs);
            assert_eq!(resolved.kind(), kind);
        }
    }

    #[test]
    fn test_effective_params_serialize_tagged() {
        let resolved = EffectiveParams::StepDecay { step_size: 5, gamma: 0.5 };
        let value = serde_json::to_value(resolved).unwrap();
        assert_eq!(value, json!({"scheduler": "step_decay", "step_size": 5, "gamma": 0.5}));
    }
}
