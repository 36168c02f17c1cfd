//! YAML schema definitions for declarative schedule configuration

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a learning rate table from a single number, a list of
/// numbers, or a comma-separated string (`"0.25,0.1"`).
fn deserialize_lr_table<'de, D>(deserializer: D) -> Result<Vec<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LrTable {
        One(f32),
        Many(Vec<f32>),
        Str(String),
    }

    match LrTable::deserialize(deserializer)? {
        LrTable::One(lr) => Ok(vec![lr]),
        LrTable::Many(lrs) => Ok(lrs),
        LrTable::Str(s) => s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f32>().map_err(|_| {
                    serde::de::Error::custom(format!("invalid learning rate '{part}'"))
                })
            })
            .collect(),
    }
}

/// Complete schedule specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Polynomial decay scheduler configuration
    pub scheduler: PolynomialDecayConfig,

    /// Shape of the training loop driving the scheduler
    #[serde(default)]
    pub training: TrainingParams,
}

/// Polynomial decay scheduler configuration
///
/// Immutable once handed to a scheduler; only `reinit` rescales the
/// step counts it derives from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialDecayConfig {
    /// Per-epoch learning rate table; the first entry is the base rate
    #[serde(deserialize_with = "deserialize_lr_table")]
    pub lr: Vec<f32>,

    /// Linear warmup length in updates (0 disables warmup)
    #[serde(default)]
    pub warmup_steps: usize,

    /// Warmup length as a fraction of `total_steps`, applied on reinit
    #[serde(default)]
    pub warmup_ratio: f64,

    /// Floor learning rate reached at `total_steps`
    #[serde(default)]
    pub end_lr: f32,

    /// Decay exponent (1.0 = linear)
    #[serde(default = "default_power")]
    pub power: f32,

    /// Update count at which decay reaches `end_lr`
    #[serde(default = "default_total_steps")]
    pub total_steps: usize,

    /// Epoch from which the per-epoch table is no longer consulted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_anneal_epoch: Option<usize>,
}

impl Default for PolynomialDecayConfig {
    fn default() -> Self {
        Self {
            lr: vec![default_lr()],
            warmup_steps: 0,
            warmup_ratio: 0.0,
            end_lr: 0.0,
            power: default_power(),
            total_steps: default_total_steps(),
            force_anneal_epoch: None,
        }
    }
}

fn default_lr() -> f32 {
    0.001
}

fn default_power() -> f32 {
    1.0
}

fn default_total_steps() -> usize {
    1_000_000
}

/// Upper bound on `epochs * steps_per_epoch` for a simulated run
///
/// Every update is kept in the trace, so the cap bounds its memory.
pub const MAX_SIMULATED_UPDATES: usize = 10_000_000;

/// Training loop shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingParams {
    /// Number of epochs
    pub epochs: usize,

    /// Optimizer updates per epoch
    pub steps_per_epoch: usize,
}

impl TrainingParams {
    /// Total updates of the loop, or `None` if it overflows or exceeds
    /// [`MAX_SIMULATED_UPDATES`]
    pub fn total_updates(&self) -> Option<usize> {
        self.epochs
            .checked_mul(self.steps_per_epoch)
            .filter(|&total| total <= MAX_SIMULATED_UPDATES)
    }
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            epochs: 10,
            steps_per_epoch: 100,
        }
    }
}
