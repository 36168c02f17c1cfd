//! Schedule preview over a simulated training loop
//!
//! Drives a [`PolynomialDecayLR`] exactly as a training loop would, without
//! a model: one `on_step` per optimizer update, one `on_epoch_end` per pass
//! over the data.

use crate::config::ScheduleSpec;
use crate::config::MAX_SIMULATED_UPDATES;
use crate::error::{Error, Result};
use crate::optim::{ConstantLR, LRScheduler, PolynomialDecayLR};
use serde::{Deserialize, Serialize};

/// Learning rate after a single optimizer update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LrPoint {
    /// Zero-based epoch the update belongs to
    pub epoch: usize,
    /// Global update count (1-based)
    pub step: usize,
    pub lr: f32,
}

/// Learning rate set at an epoch boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochPoint {
    /// Number of completed epochs
    pub epoch: usize,
    pub lr: f32,
}

/// Full trace of a simulated run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTrace {
    /// Warmup length in effect (after any reinit)
    pub warmup_steps: usize,
    /// Total updates in effect (after any reinit)
    pub total_steps: usize,
    /// Learning rate pushed at construction
    pub initial_lr: f32,
    pub steps: Vec<LrPoint>,
    pub epochs: Vec<EpochPoint>,
}

impl ScheduleTrace {
    /// Learning rate in effect when the run finished
    pub fn final_lr(&self) -> f32 {
        self.epochs
            .last()
            .map(|e| e.lr)
            .or_else(|| self.steps.last().map(|s| s.lr))
            .unwrap_or(self.initial_lr)
    }

    /// Highest learning rate reached by any update
    pub fn peak_lr(&self) -> f32 {
        self.steps.iter().map(|s| s.lr).fold(self.initial_lr, f32::max)
    }
}

/// Run the schedule described by `spec`
///
/// When `runtime_total_steps` is given, the scheduler is reinitialized with
/// it before the first update, as a loop would once the dataset size is
/// known. Without a `warmup_ratio` that reinit changes nothing.
///
/// `on_epoch_end` receives the number of completed epochs, which indexes
/// the rate table for the epoch about to start.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] when `epochs * steps_per_epoch` overflows
/// or exceeds [`MAX_SIMULATED_UPDATES`], and [`Error::EmptyLrTable`] when
/// the rate table is empty.
pub fn simulate(spec: &ScheduleSpec, runtime_total_steps: Option<usize>) -> Result<ScheduleTrace> {
    let epochs = spec.training.epochs;
    let steps_per_epoch = spec.training.steps_per_epoch;
    let total_updates = spec.training.total_updates().ok_or_else(|| {
        Error::ConfigError(format!(
            "training loop of {epochs} epochs x {steps_per_epoch} steps exceeds {MAX_SIMULATED_UPDATES} updates"
        ))
    })?;

    let mut scheduler = PolynomialDecayLR::new(spec.scheduler.clone(), ConstantLR::default())?;
    let initial_lr = scheduler.get_lr();

    if let Some(total) = runtime_total_steps {
        scheduler.reinit(total, 0);
    }

    let mut steps = Vec::with_capacity(total_updates);
    let mut epoch_points = Vec::with_capacity(epochs);
    let mut num_updates = 0;

    for epoch in 0..epochs {
        for _ in 0..steps_per_epoch {
            num_updates += 1;
            let lr = scheduler.on_step(num_updates);
            steps.push(LrPoint {
                epoch,
                step: num_updates,
                lr,
            });
        }

        let lr = scheduler.on_epoch_end(epoch + 1, None);
        epoch_points.push(EpochPoint {
            epoch: epoch + 1,
            lr,
        });
    }

    Ok(ScheduleTrace {
        warmup_steps: scheduler.warmup_steps(),
        total_steps: scheduler.total_steps(),
        initial_lr,
        steps,
        epochs: epoch_points,
    })
}
