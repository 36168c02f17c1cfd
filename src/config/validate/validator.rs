//! Configuration validation logic
//!
//! Validates schedule specifications before a schedule is run. The
//! scheduler itself accepts any configuration; this gate only guards
//! configuration files.

use super::error::ValidationError;
use crate::config::schema::{ScheduleSpec, MAX_SIMULATED_UPDATES};

/// Validate a schedule specification
///
/// Checks:
/// - Learning rate table is non-empty with non-negative finite rates
/// - Decay parameters are in valid ranges
/// - Warmup fits inside the schedule
/// - Training loop shape is non-degenerate and fits the update cap
pub fn validate_config(spec: &ScheduleSpec) -> Result<(), ValidationError> {
    let sched = &spec.scheduler;

    if sched.lr.is_empty() {
        return Err(ValidationError::EmptyLrTable);
    }

    if let Some(&lr) = sched.lr.iter().find(|lr| !lr.is_finite() || **lr < 0.0) {
        return Err(ValidationError::InvalidLearningRate(lr));
    }

    if !sched.end_lr.is_finite() || sched.end_lr < 0.0 {
        return Err(ValidationError::InvalidEndLearningRate(sched.end_lr));
    }

    if !sched.power.is_finite() || sched.power <= 0.0 {
        return Err(ValidationError::InvalidPower(sched.power));
    }

    if sched.total_steps == 0 {
        return Err(ValidationError::InvalidTotalSteps(sched.total_steps));
    }

    if !(0.0..=1.0).contains(&sched.warmup_ratio) {
        return Err(ValidationError::InvalidWarmupRatio(sched.warmup_ratio));
    }

    if sched.warmup_steps > sched.total_steps {
        return Err(ValidationError::WarmupExceedsTotal {
            warmup_steps: sched.warmup_steps,
            total_steps: sched.total_steps,
        });
    }

    if spec.training.epochs == 0 {
        return Err(ValidationError::InvalidEpochs(spec.training.epochs));
    }

    if spec.training.steps_per_epoch == 0 {
        return Err(ValidationError::InvalidStepsPerEpoch(
            spec.training.steps_per_epoch,
        ));
    }

    if spec.training.total_updates().is_none() {
        return Err(ValidationError::LoopTooLarge {
            epochs: spec.training.epochs,
            steps_per_epoch: spec.training.steps_per_epoch,
            max: MAX_SIMULATED_UPDATES,
        });
    }

    Ok(())
}
