//! Validation error types
//!
//! Defines all validation error variants for schedule specifications.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Learning rate table cannot be empty")]
    EmptyLrTable,

    #[error("Invalid learning rate: {0} (must be finite and >= 0.0)")]
    InvalidLearningRate(f32),

    #[error("Invalid end learning rate: {0} (must be finite and >= 0.0)")]
    InvalidEndLearningRate(f32),

    #[error("Invalid decay power: {0} (must be finite and > 0.0)")]
    InvalidPower(f32),

    #[error("Invalid total steps: {0} (must be > 0)")]
    InvalidTotalSteps(usize),

    #[error("Invalid warmup ratio: {0} (must be in [0.0, 1.0])")]
    InvalidWarmupRatio(f64),

    #[error("Warmup steps ({warmup_steps}) exceed total steps ({total_steps})")]
    WarmupExceedsTotal {
        warmup_steps: usize,
        total_steps: usize,
    },

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid steps per epoch: {0} (must be > 0)")]
    InvalidStepsPerEpoch(usize),

    #[error("Training loop too large: {epochs} epochs x {steps_per_epoch} steps (at most {max} updates)")]
    LoopTooLarge {
        epochs: usize,
        steps_per_epoch: usize,
        max: usize,
    },
}
