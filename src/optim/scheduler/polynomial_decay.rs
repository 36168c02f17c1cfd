//! Polynomial decay learning rate scheduler with linear warmup

use super::{track_best, LRScheduler};
use crate::config::PolynomialDecayConfig;
use crate::error::{Error, Result};
use crate::optim::Optimizer;
use tracing::{debug, info};

/// Polynomial Decay Learning Rate Scheduler
///
/// Three phases, selected by the global update count:
/// - Warmup (`step <= warmup_steps`): lr = lr_base * step / warmup_steps
/// - Decay: lr = (lr_base - lr_end) * (1 - progress)^power + lr_end
/// - Floor (`step >= total_steps`): lr = lr_end
///
/// where progress = (step - warmup_steps) / (total_steps - warmup_steps).
///
/// At epoch boundaries the base rate comes from the fixed per-epoch table
/// (clamped to its last entry). From `force_anneal_epoch` on, the rate the
/// optimizer currently holds is kept as the base instead, so epoch-level
/// stepping depends on the step-level updates that ran before it.
#[derive(Debug, Clone)]
pub struct PolynomialDecayLR<O> {
    config: PolynomialDecayConfig,
    optimizer: O,
    lr: f32,
    warmup_steps: usize,
    total_steps: usize,
    warmup_factor: f32,
    best: Option<f32>,
}

/// Fraction of warmup elapsed at `step`
///
/// Step counts are divided in `f64`; `f32` stops telling neighbouring
/// steps apart above 2^24.
fn warmup_progress(step: usize, warmup_steps: usize) -> f32 {
    (step as f64 / warmup_steps as f64) as f32
}

/// Warmup multiplier before any update has run
fn initial_warmup_factor(warmup_steps: usize) -> f32 {
    if warmup_steps > 0 {
        warmup_progress(1, warmup_steps)
    } else {
        1.0
    }
}

impl<O: Optimizer> PolynomialDecayLR<O> {
    /// Create a new polynomial decay scheduler
    ///
    /// Pushes the warmup-scaled base rate to `optimizer` immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLrTable`] when `config.lr` has no entries.
    pub fn new(config: PolynomialDecayConfig, mut optimizer: O) -> Result<Self> {
        let lr = *config.lr.first().ok_or(Error::EmptyLrTable)?;
        let warmup_steps = config.warmup_steps;
        let total_steps = config.total_steps;
        let warmup_factor = initial_warmup_factor(warmup_steps);

        optimizer.set_lr(warmup_factor * lr);

        Ok(Self {
            config,
            optimizer,
            lr,
            warmup_steps,
            total_steps,
            warmup_factor,
            best: None,
        })
    }

    /// Rescale the schedule once the real number of updates is known
    ///
    /// Only active when `warmup_ratio > 0`; otherwise nothing changes.
    /// Sets `total_steps` and derives `warmup_steps = floor(total * ratio)`,
    /// then re-applies the rate for `current_step` so warmup progress that
    /// already elapsed is kept.
    pub fn reinit(&mut self, total_steps: usize, current_step: usize) {
        let ratio = self.config.warmup_ratio;
        if ratio <= 0.0 {
            return;
        }

        self.total_steps = total_steps;
        self.warmup_steps = (total_steps as f64 * ratio).floor() as usize;

        if current_step > 0 {
            self.warmup_factor = if self.warmup_steps > 0 {
                warmup_progress(current_step, self.warmup_steps).min(1.0)
            } else {
                1.0
            };
            self.on_step(current_step);
        } else {
            self.warmup_factor = initial_warmup_factor(self.warmup_steps);
            self.optimizer.set_lr(self.warmup_factor * self.lr);
        }

        info!(
            total_steps = self.total_steps,
            warmup_steps = self.warmup_steps,
            warmup_factor = self.warmup_factor,
            "Reinitialized polynomial decay schedule"
        );
    }

    /// Base rate for the given epoch
    fn next_lr(&self, epoch: usize) -> f32 {
        match self.config.force_anneal_epoch {
            Some(anneal) if epoch >= anneal => self.optimizer.lr(),
            _ => {
                let table = &self.config.lr;
                table[epoch.min(table.len() - 1)]
            }
        }
    }

    /// Rate on the decay curve; `step` is past warmup
    ///
    /// Evaluated in `f64` and narrowed once at the end.
    fn decay_lr(&self, step: usize) -> f32 {
        let warmup = self.warmup_steps;
        let lr_end = self.config.end_lr;
        if self.total_steps <= warmup {
            return lr_end;
        }

        let lr_end = f64::from(lr_end);
        let lr_range = f64::from(self.lr) - lr_end;
        let pct_remaining =
            1.0 - step.saturating_sub(warmup) as f64 / (self.total_steps - warmup) as f64;
        (lr_range * pct_remaining.powf(f64::from(self.config.power)) + lr_end) as f32
    }

    /// Current warmup multiplier in [0, 1]
    pub fn warmup_factor(&self) -> f32 {
        self.warmup_factor
    }

    /// Number of warmup updates (changes on [`reinit`](Self::reinit))
    pub fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }

    /// Update count at which the floor rate is reached
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Most recently selected base rate
    pub fn current_base_lr(&self) -> f32 {
        self.lr
    }

    pub fn config(&self) -> &PolynomialDecayConfig {
        &self.config
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    /// Release the optimizer
    pub fn into_optimizer(self) -> O {
        self.optimizer
    }
}

impl<O: Optimizer> LRScheduler for PolynomialDecayLR<O> {
    fn get_lr(&self) -> f32 {
        self.optimizer.lr()
    }

    fn on_epoch_end(&mut self, epoch: usize, val_loss: Option<f32>) -> f32 {
        self.best = track_best(self.best, val_loss);
        self.lr = self.next_lr(epoch);
        self.optimizer.set_lr(self.warmup_factor * self.lr);

        debug!(epoch, base_lr = self.lr, warmup_factor = self.warmup_factor, "Epoch learning rate");
        self.optimizer.lr()
    }

    fn on_step(&mut self, step: usize) -> f32 {
        let lr = if self.warmup_steps > 0 && step <= self.warmup_steps {
            self.warmup_factor = warmup_progress(step, self.warmup_steps);
            self.warmup_factor * self.lr
        } else if step >= self.total_steps {
            self.config.end_lr
        } else {
            self.decay_lr(step)
        };

        self.optimizer.set_lr(lr);
        self.optimizer.lr()
    }

    fn best_val_loss(&self) -> Option<f32> {
        self.best
    }
}
