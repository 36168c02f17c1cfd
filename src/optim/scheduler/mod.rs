//! Learning rate schedulers
//!
//! Provides learning rate scheduling strategies for training:
//! - `PolynomialDecayLR` - Linear warmup followed by polynomial decay to a floor

mod polynomial_decay;


pub use polynomial_decay::PolynomialDecayLR;

/// Learning rate scheduler trait
///
/// A training loop calls `on_step` after every optimizer update and
/// `on_epoch_end` after every full pass over the data. Both push the new
/// rate to the optimizer and return the rate the optimizer now reports.
pub trait LRScheduler {
    /// Get the current learning rate, as reported by the optimizer
    fn get_lr(&self) -> f32;

    /// Update the learning rate at the end of the given epoch
    fn on_epoch_end(&mut self, epoch: usize, val_loss: Option<f32>) -> f32;

    /// Update the learning rate after the given number of updates
    fn on_step(&mut self, step: usize) -> f32;

    /// Lowest validation loss reported through `on_epoch_end`
    fn best_val_loss(&self) -> Option<f32>;
}

/// Fold a new validation loss into the running best
pub(crate) fn track_best(best: Option<f32>, val_loss: Option<f32>) -> Option<f32> {
    match (best, val_loss) {
        (Some(b), Some(v)) => Some(b.min(v)),
        (None, v) => v,
        (b, None) => b,
    }
}
