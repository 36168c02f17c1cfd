//! In-memory learning rate holder

use super::Optimizer;

/// Optimizer stand-in that only stores the learning rate
///
/// Useful for previewing a schedule without a model, and as the rate sink
/// of the `schedule` command.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantLR {
    lr: f32,
}

impl ConstantLR {
    /// Create a holder with an initial learning rate
    pub fn new(lr: f32) -> Self {
        Self { lr }
    }
}

impl Optimizer for ConstantLR {
    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
