//! Optimizer trait

/// Learning rate capability of an optimizer
///
/// Schedulers never touch parameters or gradients; they only read and
/// write the rate the optimizer will use for its next update.
pub trait Optimizer {
    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}

impl<O: Optimizer + ?Sized> Optimizer for &mut O {
    fn lr(&self) -> f32 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f32) {
        (**self).set_lr(lr);
    }
}

impl<O: Optimizer + ?Sized> Optimizer for Box<O> {
    fn lr(&self) -> f32 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f32) {
        (**self).set_lr(lr);
    }
}
