//! Learning rate capability and schedulers

mod constant;
mod optimizer;
mod scheduler;

pub use constant::ConstantLR;
pub use optimizer::Optimizer;
pub use scheduler::{LRScheduler, PolynomialDecayLR};
