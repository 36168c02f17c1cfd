//! # Recocido: Polynomial Decay Learning Rate Scheduling
//!
//! Recocido computes the learning rate an optimizer should use at every
//! training step and epoch boundary:
//!
//! - **Warmup**: linear ramp from `1/warmup_steps` of the base rate up to
//!   the base rate
//! - **Decay**: `(base - end) * remaining^power + end` until `total_steps`
//! - **Floor**: exactly `end_lr` once `total_steps` is reached
//!
//! Epoch boundaries select the base rate from a fixed per-epoch table until
//! a force-anneal epoch, after which the optimizer's current rate is kept.
//!
//! # Example
//!
//! ```
//! use recocido::config::PolynomialDecayConfig;
//! use recocido::optim::{ConstantLR, LRScheduler, PolynomialDecayLR};
//!
//! let config = PolynomialDecayConfig {
//!     lr: vec![1.0],
//!     warmup_steps: 10,
//!     total_steps: 110,
//!     ..Default::default()
//! };
//! let mut scheduler = PolynomialDecayLR::new(config, ConstantLR::new(0.0))?;
//!
//! assert!((scheduler.on_step(5) - 0.5).abs() < 1e-6);
//! assert!((scheduler.on_step(60) - 0.5).abs() < 1e-6);
//! assert_eq!(scheduler.on_step(200), 0.0);
//! # Ok::<(), recocido::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod optim;
pub mod simulate;

pub use error::{Error, Result};
