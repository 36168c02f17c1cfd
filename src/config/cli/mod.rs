//! CLI argument parsing and validation
//!
//! This module provides the command-line interface for recocido.
//!
//! # Usage
//!
//! ```bash
//! recocido schedule config.yaml
//! recocido schedule config.yaml --total-steps 12000 --every 100
//! recocido validate config.yaml
//! recocido info config.yaml --format json
//! ```

mod core;
mod types;

pub use core::{apply_overrides, parse_args, Cli, Command, InfoArgs, ScheduleArgs, ValidateArgs};
pub use types::OutputFormat;
