//! Declarative schedule configuration
//!
//! YAML schema, loading, validation and CLI argument types.

pub mod cli;
mod loader;
mod schema;
pub mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, OutputFormat, ScheduleArgs, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{PolynomialDecayConfig, ScheduleSpec, TrainingParams, MAX_SIMULATED_UPDATES};
pub use validate::{validate_config, ValidationError};
