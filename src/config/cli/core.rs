//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Recocido: polynomial decay learning rate scheduling
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "recocido")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Preview and validate polynomial decay learning rate schedules with warmup")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the schedule over a simulated training loop and print the rates
    Schedule(ScheduleArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),
}

/// Arguments for the schedule command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScheduleArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override number of epochs
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override optimizer updates per epoch
    #[arg(short, long)]
    pub steps_per_epoch: Option<usize>,

    /// Total updates discovered at runtime (rescales warmup via warmup_ratio)
    #[arg(short, long)]
    pub total_steps: Option<usize>,

    /// Print every N-th update in text output
    #[arg(long, default_value = "1")]
    pub every: usize,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a ScheduleSpec
pub fn apply_overrides(spec: &mut crate::config::ScheduleSpec, args: &ScheduleArgs) {
    if let Some(epochs) = args.epochs {
        spec.training.epochs = epochs;
    }
    if let Some(steps_per_epoch) = args.steps_per_epoch {
        spec.training.steps_per_epoch = steps_per_epoch;
    }
    // Note: total_steps is applied through reinit at run time, not persisted
}
