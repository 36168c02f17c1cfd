//! Recocido CLI
//!
//! Preview and validate polynomial decay learning rate schedules.
//!
//! # Usage
//!
//! ```bash
//! # Print the learning rate after every 100th update
//! recocido schedule schedule.yaml --every 100
//!
//! # Rescale warmup for a dataset whose size is only known now
//! recocido schedule schedule.yaml --total-steps 48000 --format json
//!
//! # Validate config
//! recocido validate schedule.yaml --detailed
//!
//! # Show config info
//! recocido info schedule.yaml
//! ```

use clap::Parser;
use recocido::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
