//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ScheduleSpec, ValidateArgs};

/// Format scheduler configuration as a string
pub fn format_scheduler_info(spec: &ScheduleSpec) -> String {
    let sched = &spec.scheduler;
    let mut lines = vec![
        format!("  Learning rates: {:?}", sched.lr),
        format!("  End learning rate: {}", sched.end_lr),
        format!("  Power: {}", sched.power),
        format!("  Total steps: {}", sched.total_steps),
        format!("  Warmup steps: {}", sched.warmup_steps),
    ];
    if sched.warmup_ratio > 0.0 {
        lines.push(format!("  Warmup ratio: {}", sched.warmup_ratio));
    }
    if let Some(epoch) = sched.force_anneal_epoch {
        lines.push(format!("  Force anneal at epoch: {epoch}"));
    }
    lines.join("\n")
}

/// Format training loop configuration as a string
pub fn format_training_info(spec: &ScheduleSpec) -> String {
    format!(
        "  Epochs: {}\n  Steps per epoch: {}",
        spec.training.epochs, spec.training.steps_per_epoch
    )
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &ScheduleSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_scheduler_info(spec));
    println!();
    println!("{}", format_training_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    // load_config validates after parsing
    let spec = load_config(&args.config).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
