//! Schedule command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, OutputFormat, ScheduleArgs};
use crate::simulate::{simulate, ScheduleTrace};
use tracing::warn;

/// Render a trace as a text table, keeping every `every`-th update
///
/// The last update of each epoch is always shown, followed by the rate set
/// at the epoch boundary.
pub fn format_trace(trace: &ScheduleTrace, every: usize) -> String {
    let every = every.max(1);
    let mut lines = vec![
        format!(
            "Warmup steps: {}  Total steps: {}  Initial lr: {:.6e}",
            trace.warmup_steps, trace.total_steps, trace.initial_lr
        ),
        format!("{:>10}  {:>6}  {:>14}", "step", "epoch", "lr"),
    ];

    let mut epochs = trace.epochs.iter().peekable();
    for (i, point) in trace.steps.iter().enumerate() {
        let last_of_epoch = trace
            .steps
            .get(i + 1)
            .map_or(true, |next| next.epoch != point.epoch);

        if point.step % every == 0 || last_of_epoch {
            lines.push(format!("{:>10}  {:>6}  {:>14.6e}", point.step, point.epoch, point.lr));
        }
        if last_of_epoch {
            if let Some(end) = epochs.next_if(|e| e.epoch == point.epoch + 1) {
                lines.push(format!("{:>10}  {:>6}  {:>14.6e}", "epoch end", end.epoch, end.lr));
            }
        }
    }

    lines.push(format!(
        "Peak lr: {:.6e}  Final lr: {:.6e}",
        trace.peak_lr(),
        trace.final_lr()
    ));
    lines.join("\n")
}

pub fn run_schedule(args: ScheduleArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading config: {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    if args.total_steps.is_some() && spec.scheduler.warmup_ratio <= 0.0 {
        warn!("--total-steps has no effect unless warmup_ratio > 0");
    }

    let trace = simulate(&spec, args.total_steps).map_err(|e| format!("Schedule error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "Schedule: {} epochs x {} steps",
                    spec.training.epochs, spec.training.steps_per_epoch
                ),
            );
            println!("{}", format_trace(&trace, args.every));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&trace)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&trace)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
