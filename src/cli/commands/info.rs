//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            let sched = &spec.scheduler;
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Scheduler: polynomial_decay (power={})", sched.power);
            println!("Learning rates: {:?}", sched.lr);
            println!("End learning rate: {}", sched.end_lr);
            println!(
                "Warmup: {} steps (ratio {})",
                sched.warmup_steps, sched.warmup_ratio
            );
            println!("Total steps: {}", sched.total_steps);
            match sched.force_anneal_epoch {
                Some(epoch) => println!("Force anneal: epoch {epoch}"),
                None => println!("Force anneal: disabled"),
            }
            println!(
                "Training: {} epochs x {} steps",
                spec.training.epochs, spec.training.steps_per_epoch
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
