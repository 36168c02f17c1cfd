//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = ScheduleSpec> {
    (
        proptest::collection::vec(1e-6f32..1.0, 1..8), // lr table
        0usize..1000,                                  // warmup_steps
        0usize..100_000,                               // extra decay steps
        0.1f32..4.0,                                   // power
        0.0f64..=1.0,                                  // warmup_ratio
        1usize..100,                                   // epochs
        1usize..1000,                                  // steps_per_epoch
    )
        .prop_map(
            |(lr, warmup_steps, extra, power, warmup_ratio, epochs, steps_per_epoch)| {
                ScheduleSpec {
                    scheduler: PolynomialDecayConfig {
                        lr,
                        warmup_steps,
                        warmup_ratio,
                        power,
                        total_steps: warmup_steps + extra + 1,
                        ..Default::default()
                    },
                    training: TrainingParams {
                        epochs,
                        steps_per_epoch,
                    },
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_non_positive_power_fails(spec in arb_valid_spec(), power in -10.0f32..=0.0) {
        let mut spec = spec;
        spec.scheduler.power = power;
        let result = validate_config(&spec);
        prop_assert!(matches!(result, Err(ValidationError::InvalidPower(_))));
    }

    #[test]
    fn prop_warmup_past_total_fails(spec in arb_valid_spec(), extra in 1usize..1000) {
        let mut spec = spec;
        spec.scheduler.warmup_steps = spec.scheduler.total_steps + extra;
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::WarmupExceedsTotal { .. })),
            "expected WarmupExceedsTotal error"
        );
    }
}
