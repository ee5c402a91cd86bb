//! Unit tests for the impact calculator.

use super::*;
use crate::regime::Regime;
use crate::services::Service;

fn snapshot(timber_value: f64, regime: Regime) -> InputSnapshot {
    InputSnapshot {
        timber_value,
        regime,
        total_area: Some(100.0),
        managed_area: Some(100.0),
        resilience: 0,
    }
}

fn assert_values_close(got: ServiceValues, want: [f64; 5], tolerance: f64) {
    for (i, (g, w)) in got.0.iter().zip(want).enumerate() {
        assert!(
            (g - w).abs() < tolerance,
            "service {i}: expected {w}, got {g} (full vector {:?})",
            got.0
        );
    }
}

// -------------------------------------------------------------------------
// Managed fraction
// -------------------------------------------------------------------------

#[test]
fn test_managed_fraction_full() {
    assert_eq!(managed_fraction(Some(100.0), Some(100.0)), 1.0);
}

#[test]
fn test_managed_fraction_quarter() {
    assert!((managed_fraction(Some(25.0), Some(100.0)) - 0.25).abs() < 1e-12);
}

#[test]
fn test_managed_fraction_zero_managed() {
    assert_eq!(managed_fraction(Some(0.0), Some(100.0)), 0.0);
}

#[test]
fn test_managed_fraction_missing_fields() {
    assert_eq!(managed_fraction(None, Some(100.0)), 0.0);
    assert_eq!(managed_fraction(Some(50.0), None), 0.0);
    assert_eq!(managed_fraction(Some(50.0), Some(0.0)), 0.0);
}

#[test]
fn test_managed_fraction_not_capped() {
    assert_eq!(managed_fraction(Some(200.0), Some(100.0)), 2.0);
}

// -------------------------------------------------------------------------
// Impact factor
// -------------------------------------------------------------------------

#[test]
fn test_impact_factor_zero() {
    assert_eq!(impact_factor(0.0), 0.0);
}

#[test]
fn test_impact_factor_one() {
    assert_eq!(impact_factor(1.0), 1.0);
}

#[test]
fn test_impact_factor_is_concave() {
    // Small fractions produce a disproportionately large effect.
    for raw in [0.01, 0.1, 0.3, 0.5, 0.9] {
        let factor = impact_factor(raw);
        assert!(factor > raw, "{raw}^0.6 = {factor} should exceed {raw}");
    }
}

#[test]
fn test_impact_factor_negative_floored() {
    assert_eq!(impact_factor(-0.5), 0.0);
}

// -------------------------------------------------------------------------
// Condition multiplier
// -------------------------------------------------------------------------

#[test]
fn test_condition_multiplier_control_points() {
    assert_eq!(condition_multiplier(-5), 2.0);
    assert_eq!(condition_multiplier(0), 1.0);
    assert_eq!(condition_multiplier(5), 0.5);
}

#[test]
fn test_condition_multiplier_between_points() {
    assert!((condition_multiplier(-2) - 1.4).abs() < 1e-12);
    assert!((condition_multiplier(3) - 0.7).abs() < 1e-12);
}

#[test]
fn test_condition_multiplier_clamps_outside_range() {
    assert_eq!(condition_multiplier(-6), 2.0);
    assert_eq!(condition_multiplier(-100), 2.0);
    assert_eq!(condition_multiplier(6), 0.5);
    assert_eq!(condition_multiplier(i32::MAX), 0.5);
}

#[test]
fn test_condition_multiplier_monotonic_decreasing() {
    for r in -6..6 {
        assert!(
            condition_multiplier(r + 1) <= condition_multiplier(r),
            "multiplier should not grow from {r} to {}",
            r + 1
        );
    }
}

#[test]
fn test_interpolate_clamped_fractional_input() {
    let points = [(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)];
    assert!((interpolate_clamped(0.5, &points) - 5.0).abs() < 1e-12);
    assert!((interpolate_clamped(1.5, &points) - 5.0).abs() < 1e-12);
    assert_eq!(interpolate_clamped(1.0, &points), 10.0);
}

// -------------------------------------------------------------------------
// Validity gate and reset
// -------------------------------------------------------------------------

#[test]
fn test_no_trigger_yields_zero() {
    let values = compute_impact(Trigger::None, &snapshot(3.0, Regime::Clearcut));
    assert_eq!(values, ServiceValues::ZERO);
}

#[test]
fn test_non_positive_total_area_yields_zero() {
    for total in [Some(0.0), Some(-10.0), None] {
        let input = InputSnapshot {
            total_area: total,
            ..snapshot(3.0, Regime::Clearcut)
        };
        let evaluation = evaluate_impact(Trigger::DriverChanged, &input);
        assert_eq!(evaluation.values, ServiceValues::ZERO, "total {total:?}");
        assert_eq!(evaluation.state, CalculatorState::Idle);
        assert!(evaluation.breakdown.is_none());
    }
}

#[test]
fn test_nan_total_area_yields_zero() {
    let input = InputSnapshot {
        total_area: Some(f64::NAN),
        ..snapshot(3.0, Regime::Clearcut)
    };
    assert!(compute_impact(Trigger::DriverChanged, &input).is_zero());
}

#[test]
fn test_reset_yields_zero_regardless_of_inputs() {
    for regime in Regime::ALL {
        for resilience in [-5, 0, 5] {
            let input = InputSnapshot {
                resilience,
                ..snapshot(4.2, regime)
            };
            assert_eq!(
                compute_impact(Trigger::ResetPressed, &input),
                ServiceValues::ZERO,
                "{} / {resilience}",
                regime.label()
            );
        }
    }
}

#[test]
fn test_reset_wins_over_driver_change() {
    let trigger = Trigger::from_flags(true, true);
    assert_eq!(trigger, Trigger::ResetPressed);
    assert!(compute_impact(trigger, &snapshot(3.0, Regime::Clearcut)).is_zero());
}

#[test]
fn test_trigger_from_flags() {
    assert_eq!(Trigger::from_flags(false, false), Trigger::None);
    assert_eq!(Trigger::from_flags(true, false), Trigger::DriverChanged);
    assert_eq!(Trigger::from_flags(false, true), Trigger::ResetPressed);
}

// -------------------------------------------------------------------------
// Concrete scenarios
// -------------------------------------------------------------------------

#[test]
fn test_clearcut_full_area_neutral_resilience() {
    let evaluation = evaluate_impact(Trigger::DriverChanged, &snapshot(3.0, Regime::Clearcut));
    assert_eq!(evaluation.state, CalculatorState::Computed);
    assert_values_close(evaluation.values, [3.0, -2.1, -2.4, -1.5, -1.8], 1e-9);

    let breakdown = evaluation.breakdown.expect("computed evaluation has a breakdown");
    assert_eq!(breakdown.managed_fraction, 1.0);
    assert_eq!(breakdown.raw_factor, 1.0);
    assert_eq!(breakdown.impact_factor, 1.0);
    assert_eq!(breakdown.condition_multiplier, 1.0);
}

#[test]
fn test_selective_cut_full_area_neutral_resilience() {
    let values = compute_impact(Trigger::DriverChanged, &snapshot(3.0, Regime::SelectiveCut));
    let factor = 0.45_f64.powf(0.6);
    assert!((factor - 0.6193).abs() < 1e-4);
    let expected = [
        3.0,
        3.0 * -0.35 * factor,
        3.0 * -0.4 * factor,
        3.0 * -0.25 * factor,
        3.0 * -0.3 * factor,
    ];
    assert_values_close(values, expected, 1e-9);
    assert_values_close(values, [3.0, -0.650, -0.743, -0.465, -0.557], 1e-3);
}

#[test]
fn test_zero_managed_area_only_timber_moves() {
    let input = InputSnapshot {
        managed_area: Some(0.0),
        ..snapshot(2.5, Regime::SmallOpening)
    };
    let values = compute_impact(Trigger::DriverChanged, &input);
    assert_values_close(values, [2.5, 0.0, 0.0, 0.0, 0.0], 1e-12);
}

#[test]
fn test_fragile_ecosystem_doubles_derived_values() {
    let neutral = compute_impact(Trigger::DriverChanged, &snapshot(1.0, Regime::Clearcut));
    let fragile = compute_impact(
        Trigger::DriverChanged,
        &InputSnapshot {
            resilience: -5,
            ..snapshot(1.0, Regime::Clearcut)
        },
    );
    for service in Service::ALL.into_iter().filter(|s| !s.is_driver()) {
        assert!(
            (fragile[service] - 2.0 * neutral[service]).abs() < 1e-12,
            "{} should double",
            service.name()
        );
    }
    assert_eq!(fragile[Service::Timber], 1.0);
}

#[test]
fn test_negative_managed_area_stays_finite() {
    let input = InputSnapshot {
        managed_area: Some(-20.0),
        ..snapshot(3.0, Regime::Clearcut)
    };
    let values = compute_impact(Trigger::DriverChanged, &input);
    assert!(values.0.iter().all(|v| v.is_finite()));
    assert_values_close(values, [3.0, 0.0, 0.0, 0.0, 0.0], 1e-12);
}

// -------------------------------------------------------------------------
// Invariants across the input space
// -------------------------------------------------------------------------

#[test]
fn test_driver_echo_and_clamp_invariants() {
    let timbers = [-12.0, -5.0, -0.3, 0.0, 0.1, 2.7, 5.0, 5.1, 40.0];
    for regime in Regime::ALL {
        for &timber in &timbers {
            for resilience in -7..=7 {
                for managed in [0.0, 10.0, 55.0, 100.0, 450.0] {
                    let input = InputSnapshot {
                        timber_value: timber,
                        regime,
                        total_area: Some(100.0),
                        managed_area: Some(managed),
                        resilience,
                    };
                    let values = compute_impact(Trigger::DriverChanged, &input);
                    assert_eq!(values[Service::Timber], timber.clamp(-5.0, 5.0));
                    for (service, v) in values.iter() {
                        assert!(
                            (SERVICE_VALUE_MIN..=SERVICE_VALUE_MAX).contains(&v),
                            "{} = {v} escaped the clamp",
                            service.name()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_timber_inside_range_echoed_verbatim() {
    let mut timber = 0.0;
    while timber <= 5.0 {
        let values = compute_impact(Trigger::DriverChanged, &snapshot(timber, Regime::SmallOpening));
        assert_eq!(values.0[0], timber);
        timber += 0.1;
    }
}

#[test]
fn test_large_timber_saturates_derived_services() {
    let values = compute_impact(Trigger::DriverChanged, &snapshot(50.0, Regime::Clearcut));
    assert_values_close(values, [5.0, -5.0, -5.0, -5.0, -5.0], 1e-12);
}

#[test]
fn test_magnitude_grows_with_managed_area() {
    for regime in Regime::ALL {
        let mut previous = [0.0_f64; 4];
        for managed in (0..=100).step_by(5) {
            let input = InputSnapshot {
                managed_area: Some(managed as f64),
                ..snapshot(1.5, regime)
            };
            let values = compute_impact(Trigger::DriverChanged, &input);
            for (k, prev) in previous.iter_mut().enumerate() {
                let magnitude = values.0[k + 1].abs();
                assert!(
                    magnitude >= *prev,
                    "{} service {} shrank at managed {managed}",
                    regime.label(),
                    k + 1
                );
                *prev = magnitude;
            }
        }
    }
}

#[test]
fn test_regime_ordering_of_derived_magnitudes() {
    for managed in [5.0, 30.0, 100.0] {
        for resilience in [-5, 0, 5] {
            let magnitudes: Vec<[f64; 5]> = Regime::ALL
                .iter()
                .map(|&regime| {
                    let input = InputSnapshot {
                        managed_area: Some(managed),
                        resilience,
                        ..snapshot(2.0, regime)
                    };
                    compute_impact(Trigger::DriverChanged, &input).0.map(f64::abs)
                })
                .collect();
            for service in 1..5 {
                assert!(magnitudes[0][service] >= magnitudes[1][service]);
                assert!(magnitudes[1][service] >= magnitudes[2][service]);
            }
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let input = InputSnapshot {
        managed_area: Some(37.0),
        resilience: -3,
        ..snapshot(4.4, Regime::SmallOpening)
    };
    let first = compute_impact(Trigger::DriverChanged, &input);
    let second = compute_impact(Trigger::DriverChanged, &input);
    assert_eq!(first, second);
}

// -------------------------------------------------------------------------
// Serialized shape
// -------------------------------------------------------------------------

#[test]
fn test_service_values_serialize_as_array() {
    let json = serde_json::to_string(&ServiceValues([3.0, -2.0, 0.5, 0.0, 1.0]))
        .expect("service values serialize");
    assert_eq!(json, "[3.0,-2.0,0.5,0.0,1.0]");
}

#[test]
fn test_snapshot_serializes_regime_by_name() {
    let json = serde_json::to_value(snapshot(1.0, Regime::SelectiveCut))
        .expect("snapshot serializes");
    assert_eq!(json["regime"], "SelectiveCut");
    assert_eq!(json["total_area"], 100.0);
}
