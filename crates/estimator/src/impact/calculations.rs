//! Pure helper functions for the impact calculation.

use crate::regime::Regime;
use crate::services::{Service, SERVICE_COUNT};

use super::constants::*;
use super::types::*;

/// Share of the assessment area under management.
///
/// Returns 0.0 unless both areas are present and non-zero. Not capped at 1.0.
pub fn managed_fraction(managed_area: Option<f64>, total_area: Option<f64>) -> f64 {
    match (managed_area, total_area) {
        (Some(managed), Some(total)) if managed != 0.0 && total != 0.0 => managed / total,
        _ => 0.0,
    }
}

/// Concave response to the weighted managed fraction: `raw_factor ^ GAMMA`.
/// Negative inputs are floored at zero so the result is always finite.
pub fn impact_factor(raw_factor: f64) -> f64 {
    raw_factor.max(0.0).powf(GAMMA)
}

/// Linearly interpolate `x` over three ascending control points, holding the
/// end values outside the covered range.
pub fn interpolate_clamped(x: f64, points: &[(f64, f64); 3]) -> f64 {
    let [(x0, y0), (x1, y1), (x2, y2)] = *points;
    if x <= x0 {
        return y0;
    }
    if x >= x2 {
        return y2;
    }
    if x <= x1 {
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    } else {
        y1 + (x - x1) / (x2 - x1) * (y2 - y1)
    }
}

/// Impact multiplier for an ecosystem's resilience: 2.0 at -5, 1.0 at 0,
/// 0.5 at 5, clamped beyond.
pub fn condition_multiplier(resilience: i32) -> f64 {
    interpolate_clamped(resilience as f64, &CONDITION_CONTROL_POINTS)
}

/// Clip a value into the displayable service range.
pub fn clamp_service_value(value: f64) -> f64 {
    value.clamp(SERVICE_VALUE_MIN, SERVICE_VALUE_MAX)
}

/// Scaling quantities for `input`, independent of the trigger.
pub fn impact_breakdown(input: &InputSnapshot) -> ImpactBreakdown {
    let managed_fraction = managed_fraction(input.managed_area, input.total_area);
    let regime_weight = input.regime.weight();
    let raw_factor = managed_fraction * regime_weight;
    ImpactBreakdown {
        managed_fraction,
        regime_weight,
        raw_factor,
        impact_factor: impact_factor(raw_factor),
        condition_multiplier: condition_multiplier(input.resilience),
    }
}

/// Derived service values from the regime's Timber row. Index 0 carries the
/// timber input itself and the whole vector is clamped afterwards.
pub fn service_values(
    timber_value: f64,
    regime: Regime,
    breakdown: &ImpactBreakdown,
) -> ServiceValues {
    let row = regime.correlation_row(Service::Timber);
    let mut result = [0.0; SERVICE_COUNT];
    for (value, coefficient) in result.iter_mut().zip(row) {
        *value =
            coefficient * timber_value * breakdown.impact_factor * breakdown.condition_multiplier;
    }
    result[Service::Timber.index()] = timber_value;
    ServiceValues(result.map(clamp_service_value))
}

fn has_valid_total_area(total_area: Option<f64>) -> bool {
    matches!(total_area, Some(total) if total > 0.0)
}

/// Run the calculator for one trigger, keeping the intermediate breakdown.
pub fn evaluate_impact(trigger: Trigger, input: &InputSnapshot) -> ImpactEvaluation {
    if trigger == Trigger::None || !has_valid_total_area(input.total_area) {
        return ImpactEvaluation::idle();
    }
    if trigger == Trigger::ResetPressed {
        return ImpactEvaluation::idle();
    }

    let breakdown = impact_breakdown(input);
    ImpactEvaluation {
        state: CalculatorState::Computed,
        values: service_values(input.timber_value, input.regime, &breakdown),
        breakdown: Some(breakdown),
    }
}

/// The five service values for one trigger.
pub fn compute_impact(trigger: Trigger, input: &InputSnapshot) -> ServiceValues {
    evaluate_impact(trigger, input).values
}
