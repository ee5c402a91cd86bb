use crate::regime::Regime;

/// Timber slider range and resolution.
pub const TIMBER_MIN: f64 = 0.0;
pub const TIMBER_MAX: f64 = 5.0;
pub const TIMBER_STEP: f64 = 0.1;

/// Range of the derived service sliders (matches the calculator clamp).
pub const DERIVED_SERVICE_MIN: f64 = -5.0;
pub const DERIVED_SERVICE_MAX: f64 = 5.0;

/// Ecosystem integrity slider: -5 (fragile) to 5 (resilient), integer steps.
pub const RESILIENCE_MIN: i32 = -5;
pub const RESILIENCE_MAX: i32 = 5;
pub const DEFAULT_RESILIENCE: i32 = 0;

/// Assessment area input (hectares).
pub const DEFAULT_TOTAL_AREA_HA: f64 = 100.0;
pub const MIN_TOTAL_AREA_HA: f64 = 1.0;

/// Managed area input (hectares).
pub const DEFAULT_MANAGED_AREA_HA: f64 = 100.0;
pub const MIN_MANAGED_AREA_HA: f64 = 0.0;

/// Step of both area inputs.
pub const AREA_STEP_HA: f64 = 1.0;

pub const DEFAULT_REGIME: Regime = Regime::Clearcut;
