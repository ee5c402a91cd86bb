//! Constants for the impact calculation.

/// Exponent of the concave managed-area response.
pub const GAMMA: f64 = 0.6;

/// Lower bound of every displayed service value.
pub const SERVICE_VALUE_MIN: f64 = -5.0;

/// Upper bound of every displayed service value.
pub const SERVICE_VALUE_MAX: f64 = 5.0;

/// Resilience control points `(resilience, condition multiplier)`, ascending.
/// Fragile ecosystems double the impact; resilient ones halve it.
pub const CONDITION_CONTROL_POINTS: [(f64, f64); 3] = [(-5.0, 2.0), (0.0, 1.0), (5.0, 0.5)];
