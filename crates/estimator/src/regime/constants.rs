//! Constants for the regime tables.

use crate::services::SERVICE_COUNT;

/// Clearcut correlation matrix. Row/column order follows `Service::ALL`.
/// Symmetric with a unit diagonal.
pub const BASELINE_CORRELATION: [[f64; SERVICE_COUNT]; SERVICE_COUNT] = [
    [1.0, -0.7, -0.8, -0.5, -0.6],
    [-0.7, 1.0, 0.6, 0.7, 0.5],
    [-0.8, 0.6, 1.0, 0.5, -0.3],
    [-0.5, 0.7, 0.5, 1.0, 0.6],
    [-0.6, 0.5, -0.3, 0.6, 1.0],
];

pub(crate) const CLEARCUT_MATRIX_SCALE: f64 = 1.0;
pub(crate) const SMALL_OPENING_MATRIX_SCALE: f64 = 0.65;
pub(crate) const SELECTIVE_CUT_MATRIX_SCALE: f64 = 0.50;

pub(crate) const CLEARCUT_WEIGHT: f64 = 1.0;
pub(crate) const SMALL_OPENING_WEIGHT: f64 = 0.6;
pub(crate) const SELECTIVE_CUT_WEIGHT: f64 = 0.45;
