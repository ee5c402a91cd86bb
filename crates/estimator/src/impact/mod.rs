//! Impact calculator: maps the equalizer controls to the five service values.
//!
//! Pipeline for a driver change:
//!
//! 1. managed fraction = managed area / total area
//! 2. raw factor = fraction * regime weight
//! 3. impact factor = raw factor ^ 0.6
//! 4. condition multiplier from resilience: -5 -> 2.0, 0 -> 1.0, 5 -> 0.5
//! 5. value[k] = timber row[k] * timber * impact factor * condition multiplier
//! 6. value[0] is overwritten with the timber input
//! 7. every value is clamped to [-5, 5]
//!
//! No trigger yet, a non-positive total area, or a reset all yield the zero
//! vector. Nothing here fails; degradation is value-based.

mod calculations;
mod constants;
mod types;

#[cfg(test)]
mod tests;

pub use calculations::*;
pub use constants::*;
pub use types::*;
