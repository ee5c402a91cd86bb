//! Forest management regimes and their service correlation tables.
//!
//! There is exactly one stored correlation matrix, the Clearcut baseline. The
//! gentler regimes scale the whole baseline by a per-regime factor and carry an
//! independently smaller regime weight:
//!
//! | Regime        | Matrix scale | Regime weight |
//! |---------------|--------------|---------------|
//! | Clearcut      | 1.00         | 1.00          |
//! | Small Opening | 0.65         | 0.60          |
//! | Selective Cut | 0.50         | 0.45          |
//!
//! Matrices are derived on lookup, so edits to the baseline reach every regime.

mod constants;
mod types;


pub use constants::BASELINE_CORRELATION;
pub use types::*;
