use serde::{Deserialize, Serialize};

use crate::services::{Service, SERVICE_COUNT};

use super::constants::*;

/// A 5x5 service correlation table.
pub type CorrelationMatrix = [[f64; SERVICE_COUNT]; SERVICE_COUNT];

/// Management-intensity scenario selected on the equalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Regime {
    #[default]
    Clearcut,
    SmallOpening,
    SelectiveCut,
}

impl Regime {
    /// All regimes in the order the selector lists them.
    pub const ALL: [Regime; 3] = [Regime::Clearcut, Regime::SmallOpening, Regime::SelectiveCut];

    pub fn label(self) -> &'static str {
        match self {
            Regime::Clearcut => "Clearcut",
            Regime::SmallOpening => "Small Opening",
            Regime::SelectiveCut => "Selective Cut",
        }
    }

    /// Factor applied to every baseline coefficient for this regime.
    pub fn matrix_scale(self) -> f64 {
        match self {
            Regime::Clearcut => CLEARCUT_MATRIX_SCALE,
            Regime::SmallOpening => SMALL_OPENING_MATRIX_SCALE,
            Regime::SelectiveCut => SELECTIVE_CUT_MATRIX_SCALE,
        }
    }

    /// Overall disturbance intensity relative to Clearcut, in (0, 1].
    pub fn weight(self) -> f64 {
        match self {
            Regime::Clearcut => CLEARCUT_WEIGHT,
            Regime::SmallOpening => SMALL_OPENING_WEIGHT,
            Regime::SelectiveCut => SELECTIVE_CUT_WEIGHT,
        }
    }

    /// The regime's correlation matrix, derived from the baseline.
    pub fn correlation_matrix(self) -> CorrelationMatrix {
        let scale = self.matrix_scale();
        let mut matrix = BASELINE_CORRELATION;
        for row in matrix.iter_mut() {
            for coefficient in row.iter_mut() {
                *coefficient *= scale;
            }
        }
        matrix
    }

    /// Row of the derived matrix describing how changes in `service` correlate
    /// with every service, itself included.
    pub fn correlation_row(self, service: Service) -> [f64; SERVICE_COUNT] {
        let scale = self.matrix_scale();
        BASELINE_CORRELATION[service.index()].map(|c| c * scale)
    }
}
