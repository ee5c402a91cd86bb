//! `EqualizerInputs` and `ServiceOutputs` resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::*;
use crate::impact::{
    CalculatorState, ImpactBreakdown, ImpactEvaluation, InputSnapshot, ServiceValues, Trigger,
};
use crate::regime::Regime;

/// Current value of every equalizer control.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EqualizerInputs {
    /// Timber slider position; mirrors the last computed Timber output.
    pub timber_value: f64,
    pub regime: Regime,
    /// Assessment area (ha). `None` while the field is blank.
    pub total_area: Option<f64>,
    /// Managed area (ha). `None` while the field is blank.
    pub managed_area: Option<f64>,
    pub resilience: i32,
}

impl Default for EqualizerInputs {
    fn default() -> Self {
        Self {
            timber_value: TIMBER_MIN,
            regime: DEFAULT_REGIME,
            total_area: Some(DEFAULT_TOTAL_AREA_HA),
            managed_area: Some(DEFAULT_MANAGED_AREA_HA),
            resilience: DEFAULT_RESILIENCE,
        }
    }
}

impl EqualizerInputs {
    /// Freeze the current controls for one calculator invocation.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            timber_value: self.timber_value,
            regime: self.regime,
            total_area: self.total_area,
            managed_area: self.managed_area,
            resilience: self.resilience,
        }
    }
}

/// Most recent calculator result, read by the service sliders.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ServiceOutputs {
    pub values: ServiceValues,
    pub state: CalculatorState,
    /// Scaling quantities of the last computed result.
    pub breakdown: Option<ImpactBreakdown>,
    /// Trigger that produced the current values.
    pub last_trigger: Trigger,
    /// Incremented on every invocation, so widgets can detect updates cheaply.
    pub generation: u32,
}

impl Default for ServiceOutputs {
    fn default() -> Self {
        Self {
            values: ServiceValues::ZERO,
            state: CalculatorState::Idle,
            breakdown: None,
            last_trigger: Trigger::None,
            generation: 0,
        }
    }
}

impl ServiceOutputs {
    /// Store the result of one invocation.
    pub fn record(&mut self, trigger: Trigger, evaluation: ImpactEvaluation) {
        self.values = evaluation.values;
        self.state = evaluation.state;
        self.breakdown = evaluation.breakdown;
        self.last_trigger = trigger;
        self.generation = self.generation.wrapping_add(1);
    }
}
