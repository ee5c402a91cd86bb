//! Value types passed into and out of the impact calculator.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::regime::Regime;
use crate::services::{Service, SERVICE_COUNT};

/// What caused the current invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Trigger {
    /// Nothing has changed yet (first render).
    #[default]
    None,
    /// The Timber value moved.
    DriverChanged,
    /// The reset control was activated.
    ResetPressed,
}

impl Trigger {
    /// Build the trigger for a batch of interactions. A reset wins over a
    /// simultaneous driver change.
    pub fn from_flags(driver_changed: bool, reset_pressed: bool) -> Self {
        if reset_pressed {
            Trigger::ResetPressed
        } else if driver_changed {
            Trigger::DriverChanged
        } else {
            Trigger::None
        }
    }
}

/// Control values read at the moment of a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub timber_value: f64,
    pub regime: Regime,
    /// Assessment area in hectares; `None` when the field is empty.
    pub total_area: Option<f64>,
    /// Managed area in hectares; `None` when the field is empty.
    pub managed_area: Option<f64>,
    /// Ecosystem integrity, -5 (fragile) to 5 (resilient).
    pub resilience: i32,
}

/// One value per service, indexed in `Service::ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceValues(pub [f64; SERVICE_COUNT]);

impl ServiceValues {
    pub const ZERO: ServiceValues = ServiceValues([0.0; SERVICE_COUNT]);

    pub fn get(&self, service: Service) -> f64 {
        self.0[service.index()]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Pairs each service with its value.
    pub fn iter(&self) -> impl Iterator<Item = (Service, f64)> + '_ {
        Service::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

impl Index<Service> for ServiceValues {
    type Output = f64;

    fn index(&self, service: Service) -> &f64 {
        &self.0[service.index()]
    }
}

/// Two-state view of the calculator from the collaborator's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalculatorState {
    /// Zero vector: not triggered yet, invalid area, or reset.
    #[default]
    Idle,
    /// Values computed from the current inputs.
    Computed,
}

/// Intermediate scaling quantities behind a computed vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    pub managed_fraction: f64,
    pub regime_weight: f64,
    pub raw_factor: f64,
    pub impact_factor: f64,
    pub condition_multiplier: f64,
}

/// Full result of one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvaluation {
    pub state: CalculatorState,
    pub values: ServiceValues,
    /// Present only when `state` is `Computed`.
    pub breakdown: Option<ImpactBreakdown>,
}

impl ImpactEvaluation {
    pub fn idle() -> Self {
        Self {
            state: CalculatorState::Idle,
            values: ServiceValues::ZERO,
            breakdown: None,
        }
    }
}
