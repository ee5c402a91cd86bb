//! Bevy systems driving the impact calculator from equalizer events.

use bevy::prelude::*;

use crate::impact::{evaluate_impact, CalculatorState, Trigger};
use crate::services::Service;

use super::state::{EqualizerInputs, ServiceOutputs};
use super::types::{EqualizerEvent, PendingTrigger};

/// Startup system: first-render evaluation with no trigger, which leaves the
/// outputs at the zero vector.
pub fn initialize_outputs(inputs: Res<EqualizerInputs>, mut outputs: ResMut<ServiceOutputs>) {
    let evaluation = evaluate_impact(Trigger::None, &inputs.snapshot());
    outputs.record(Trigger::None, evaluation);
}

/// Fold this frame's events into one trigger and recompute.
///
/// Frames without a triggering event leave the outputs untouched, even if
/// regime, area or resilience changed.
pub fn apply_equalizer_events(
    mut events: EventReader<EqualizerEvent>,
    mut inputs: ResMut<EqualizerInputs>,
    mut outputs: ResMut<ServiceOutputs>,
) {
    let pending = PendingTrigger::fold(events.read());
    if pending.trigger == Trigger::None {
        return;
    }

    if let Some(timber_value) = pending.timber_value {
        inputs.timber_value = timber_value;
    }

    let snapshot = inputs.snapshot();
    let evaluation = evaluate_impact(pending.trigger, &snapshot);

    match (pending.trigger, evaluation.state) {
        (Trigger::ResetPressed, _) => info!("Equalizer reset"),
        (_, CalculatorState::Idle) => warn!(
            "Equalizer: total area {:?} is not positive, showing zero vector",
            snapshot.total_area
        ),
        _ => debug!(
            "Equalizer: timber {:.1} under {} -> {:?}",
            snapshot.timber_value,
            snapshot.regime.label(),
            evaluation.values.0
        ),
    }

    // The Timber slider displays its own output.
    inputs.timber_value = evaluation.values[Service::Timber];
    outputs.record(pending.trigger, evaluation);
}
