use bevy::prelude::*;

use super::state::{EqualizerInputs, ServiceOutputs};
use super::systems::{apply_equalizer_events, initialize_outputs};
use super::types::EqualizerEvent;

pub struct EqualizerPlugin;

impl Plugin for EqualizerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EqualizerInputs>()
            .init_resource::<ServiceOutputs>()
            .add_event::<EqualizerEvent>()
            .add_systems(Startup, initialize_outputs)
            .add_systems(
                Update,
                apply_equalizer_events.in_set(crate::EstimatorSet::Compute),
            );
    }
}
