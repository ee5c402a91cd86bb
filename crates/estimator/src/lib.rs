use bevy::prelude::*;

pub mod config;
pub mod equalizer;
pub mod estimator_sets;
pub mod impact;
pub mod regime;
pub mod services;

pub use estimator_sets::EstimatorSet;

pub struct EstimatorPlugin;

impl Plugin for EstimatorPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (EstimatorSet::Input, EstimatorSet::Compute).chain(),
        );

        app.add_plugins(equalizer::EqualizerPlugin);
    }
}
