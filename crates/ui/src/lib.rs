use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use estimator::EstimatorSet;

pub mod equalizer_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_equalizer_theme)
            .add_systems(
                Update,
                equalizer_panel::equalizer_panel_ui.in_set(EstimatorSet::Input),
            );
    }
}
