use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

/// Overrides the default log filter, e.g. `EQUALIZER_LOG=estimator=debug`.
const LOG_FILTER_ENV: &str = "EQUALIZER_LOG";

const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,estimator=info";

fn main() {
    let filter = std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Ecosystem Service Equalizer".to_string(),
                    resolution: (900.0, 760.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter,
                ..default()
            }),
    )
    // The equalizer is idle between interactions; only redraw on input.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(500)),
    })
    .add_plugins((estimator::EstimatorPlugin, ui::UiPlugin))
    .add_systems(Startup, spawn_camera);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
