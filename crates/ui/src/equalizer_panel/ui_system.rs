//! Main equalizer panel UI system.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estimator::equalizer::{EqualizerEvent, EqualizerInputs, ServiceOutputs};

use super::panels;

/// Draws the equalizer and forwards triggering interactions.
///
/// Non-triggering controls are edited on a copy and written back only when
/// they changed, so `EqualizerInputs` change detection stays meaningful.
pub fn equalizer_panel_ui(
    mut contexts: EguiContexts,
    mut inputs: ResMut<EqualizerInputs>,
    outputs: Res<ServiceOutputs>,
    mut events: EventWriter<EqualizerEvent>,
) {
    let mut edited = *inputs;
    let mut moved_timber = None;
    let mut reset_clicked = false;

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Ecosystem Service Equalizer");
        });
        ui.add_space(12.0);

        panels::render_area_inputs(ui, &mut edited);
        ui.add_space(12.0);

        panels::render_regime_selector(ui, &mut edited);
        ui.add_space(12.0);

        panels::render_integrity(ui, &mut edited);
        ui.add_space(20.0);
        ui.separator();

        moved_timber = panels::render_service_sliders(ui, edited.timber_value, &outputs);

        ui.add_space(8.0);
        panels::render_breakdown(ui, &outputs);

        ui.add_space(20.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            reset_clicked = ui.button("Reset").clicked();
        });
    });

    if edited != *inputs {
        *inputs = edited;
    }
    if let Some(value) = moved_timber {
        events.send(EqualizerEvent::TimberChanged(value));
    }
    if reset_clicked {
        events.send(EqualizerEvent::ResetPressed);
    }
}
