//! Individual UI sections of the equalizer panel.

use bevy_egui::egui;

use estimator::config::*;
use estimator::equalizer::{EqualizerInputs, ServiceOutputs};
use estimator::regime::Regime;
use estimator::services::Service;

use super::types::{
    breakdown_summary, format_service_value, integrity_label, service_color,
    SERVICE_COLUMN_WIDTH, SERVICE_SLIDER_HEIGHT,
};

/// Assessment and managed area inputs.
pub fn render_area_inputs(ui: &mut egui::Ui, inputs: &mut EqualizerInputs) {
    ui.horizontal(|ui| {
        ui.label("Assessment area (ha):");
        let mut total = inputs.total_area.unwrap_or(DEFAULT_TOTAL_AREA_HA);
        if ui
            .add(
                egui::DragValue::new(&mut total)
                    .range(MIN_TOTAL_AREA_HA..=f64::MAX)
                    .speed(AREA_STEP_HA),
            )
            .changed()
        {
            inputs.total_area = Some(total);
        }

        ui.add_space(20.0);

        ui.label("Managed area (ha):");
        let mut managed = inputs.managed_area.unwrap_or(MIN_MANAGED_AREA_HA);
        if ui
            .add(
                egui::DragValue::new(&mut managed)
                    .range(MIN_MANAGED_AREA_HA..=f64::MAX)
                    .speed(AREA_STEP_HA),
            )
            .changed()
        {
            inputs.managed_area = Some(managed);
        }
    });
}

/// Regime radio buttons.
pub fn render_regime_selector(ui: &mut egui::Ui, inputs: &mut EqualizerInputs) {
    ui.horizontal(|ui| {
        for regime in Regime::ALL {
            ui.radio_value(&mut inputs.regime, regime, regime.label());
            ui.add_space(30.0);
        }
    });
}

/// Ecosystem integrity slider with Fragile / Resilient captions.
pub fn render_integrity(ui: &mut egui::Ui, inputs: &mut EqualizerInputs) {
    ui.strong("Ecosystem Integrity");
    ui.add(
        egui::Slider::new(&mut inputs.resilience, RESILIENCE_MIN..=RESILIENCE_MAX)
            .step_by(1.0)
            .show_value(false),
    );
    ui.horizontal(|ui| {
        ui.label("Fragile");
        ui.add_space(ui.spacing().slider_width - 110.0);
        ui.label("Resilient");
    });
    ui.small(format!(
        "{} ({:+})",
        integrity_label(inputs.resilience),
        inputs.resilience
    ));
}

/// The five service sliders. Returns the new Timber value when the user
/// dragged it this frame.
pub fn render_service_sliders(
    ui: &mut egui::Ui,
    timber_value: f64,
    outputs: &ServiceOutputs,
) -> Option<f64> {
    let mut moved = None;

    ui.horizontal(|ui| {
        for service in Service::ALL {
            ui.allocate_ui(egui::vec2(SERVICE_COLUMN_WIDTH, SERVICE_SLIDER_HEIGHT + 60.0), |ui| {
                ui.vertical_centered(|ui| {
                    ui.colored_label(service_color(service), service.name());
                    ui.spacing_mut().slider_width = SERVICE_SLIDER_HEIGHT;

                    if service.is_driver() {
                        let mut value = timber_value;
                        let response = ui.add(
                            egui::Slider::new(&mut value, TIMBER_MIN..=TIMBER_MAX)
                                .step_by(TIMBER_STEP)
                                .vertical()
                                .show_value(false),
                        );
                        if response.changed() {
                            moved = Some(value);
                        }
                        ui.label(format_service_value(value));
                    } else {
                        let mut shown = outputs.values.get(service);
                        ui.add_enabled(
                            false,
                            egui::Slider::new(
                                &mut shown,
                                DERIVED_SERVICE_MIN..=DERIVED_SERVICE_MAX,
                            )
                            .vertical()
                            .show_value(false),
                        );
                        ui.label(format_service_value(shown));
                    }
                });
            });
        }
    });

    moved
}

/// Read-only line describing the scaling of the last result.
pub fn render_breakdown(ui: &mut egui::Ui, outputs: &ServiceOutputs) {
    match &outputs.breakdown {
        Some(breakdown) => {
            ui.small(breakdown_summary(breakdown));
        }
        None => {
            ui.small("Move the Timber slider to estimate impacts");
        }
    }
}
