//! Layout constants and formatting helpers for the equalizer panel.

use bevy_egui::egui;

use estimator::impact::ImpactBreakdown;
use estimator::services::Service;

/// Height of each vertical service slider, in points.
pub const SERVICE_SLIDER_HEIGHT: f32 = 260.0;

/// Width reserved for one service column.
pub const SERVICE_COLUMN_WIDTH: f32 = 110.0;

/// Slider colour for a service.
pub fn service_color(service: Service) -> egui::Color32 {
    let (r, g, b) = service.color_rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Signed one-decimal readout shown under each service slider.
pub fn format_service_value(value: f64) -> String {
    // Avoid printing "-0.0" for derived services that are exactly zero.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:+.1}", value)
}

/// One-line summary of the scaling behind the current outputs.
pub fn breakdown_summary(breakdown: &ImpactBreakdown) -> String {
    format!(
        "Managed {:.0}% | Impact factor {:.2} | Condition x{:.2}",
        breakdown.managed_fraction * 100.0,
        breakdown.impact_factor,
        breakdown.condition_multiplier
    )
}

/// Caption under the integrity slider for a resilience value.
pub fn integrity_label(resilience: i32) -> &'static str {
    match resilience {
        i32::MIN..=-3 => "Fragile",
        -2..=2 => "Neutral",
        _ => "Resilient",
    }
}
