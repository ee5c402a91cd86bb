use bevy_egui::{egui, EguiContexts};

/// Light theme with a forest-green accent and larger text for the sliders.
pub fn apply_equalizer_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let accent = egui::Color32::from_rgb(34, 139, 34);
    let hover = egui::Color32::from_rgb(200, 225, 200);

    style.visuals.panel_fill = egui::Color32::WHITE;
    style.visuals.window_fill = egui::Color32::WHITE;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(22.0));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(16.0));
    style.spacing.slider_width = 220.0;

    ctx.set_style(style);
}
