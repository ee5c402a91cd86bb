//! Ecosystem Service Equalizer panel.
//!
//! Lays out the controls top to bottom:
//! - Assessment and managed area inputs (hectares)
//! - Management regime radio buttons
//! - Ecosystem integrity slider, Fragile to Resilient
//! - Five vertical service sliders; only Timber is draggable
//! - Reset button
//!
//! Dragging Timber and pressing Reset emit `EqualizerEvent`s. Every other
//! control edits `EqualizerInputs` in place and waits for the next trigger.

mod panels;
pub mod types;
mod ui_system;

pub use ui_system::equalizer_panel_ui;
