//! Equalizer state shared between the widgets and the impact calculator.
//!
//! `EqualizerInputs` holds the current control values. Only two interactions
//! trigger a recomputation, both delivered as `EqualizerEvent`s:
//!
//! - **TimberChanged**: the driver slider moved.
//! - **ResetPressed**: the Reset button was activated.
//!
//! Regime, area and resilience edits go straight into `EqualizerInputs` and
//! are picked up the next time a trigger arrives. Each recomputation writes
//! `ServiceOutputs` and echoes the driver's output back into the Timber input.

mod plugin;
mod state;
mod systems;
mod types;


pub use plugin::EqualizerPlugin;
pub use state::*;
pub use systems::*;
pub use types::*;
