//! Ordering of equalizer systems within the `Update` schedule.
//!
//! ```text
//! Input  →  Compute
//! ```
//!
//! * **Input** – Widgets read user interaction and emit `EqualizerEvent`s, or
//!   edit `EqualizerInputs` directly for the non-triggering controls.
//! * **Compute** – Pending events are folded into one trigger and the
//!   calculator runs, so outputs reflect the interaction in the same frame.

use bevy::prelude::*;

/// Ordered phases for equalizer systems in `Update`.
///
/// Configured as a chain: `Input` → `Compute`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EstimatorSet {
    /// Per-frame widget handling.
    Input,
    /// Impact recomputation on triggering events.
    Compute,
}
