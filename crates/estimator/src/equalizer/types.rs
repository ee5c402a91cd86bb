use bevy::prelude::*;

use crate::impact::Trigger;

/// Event fired by the widgets for each triggering interaction.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum EqualizerEvent {
    /// The Timber slider moved to this value.
    TimberChanged(f64),
    /// The Reset button was pressed.
    ResetPressed,
}

/// A frame's worth of events reduced to a single trigger.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PendingTrigger {
    pub trigger: Trigger,
    /// Last timber value seen in the batch, if any.
    pub timber_value: Option<f64>,
}

impl PendingTrigger {
    /// Fold events in arrival order. The last timber value wins and any reset
    /// overrides driver changes in the same batch.
    pub fn fold<'a>(events: impl IntoIterator<Item = &'a EqualizerEvent>) -> Self {
        let mut timber_value = None;
        let mut reset_pressed = false;
        for event in events {
            match *event {
                EqualizerEvent::TimberChanged(value) => timber_value = Some(value),
                EqualizerEvent::ResetPressed => reset_pressed = true,
            }
        }
        Self {
            trigger: Trigger::from_flags(timber_value.is_some(), reset_pressed),
            timber_value,
        }
    }
}
