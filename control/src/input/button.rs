//! Manage button's state.

use crate::configuration::Configuration;
use crate::time::{self, Millis};

/// Use this to hold button state over time.
///
/// Detects presses and releases and classifies each finished press by its
/// duration. Nothing is reported while the button remains held.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    press_start: Millis,
}

/// Action requested by a finished press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Short press, either a tempo tap or a digit increment.
    ShortTap,
    /// Medium hold, entering the digit editing.
    EnterEdit,
    /// Long hold, switching the vibration on or off.
    ToggleVibration,
}

impl Button {
    pub fn update(
        &mut self,
        down: bool,
        now: Millis,
        configuration: &Configuration,
    ) -> Option<Action> {
        let was_pressed = self.pressed;
        self.pressed = down;

        if !was_pressed && self.pressed {
            self.press_start = now;
            None
        } else if was_pressed && !self.pressed {
            classify(time::elapsed(now, self.press_start), configuration)
        } else {
            None
        }
    }
}

/// Map duration of a finished press to an action.
///
/// Presses between a short tap and an edit hold fall into a dead zone and
/// are ignored, so an accidentally prolonged tap does not start editing.
#[must_use]
pub fn classify(held: Millis, configuration: &Configuration) -> Option<Action> {
    if held < configuration.short_tap_below {
        Some(Action::ShortTap)
    } else if held >= configuration.vibration_hold_from {
        Some(Action::ToggleVibration)
    } else if held >= configuration.edit_hold_from {
        Some(Action::EnterEdit)
    } else {
        None
    }
}
