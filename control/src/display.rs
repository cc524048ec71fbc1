//! State handed over to the presentation layer.

use crate::configuration::Configuration;
use crate::tempo::{Digit, Tempo};
use crate::time::{self, Millis};

/// Timing of display redraws and of the edited digit blinking.
///
/// The display itself is drawn by the hardware layer. This only decides when
/// it is time to redraw and whether the edited digit is currently hidden.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Display {
    blink: Blink,
    last_render: Option<Millis>,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Blink {
    visible: bool,
    last_toggle: Millis,
}

/// Read-only view of the device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub tempo: Tempo,
    /// Position of the upcoming beat within the bar.
    pub position: u8,
    pub vibration: bool,
    /// The digit being edited, `None` when not editing.
    pub editing: Option<Digit>,
    /// Blink phase, the edited digit is hidden while this is false.
    pub blink_visible: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            blink: Blink {
                visible: true,
                last_toggle: 0,
            },
            last_render: None,
        }
    }
}

impl Display {
    /// Advance the blinking and tell whether a redraw is due.
    pub fn tick(&mut self, now: Millis, configuration: &Configuration) -> bool {
        if time::elapsed(now, self.blink.last_toggle) > configuration.blink_interval {
            self.blink.visible = !self.blink.visible;
            self.blink.last_toggle = now;
        }

        let render = match self.last_render {
            None => true,
            Some(last_render) => {
                time::elapsed(now, last_render) > configuration.render_interval
            }
        };
        if render {
            self.last_render = Some(now);
        }
        render
    }

    #[must_use]
    pub fn blink_visible(&self) -> bool {
        self.blink.visible
    }
}

impl Snapshot {
    /// Digits of the tempo as they should be shown, hidden ones are `None`.
    #[must_use]
    pub fn visible_digits(&self) -> [Option<u8>; 3] {
        let mut digits = self.tempo.digits().map(Some);
        if let Some(hidden) = self.hidden_digit() {
            digits[hidden.index()] = None;
        }
        digits
    }

    #[must_use]
    pub fn hidden_digit(&self) -> Option<Digit> {
        if self.blink_visible {
            None
        } else {
            self.editing
        }
    }
}
