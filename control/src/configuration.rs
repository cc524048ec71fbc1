//! Timing constants of the device.

use crate::output::Tone;
use crate::time::Millis;

/// Tweaking of the default device behavior.
///
/// All durations are in milliseconds. The default reflects the shipped
/// device, custom values are useful mainly in simulation and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Tempo set on power-on.
    pub initial_bpm: u32,
    /// Tapped history is forgotten after this long without a tap.
    pub tap_expiry: Millis,
    /// Presses shorter than this are taps.
    pub short_tap_below: Millis,
    /// Presses at least this long enter edit mode.
    pub edit_hold_from: Millis,
    /// Presses at least this long toggle vibration.
    pub vibration_hold_from: Millis,
    /// Idle time after which the edited digit moves to the right.
    pub edit_advance_after: Millis,
    pub downbeat_tone: Tone,
    pub beat_tone: Tone,
    pub click_duration: Millis,
    pub pulse_duration: Millis,
    /// Minimal interval between two display snapshots.
    pub render_interval: Millis,
    /// Interval of hiding and showing the edited digit.
    pub blink_interval: Millis,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            initial_bpm: 130,
            tap_expiry: 4000,
            short_tap_below: 600,
            edit_hold_from: 1000,
            vibration_hold_from: 4000,
            edit_advance_after: 5000,
            downbeat_tone: Tone {
                frequency: 1760,
                volume: 2,
            },
            beat_tone: Tone {
                frequency: 880,
                volume: 1,
            },
            click_duration: 60,
            pulse_duration: 50,
            render_interval: 80,
            blink_interval: 500,
        }
    }
}
