//! The whole state of the device and its single tick.

use crate::beat_scheduler::{BeatScheduler, Fired};
use crate::configuration::Configuration;
use crate::display::{Display, Snapshot as DisplaySnapshot};
use crate::edit::{Edit, Transition};
use crate::input::button::{Action, Button};
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::log;
use crate::output::{Beat, Click, DesiredOutput, Pulse};
use crate::tap_detector::TapDetector;
use crate::tempo::Tempo;
use crate::time::Millis;

/// The main store of the device state.
///
/// This struct is the central piece of the control package. It takes
/// `InputSnapshot` once per control loop tick, interprets button gestures,
/// manages tempo, tap detection and editing, and decides when to fire a
/// beat and redraw the display.
///
/// It is meant to be constructed once on power-on and live until power-off.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Metronome {
    configuration: Configuration,
    tempo: Tempo,
    vibration: bool,
    button: Button,
    tap_detector: TapDetector,
    edit: Edit,
    beat_scheduler: BeatScheduler,
    display: Display,
}

impl Default for Metronome {
    fn default() -> Self {
        Self::new()
    }
}

impl Metronome {
    #[must_use]
    pub fn new() -> Self {
        Self::with_configuration(Configuration::default())
    }

    #[must_use]
    pub fn with_configuration(configuration: Configuration) -> Self {
        Self {
            tempo: Tempo::new(configuration.initial_bpm),
            vibration: false,
            button: Button::default(),
            tap_detector: TapDetector::default(),
            edit: Edit::default(),
            beat_scheduler: BeatScheduler::default(),
            display: Display::default(),
            configuration,
        }
    }

    pub fn apply_input_snapshot(&mut self, snapshot: InputSnapshot) -> DesiredOutput {
        let now = snapshot.now;

        if let Some(action) = self.button.update(snapshot.button, now, &self.configuration) {
            self.apply_action(action, now);
        }

        self.advance_edit(now);

        self.tap_detector
            .reset_if_inactive(now, self.configuration.tap_expiry);

        let beat = self
            .beat_scheduler
            .tick(now, self.tempo)
            .map(|fired| self.cook_beat(fired));

        let display = if self.display.tick(now, &self.configuration) {
            Some(self.display_snapshot())
        } else {
            None
        };

        DesiredOutput { beat, display }
    }

    fn apply_action(&mut self, action: Action, now: Millis) {
        match action {
            Action::ShortTap => {
                if let Some(tempo) = self.edit.increment(self.tempo, now) {
                    log::info!("Setting edited tempo={:?}", tempo.bpm());
                    self.tempo = tempo;
                } else if let Some(bpm) = self.tap_detector.trigger(now) {
                    self.tempo = Tempo::new(bpm);
                    log::info!("Setting tapped tempo={:?}", self.tempo.bpm());
                }
            }
            Action::EnterEdit => {
                log::info!("Entering edit mode");
                self.edit.enter(now);
            }
            Action::ToggleVibration => {
                self.vibration = !self.vibration;
                log::info!("Setting vibration={:?}", self.vibration);
            }
        }
    }

    fn advance_edit(&mut self, now: Millis) {
        match self.edit.tick(now, self.configuration.edit_advance_after) {
            Some(Transition::Advanced(digit)) => {
                log::info!("Advancing edit to digit={:?}", digit.index());
            }
            Some(Transition::Finished) => {
                log::info!("Leaving edit mode");
            }
            None => (),
        }
    }

    fn cook_beat(&self, fired: Fired) -> Beat {
        let downbeat = fired.is_downbeat();
        log::debug!("Firing beat position={:?}", fired.position);

        let tone = if downbeat {
            self.configuration.downbeat_tone
        } else {
            self.configuration.beat_tone
        };

        Beat {
            downbeat,
            position: fired.position,
            pulse: self.vibration.then_some(Pulse {
                duration: self.configuration.pulse_duration,
            }),
            click: Click {
                tone,
                duration: self.configuration.click_duration,
            },
        }
    }

    #[must_use]
    pub fn display_snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            tempo: self.tempo,
            position: self.beat_scheduler.position(),
            vibration: self.vibration,
            editing: self.edit.digit(),
            blink_visible: self.display.blink_visible(),
        }
    }

    #[must_use]
    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    #[must_use]
    pub fn vibration(&self) -> bool {
        self.vibration
    }

    #[must_use]
    pub fn edit(&self) -> Edit {
        self.edit
    }

    #[must_use]
    pub fn taps(&self) -> usize {
        self.tap_detector.taps()
    }
}
