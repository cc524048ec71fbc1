//! Abstraction of all outputs of the metronome.
//!
//! Both the click and the vibration pulse block the caller for their whole
//! duration. The control loop is paused meanwhile.

mod indicator;
mod speaker;
mod vibration;

use metronome_control::DesiredOutput;

pub use self::indicator::{Indicator, Led as IndicatorLed};
pub use self::speaker::{Pin as SpeakerPin, Speaker};
pub use self::vibration::{Pin as VibrationPin, Vibration};

pub struct Outputs {
    pub speaker: Speaker,
    pub vibration: Vibration,
    pub indicator: Indicator,
}

pub struct Config {
    pub speaker: SpeakerPin,
    pub vibration: VibrationPin,
    pub indicator: IndicatorLed,
}

impl Outputs {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            speaker: Speaker::new(config.speaker),
            vibration: Vibration::new(config.vibration),
            indicator: Indicator::new(config.indicator),
        }
    }

    pub fn set(&mut self, desired: &DesiredOutput) {
        if let Some(beat) = desired.beat {
            if let Some(pulse) = beat.pulse {
                self.vibration.pulse(&pulse);
            }
            self.speaker.play(&beat.click);
        }
        if let Some(snapshot) = desired.display {
            self.indicator.show(&snapshot);
        }
    }
}
