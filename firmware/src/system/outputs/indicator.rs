use daisy::led::Led as _;
use metronome_control::display::Snapshot;

pub type Led = daisy::led::LedUser;

/// Minimal presentation of the display snapshot on the status LED.
///
/// The LED blinks along with the edited digit while editing, otherwise it
/// shows whether the vibration is enabled. The full snapshot is logged.
pub struct Indicator {
    led: Led,
}

impl Indicator {
    #[must_use]
    pub fn new(led: Led) -> Self {
        Self { led }
    }

    pub fn show(&mut self, snapshot: &Snapshot) {
        let lit = if snapshot.editing.is_some() {
            snapshot.blink_visible
        } else {
            snapshot.vibration
        };
        if lit {
            self.led.on();
        } else {
            self.led.off();
        }
        defmt::trace!("{:?}", snapshot);
    }
}
