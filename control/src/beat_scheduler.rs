//! Fire beats in the interval given by the current tempo.

use crate::tempo::Tempo;
use crate::time::{self, Millis};

/// Length of the bar. The first beat of each bar is the downbeat.
pub const BEATS_PER_BAR: u8 = 4;

/// Keeps track of the next beat and the position within the bar.
///
/// The next beat is always scheduled relative to the moment the previous
/// one fired, using the tempo valid at that moment. Tempo changes therefore
/// apply from the immediately following beat and time lost while blocked by
/// outputs does not accumulate into a burst of beats.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeatScheduler {
    position: u8,
    next_beat: Option<Millis>,
}

/// A beat fired by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fired {
    pub position: u8,
}

impl Fired {
    #[must_use]
    pub fn is_downbeat(self) -> bool {
        self.position == 0
    }
}

impl BeatScheduler {
    /// Evaluate the schedule, firing at most one beat.
    ///
    /// The first call only schedules the first beat one period ahead.
    pub fn tick(&mut self, now: Millis, tempo: Tempo) -> Option<Fired> {
        let Some(next_beat) = self.next_beat else {
            self.next_beat = Some(now.wrapping_add(tempo.period()));
            return None;
        };

        if !time::reached(now, next_beat) {
            return None;
        }

        let fired = Fired {
            position: self.position,
        };
        self.position = (self.position + 1) % BEATS_PER_BAR;
        self.next_beat = Some(now.wrapping_add(tempo.period()));

        Some(fired)
    }

    /// Position of the upcoming beat within the bar.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub fn next_beat(&self) -> Option<Millis> {
        self.next_beat
    }
}
