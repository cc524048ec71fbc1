//! Digit by digit editing of the tempo.

use crate::tempo::{Digit, Tempo};
use crate::time::{self, Millis};

/// State machine of the tempo editing.
///
/// Editing starts on the hundreds digit. Each short tap increments the
/// selected digit. Once left idle for long enough, the selection moves to
/// the next digit, and after the units digit the editing ends. There is no
/// dedicated confirmation gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edit {
    #[default]
    Inactive,
    Editing {
        digit: Digit,
        last_interaction: Millis,
    },
}

/// Automatic change caused by inactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    Advanced(Digit),
    Finished,
}

impl Edit {
    /// Start editing from the first digit, even if editing is in progress.
    pub fn enter(&mut self, now: Millis) {
        *self = Self::Editing {
            digit: Digit::Hundreds,
            last_interaction: now,
        };
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    #[must_use]
    pub fn digit(&self) -> Option<Digit> {
        match self {
            Self::Inactive => None,
            Self::Editing { digit, .. } => Some(*digit),
        }
    }

    /// Increment the selected digit of the given tempo.
    ///
    /// Returns `None` when not editing.
    pub fn increment(&mut self, tempo: Tempo, now: Millis) -> Option<Tempo> {
        match self {
            Self::Inactive => None,
            Self::Editing {
                digit,
                last_interaction,
            } => {
                *last_interaction = now;
                Some(tempo.with_incremented_digit(*digit))
            }
        }
    }

    /// Advance the selection or finish editing when idle for too long.
    pub fn tick(&mut self, now: Millis, advance_after: Millis) -> Option<Transition> {
        let Self::Editing {
            digit,
            last_interaction,
        } = *self
        else {
            return None;
        };

        if time::elapsed(now, last_interaction) < advance_after {
            return None;
        }

        if let Some(next) = digit.next() {
            *self = Self::Editing {
                digit: next,
                last_interaction: now,
            };
            Some(Transition::Advanced(next))
        } else {
            *self = Self::Inactive;
            Some(Transition::Finished)
        }
    }
}
