//! Beats per minute, bounded to the range the device can display.

/// The slowest tempo accepted.
pub const MIN_BPM: u16 = 30;

/// The fastest tempo accepted, limited by the three digits of the display.
pub const MAX_BPM: u16 = 999;

/// Tempo in beats per minute.
///
/// The value is clamped to `MIN_BPM..=MAX_BPM` on every construction, so
/// any arithmetic pushing it out of the range is silently bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tempo(u16);

/// One of the three decimal digits of the tempo, as edited by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    Hundreds,
    Tens,
    Units,
}

impl Tempo {
    #[must_use]
    pub fn new(bpm: u32) -> Self {
        Self(bpm.clamp(u32::from(MIN_BPM), u32::from(MAX_BPM)) as u16)
    }

    #[must_use]
    pub fn bpm(self) -> u16 {
        self.0
    }

    /// Interval between two beats in milliseconds.
    #[must_use]
    pub fn period(self) -> u32 {
        60_000 / u32::from(self.0)
    }

    /// Value of the given digit, 0 to 9.
    #[must_use]
    pub fn digit(self, digit: Digit) -> u8 {
        ((self.0 / digit.place()) % 10) as u8
    }

    /// Zero padded decimal digits, hundreds first.
    #[must_use]
    pub fn digits(self) -> [u8; 3] {
        [
            self.digit(Digit::Hundreds),
            self.digit(Digit::Tens),
            self.digit(Digit::Units),
        ]
    }

    /// Increase a single digit by one.
    ///
    /// The digit rolls over from 9 to 0 without carrying into its
    /// neighbours. Only the resulting tempo is clamped, e.g. 199 with
    /// incremented units becomes 190 and 950 with incremented hundreds
    /// becomes 50.
    #[must_use]
    pub fn with_incremented_digit(self, digit: Digit) -> Self {
        let place = u32::from(digit.place());
        let bpm = u32::from(self.0);
        let current = (bpm / place) % 10;
        let incremented = (current + 1) % 10;
        Self::new(bpm - current * place + incremented * place)
    }
}

impl Digit {
    #[must_use]
    pub fn place(self) -> u16 {
        match self {
            Self::Hundreds => 100,
            Self::Tens => 10,
            Self::Units => 1,
        }
    }

    /// Position of the digit on the display, counting from the left.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hundreds => 0,
            Self::Tens => 1,
            Self::Units => 2,
        }
    }

    /// The digit to the right of this one, if there is any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Hundreds => Some(Self::Tens),
            Self::Tens => Some(Self::Units),
            Self::Units => None,
        }
    }
}
