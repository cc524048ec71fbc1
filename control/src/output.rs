use crate::display::Snapshot as DisplaySnapshot;
use crate::time::Millis;

/// Desired state of output peripherals after a single tick.
///
/// This structure transfers requests to the hardware layer, asking it to
/// play a click, pulse the vibration motor, or redraw the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub beat: Option<Beat>,
    pub display: Option<DisplaySnapshot>,
}

/// A beat that was just fired.
///
/// The pulse, when present, must be played before the click. Both are
/// blocking for their whole duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Beat {
    pub downbeat: bool,
    /// Position of this beat within the bar, 0 to 3.
    pub position: u8,
    pub pulse: Option<Pulse>,
    pub click: Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Click {
    pub tone: Tone,
    pub duration: Millis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub duration: Millis,
}

/// Square wave played by the speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency: u32,
    /// Duty cycle on scale of 0 to 255.
    pub volume: u8,
}
