//! Structures used to pass the current state of hardware peripherals.

use crate::time::Millis;

/// The current state of all peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package once per control loop tick. Button debouncing is done by
/// the caller.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Monotonic time of sampling.
    pub now: Millis,
    pub button: bool,
}
