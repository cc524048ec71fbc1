use metronome_control::output::Pulse;

use crate::system::hal::gpio;
use crate::system::MS;

pub struct Vibration {
    pin: Pin,
}

pub type Pin = gpio::gpioa::PA0<gpio::Output>;

impl Vibration {
    #[must_use]
    pub fn new(mut pin: Pin) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Run the motor for the length of the pulse, blocking until it is over.
    pub fn pulse(&mut self, pulse: &Pulse) {
        self.pin.set_high();
        cortex_m::asm::delay(pulse.duration * MS);
        self.pin.set_low();
    }
}
