use super::debounced::Debounced;
use crate::system::hal::gpio;

pub struct Button {
    pin: Pin,
    debounced: Debounced<4>,
    pub active: bool,
}

pub type Pin = gpio::gpiog::PG14<gpio::Input>;

impl Button {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            debounced: Debounced::new(),
            active: false,
        }
    }

    /// Read the pin and pass it through debouncing.
    ///
    /// The button pulls the pin to the ground when pressed.
    pub fn sample(&mut self) {
        self.active = self.debounced.update(self.pin.is_low());
    }
}
