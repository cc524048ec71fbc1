//! Abstraction of the button input.
//!
//! The metronome has a single button. It is sampled once per control loop
//! tick and debounced before it is passed to the control package.

mod button;
mod debounced;

pub use button::{Button, Pin as ButtonPin};

pub struct Inputs {
    pub button: Button,
}

pub struct Config {
    pub button: ButtonPin,
}

impl Inputs {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            button: Button::new(config.button),
        }
    }

    pub fn sample(&mut self) {
        self.button.sample();
    }
}
