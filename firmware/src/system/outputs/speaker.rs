use metronome_control::output::Click;

use crate::system::hal::gpio;
use crate::system::US;

/// Speaker driven by a square wave on a GPIO.
///
/// The volume of the tone is set through the duty cycle of the wave.
pub struct Speaker {
    pin: Pin,
}

pub type Pin = gpio::gpioc::PC13<gpio::Output>;

impl Speaker {
    #[must_use]
    pub fn new(mut pin: Pin) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Play the click, blocking until it is over.
    pub fn play(&mut self, click: &Click) {
        let period = 1_000_000 / click.tone.frequency.max(1);
        let high = period * u32::from(click.tone.volume) / 255;
        let low = period - high;
        let periods = click.duration * 1000 / period.max(1);

        for _ in 0..periods {
            if high > 0 {
                self.pin.set_high();
                cortex_m::asm::delay(high * US);
            }
            self.pin.set_low();
            cortex_m::asm::delay(low * US);
        }
    }
}
