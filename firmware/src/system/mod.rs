pub mod inputs;
pub mod outputs;

pub use daisy::hal;

use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use systick_monotonic::Systick;

use inputs::{Config as InputsConfig, Inputs};
use outputs::{Config as OutputsConfig, Outputs};

pub const CPU_FREQUENCY: u32 = 480_000_000;

/// CPU cycles in one millisecond.
pub const MS: u32 = CPU_FREQUENCY / 1000;

/// CPU cycles in one microsecond.
pub const US: u32 = CPU_FREQUENCY / 1_000_000;

pub struct System {
    pub mono: Systick<1000>,
    pub inputs: Inputs,
    pub outputs: Outputs,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, CPU_FREQUENCY);
        let inputs = Inputs::new(InputsConfig {
            button: pins.GPIO.PIN_B10.into_floating_input(),
        });
        let outputs = Outputs::new(OutputsConfig {
            speaker: pins.GPIO.PIN_B6.into_push_pull_output(),
            vibration: pins.GPIO.PIN_A8.into_push_pull_output(),
            indicator: daisy::board_split_leds!(pins).USER,
        });

        Self {
            mono,
            inputs,
            outputs,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
