#![no_main]
#![no_std]

use metronome_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use metronome_control::{InputSnapshot, Metronome};
    use metronome_firmware::system::inputs::Inputs;
    use metronome_firmware::system::outputs::Outputs;
    use metronome_firmware::system::System;

    const CONTROL_PERIOD_MS: u64 = 5;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        metronome: Metronome,
        inputs: Inputs,
        outputs: Outputs,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let inputs = system.inputs;
        let outputs = system.outputs;

        let metronome = Metronome::new();

        control::spawn().unwrap();

        (
            Shared {},
            Local {
                metronome,
                inputs,
                outputs,
            },
            init::Monotonics(mono),
        )
    }

    /// The single control loop of the device.
    ///
    /// Outputs block, so the next tick is scheduled only after they finish.
    #[task(local = [metronome, inputs, outputs])]
    fn control(cx: control::Context) {
        let metronome = cx.local.metronome;
        let inputs = cx.local.inputs;
        let outputs = cx.local.outputs;

        #[allow(clippy::cast_possible_truncation)]
        let now = monotonics::now().ticks() as u32;

        inputs.sample();
        let desired_output = metronome.apply_input_snapshot(InputSnapshot {
            now,
            button: inputs.button.active,
        });
        outputs.set(&desired_output);

        control::spawn_after(CONTROL_PERIOD_MS.millis()).unwrap();
    }
}
