#![no_main]
#![no_std]

use lavet_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use lavet_control::PulseDriver;
    use lavet_firmware::system::inputs::Inputs;
    use lavet_firmware::system::movement::{self, CoilLine};
    use lavet_firmware::system::ticker::Ticker;
    use lavet_firmware::system::System;

    // One step of the second hand per second.
    const TICK_LENGTH_MS: u32 = 1000;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        driver: PulseDriver<CoilLine>,
        inputs: Inputs,
        ticker: Ticker,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let inputs = system.inputs;
        let ticker = system.ticker;

        let driver = PulseDriver::with_hooks(
            system.movement.coil_a,
            system.movement.coil_b,
            TICK_LENGTH_MS,
            Some(movement::report_pulse_start as fn()),
            Some(movement::report_pulse_complete as fn()),
        );

        blink::spawn(true).unwrap();

        (
            Shared {},
            Local {
                status_led,
                driver,
                inputs,
                ticker,
            },
            init::Monotonics(mono),
        )
    }

    // Sole owner of the driver. Nothing else may advance or reconfigure it.
    #[task(binds = TIM2, local = [driver, inputs, ticker], priority = 3)]
    fn tick(cx: tick::Context) {
        cx.local.ticker.clear();

        let driver = cx.local.driver;
        let inputs = cx.local.inputs;

        inputs.sample();
        if inputs.button.clicked {
            if driver.is_paused() {
                driver.resume();
            } else {
                driver.pause();
            }
        }

        driver.advance(1);
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool) {
        let time_on = 50.millis();
        let time_off = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false).unwrap();
        } else {
            cx.local.status_led.off();
            blink::spawn_after(time_off, true).unwrap();
        }
    }
}
