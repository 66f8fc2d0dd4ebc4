#![no_std]
#![no_main]

use lavet_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use lavet_control::{Config, PulseDriver};
    use lavet_firmware::system::inputs::Inputs;
    use lavet_firmware::system::movement::CoilLine;
    use lavet_firmware::system::System;
    use lavet_firmware::testlib::{sample_until_button_is_clicked, MS};

    pub struct State {
        inputs: Inputs,
        driver: PulseDriver<CoilLine>,
    }

    #[init]
    fn init() -> State {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        let system = System::init(cp, dp);

        State {
            inputs: system.inputs,
            driver: PulseDriver::new(
                system.movement.coil_a,
                system.movement.coil_b,
                Config::new(1000),
            ),
        }
    }

    fn run_for(driver: &mut PulseDriver<CoilLine>, ms: u32) {
        for _ in 0..ms {
            driver.advance(1);
            cortex_m::asm::delay(MS);
        }
    }

    #[test]
    fn button_detects_click(state: &mut State) {
        defmt::info!("Click the button");
        sample_until_button_is_clicked(&mut state.inputs);
        defmt::info!("OK");
    }

    #[test]
    fn second_hand_steps_once_per_second(state: &mut State) {
        defmt::info!("Connect the movement to the coil outputs, and click the button");
        sample_until_button_is_clicked(&mut state.inputs);

        state.driver.reset();
        run_for(&mut state.driver, 10_000);
        defmt::assert_eq!(state.driver.tick_count(), 10);

        defmt::info!("Click the button if the second hand moved by 10 steps");
        sample_until_button_is_clicked(&mut state.inputs);
    }

    #[test]
    fn second_hand_stops_when_paused(state: &mut State) {
        defmt::info!("Click the button to pause the movement for 5 seconds");
        sample_until_button_is_clicked(&mut state.inputs);

        state.driver.pause();
        let before = state.driver.total_tick_count();
        run_for(&mut state.driver, 5000);
        defmt::assert_eq!(state.driver.total_tick_count(), before);

        state.driver.resume();
        run_for(&mut state.driver, 5000);
        defmt::assert_eq!(state.driver.total_tick_count(), before + 5);

        defmt::info!("Click the button if the hand stood still and then moved by 5 steps");
        sample_until_button_is_clicked(&mut state.inputs);
    }

    #[test]
    fn fastest_tick_is_limited(state: &mut State) {
        defmt::info!("Click the button to run the movement at its top speed");
        sample_until_button_is_clicked(&mut state.inputs);

        state.driver.set_tick_length(1);
        defmt::assert_eq!(state.driver.tick_length_ms(), 66);
        state.driver.reset();
        run_for(&mut state.driver, 66 * 30);

        defmt::info!("Click the button if the hand moved by 30 steps without skipping");
        sample_until_button_is_clicked(&mut state.inputs);
    }
}
