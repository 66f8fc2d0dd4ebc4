pub mod inputs;
pub mod movement;
pub mod ticker;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use inputs::{Config as InputsConfig, Inputs};
use movement::{Movement, Pins as MovementPins};
use ticker::Ticker;

/// Rate of the timer interrupt advancing the movement.
pub const TICKER_RATE_HZ: u32 = 1000;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub inputs: Inputs,
    pub movement: Movement,
    pub ticker: Ticker,
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

        let ticker = Ticker::new(dp.TIM2.timer(
            TICKER_RATE_HZ.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;
        let inputs = Inputs::new(InputsConfig {
            button: pins.GPIO.PIN_B10.into_floating_input().erase(),
        });
        let movement = Movement::new(MovementPins {
            coil_a: pins.GPIO.PIN_B5.into_push_pull_output().erase(),
            coil_b: pins.GPIO.PIN_B6.into_push_pull_output().erase(),
        });

        Self {
            mono,
            status_led,
            inputs,
            movement,
            ticker,
        }
    }
}

/// Caches are off after reset. No DMA is in use, so both are safe to enable.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
