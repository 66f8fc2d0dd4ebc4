#![no_main]
#![no_std]

use defmt_rtt as _; // Global logger.
use panic_probe as _;
use stm32h7xx_hal as _; // Interrupt vectors.

pub mod system;
pub mod testlib;

// Skip the message of `panic-probe`, it would print twice after `defmt::panic`.
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
