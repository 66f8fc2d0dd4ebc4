//! Coil lines of the clock movement.
//!
//! Each end of the coil is connected to one output through a resistor
//! and protection diodes. Driving one output high while the other stays low
//! pushes current through the coil in one direction.

use lavet_control::OutputLine;

use crate::system::hal::gpio;

pub type Pin = gpio::ErasedPin<gpio::Output>;

/// Output connected to one end of the coil.
pub struct CoilLine {
    pin: Pin,
}

impl CoilLine {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }
}

impl OutputLine for CoilLine {
    // The pin was turned into push-pull output during system init.
    fn set_as_output(&mut self) {}

    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

pub struct Movement {
    pub coil_a: CoilLine,
    pub coil_b: CoilLine,
}

pub struct Pins {
    pub coil_a: Pin,
    pub coil_b: Pin,
}

impl Movement {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self {
            coil_a: CoilLine::new(pins.coil_a),
            coil_b: CoilLine::new(pins.coil_b),
        }
    }
}

pub fn report_pulse_start() {
    defmt::trace!("Coil energized");
}

pub fn report_pulse_complete() {
    defmt::trace!("Coil released");
}
