//! Digital output lines feeding the coil driver.

use embedded_hal::digital::OutputPin;

/// Single digital output line of the biphase driver pair.
///
/// The pulse driver is the only writer of the line. All operations are
/// infallible, a line that cannot be written is a fault of the host platform.
pub trait OutputLine {
    /// Put the line into output mode. Called whenever the line is bound to
    /// the driver.
    fn set_as_output(&mut self);

    fn set_high(&mut self);

    fn set_low(&mut self);
}

/// Adapter of an `embedded-hal` output pin.
///
/// HAL pins already encode their mode in the type, so `set_as_output` does
/// nothing. Write errors are dropped.
#[derive(Debug)]
pub struct HalLine<P> {
    pin: P,
}

impl<P: OutputPin> HalLine<P> {
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputLine for HalLine<P> {
    fn set_as_output(&mut self) {}

    fn set_high(&mut self) {
        let _ = self.pin.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, PinState};

    #[derive(Debug, Default)]
    struct Pin {
        state: Option<PinState>,
    }

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.state = Some(PinState::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.state = Some(PinState::High);
            Ok(())
        }
    }

    #[test]
    fn when_wrapped_pin_is_written_it_follows_the_line() {
        let mut line = HalLine::new(Pin::default());
        line.set_as_output();
        assert_eq!(line.pin.state, None);
        line.set_high();
        assert_eq!(line.pin.state, Some(PinState::High));
        line.set_low();
        assert_eq!(line.into_inner().state, Some(PinState::Low));
    }
}
