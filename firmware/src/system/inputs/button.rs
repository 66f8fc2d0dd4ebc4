use super::debounced::Debounced;
use crate::system::hal::gpio;

pub struct Button {
    pin: Pin,
    debounced: Debounced<4>,
    pub active: bool,
    pub clicked: bool,
}

pub type Pin = gpio::ErasedPin<gpio::Input>;

impl Button {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            debounced: Debounced::new(),
            active: false,
            clicked: false,
        }
    }

    pub fn sample(&mut self) {
        let was_active = self.active;
        self.active = self.debounced.update(self.pin.is_low());
        self.clicked = !was_active && self.active;
    }
}
