//! Abstraction of all inputs.
//!
//! Sampled from the ticker interrupt, so debouncing counts in milliseconds.

mod button;
mod debounced;

use button::{Button, Pin as ButtonPin};

pub struct Inputs {
    pub button: Button,
}

pub struct Config {
    pub button: ButtonPin,
}

impl Inputs {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            button: Button::new(config.button),
        }
    }

    pub fn sample(&mut self) {
        self.button.sample();
    }
}
