//! Periodic interrupt feeding elapsed time to the movement.

use crate::system::hal::pac::TIM2;
use crate::system::hal::timer::{Event, Timer};

pub struct Ticker {
    timer: Timer<TIM2>,
}

impl Ticker {
    #[must_use]
    pub fn new(mut timer: Timer<TIM2>) -> Self {
        timer.listen(Event::TimeOut);
        Self { timer }
    }

    /// Acknowledge the interrupt. Must be called on every `TIM2` interrupt,
    /// otherwise it fires again right away.
    pub fn clear(&mut self) {
        self.timer.clear_irq();
    }
}
