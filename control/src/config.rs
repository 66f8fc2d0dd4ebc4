//! Timing configuration of the movement.

/// Length of the driver pulse in milliseconds.
///
/// This may need tweaking depending on the movement used. Too short pulse
/// does not move the rotor, too long one wastes power and heats up the coil.
pub const PULSE_LENGTH_MS: u32 = 11;

/// The rotor needs time to settle between pulses. The tick length is never
/// allowed to drop below this multiple of the pulse length.
///
/// With the default pulse, 66 ms is about as fast as a common movement ticks.
pub const MIN_TICK_MULTIPLIER: u32 = 6;

/// Tick length used by `Config::default`, one tick per second.
pub const DEFAULT_TICK_LENGTH_MS: u32 = 1000;

/// Requested timing of the movement.
///
/// The tick length is the period between starts of two consecutive pulses.
/// It is kept as requested here and clamped only when applied, see
/// [`Config::effective_tick_length_ms`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub tick_length_ms: u32,
    pub pulse_length_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_LENGTH_MS)
    }
}

impl From<u32> for Config {
    fn from(tick_length_ms: u32) -> Self {
        Self::new(tick_length_ms)
    }
}

impl Config {
    #[must_use]
    pub const fn new(tick_length_ms: u32) -> Self {
        Self {
            tick_length_ms,
            pulse_length_ms: PULSE_LENGTH_MS,
        }
    }

    #[must_use]
    pub const fn with_pulse_length(self, pulse_length_ms: u32) -> Self {
        Self {
            pulse_length_ms,
            ..self
        }
    }

    /// Pulse length as it will be applied. Zero-length pulse would never
    /// move the rotor, it is raised to 1 ms.
    #[must_use]
    pub fn effective_pulse_length_ms(&self) -> u32 {
        self.pulse_length_ms.max(1)
    }

    #[must_use]
    pub fn min_tick_length_ms(&self) -> u32 {
        min_tick_length_ms(self.effective_pulse_length_ms())
    }

    #[must_use]
    pub fn effective_tick_length_ms(&self) -> u32 {
        clamp_tick_length_ms(self.tick_length_ms, self.effective_pulse_length_ms())
    }
}

pub(crate) fn min_tick_length_ms(pulse_length_ms: u32) -> u32 {
    pulse_length_ms.saturating_mul(MIN_TICK_MULTIPLIER)
}

pub(crate) fn clamp_tick_length_ms(tick_length_ms: u32, pulse_length_ms: u32) -> u32 {
    tick_length_ms.max(min_tick_length_ms(pulse_length_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn when_created_from_milliseconds_it_uses_default_pulse_length() {
        let config = Config::from(500);
        assert_eq!(config.tick_length_ms, 500);
        assert_eq!(config.pulse_length_ms, PULSE_LENGTH_MS);
    }

    #[test]
    fn when_default_it_ticks_once_per_second() {
        assert_eq!(Config::default().effective_tick_length_ms(), 1000);
    }

    #[test]
    fn when_requested_tick_is_too_short_it_is_raised_to_the_floor() {
        assert_eq!(Config::new(50).effective_tick_length_ms(), 66);
    }

    #[test]
    fn when_pulse_length_changes_the_floor_follows() {
        let config = Config::new(50).with_pulse_length(20);
        assert_eq!(config.min_tick_length_ms(), 120);
        assert_eq!(config.effective_tick_length_ms(), 120);
    }

    #[test]
    fn when_pulse_length_is_zero_it_is_raised_to_one_millisecond() {
        let config = Config::new(0).with_pulse_length(0);
        assert_eq!(config.effective_pulse_length_ms(), 1);
        assert_eq!(config.effective_tick_length_ms(), 6);
    }

    proptest! {
        #[test]
        fn tick_length_below_floor_is_clamped_to_floor(
            pulse in 1u32..1000,
            tick in 0u32..6000,
        ) {
            prop_assume!(tick < pulse * MIN_TICK_MULTIPLIER);
            prop_assert_eq!(clamp_tick_length_ms(tick, pulse), pulse * MIN_TICK_MULTIPLIER);
        }

        #[test]
        fn tick_length_above_floor_is_kept(pulse in 1u32..1000, tick in 6000u32..) {
            prop_assert_eq!(clamp_tick_length_ms(tick, pulse), tick);
        }
    }
}
