//! Pulse timing state machine of a Lavet movement.

use core::fmt;
use core::mem;

use crate::config::{self, Config};
use crate::line::OutputLine;
use crate::log;

/// One of the two lines of the biphase driver pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coil {
    A,
    B,
}

impl Coil {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Both lines are low, counting down to the next pulse.
    Waiting,
    /// The active line is held high.
    Pulsing,
}

/// Generator of alternating drive pulses.
///
/// The driver does not keep time on its own. The host has to report elapsed
/// time through [`PulseDriver::advance`], typically from a periodic timer
/// interrupt. Each tick drives the active line high for the pulse length,
/// then pulls it low and swaps the lines, so the next pulse pushes the rotor
/// with the opposite polarity.
///
/// Hooks are called synchronously from within `advance`, in the context of
/// the caller. They must be short and must not block.
pub struct PulseDriver<L, S = fn(), C = fn()> {
    line_a: L,
    line_b: L,
    active: Coil,
    tick_length_ms: u32,
    pulse_length_ms: u32,
    // Time since the start of the last pulse. It keeps running through the
    // pulse, so the tick length is the period between pulse starts.
    elapsed_ms: u32,
    phase: Phase,
    paused: bool,
    tick_count: u32,
    total_tick_count: u32,
    on_pulse_start: Option<S>,
    on_pulse_complete: Option<C>,
}

impl<L: OutputLine> PulseDriver<L> {
    #[must_use]
    pub fn new(line_a: L, line_b: L, config: impl Into<Config>) -> Self {
        Self::with_hooks(line_a, line_b, config, None, None)
    }
}

impl<L, S, C> PulseDriver<L, S, C>
where
    L: OutputLine,
    S: FnMut(),
    C: FnMut(),
{
    #[must_use]
    pub fn with_hooks(
        line_a: L,
        line_b: L,
        config: impl Into<Config>,
        on_pulse_start: Option<S>,
        on_pulse_complete: Option<C>,
    ) -> Self {
        let config = config.into();
        let pulse_length_ms = config.effective_pulse_length_ms();
        let tick_length_ms = config.effective_tick_length_ms();
        let mut driver = Self {
            line_a,
            line_b,
            active: Coil::A,
            tick_length_ms,
            pulse_length_ms,
            elapsed_ms: 0,
            phase: Phase::Waiting,
            paused: false,
            tick_count: 0,
            total_tick_count: 0,
            on_pulse_start,
            on_pulse_complete,
        };
        driver.power_on(config);
        driver
    }

    /// Rebind lines and hooks and start over as if freshly powered.
    ///
    /// This clears the total tick count too. The previous lines are pulled
    /// low before they are dropped.
    pub fn configure(
        &mut self,
        line_a: L,
        line_b: L,
        config: impl Into<Config>,
        on_pulse_start: Option<S>,
        on_pulse_complete: Option<C>,
    ) {
        let _ = self.set_output_pins(line_a, line_b);
        self.on_pulse_start = on_pulse_start;
        self.on_pulse_complete = on_pulse_complete;
        self.power_on(config.into());
    }

    fn power_on(&mut self, config: Config) {
        self.line_a.set_as_output();
        self.line_b.set_as_output();
        self.pulse_length_ms = config.effective_pulse_length_ms();
        self.set_tick_length(config.tick_length_ms);
        self.total_tick_count = 0;
        self.paused = false;
        self.active = Coil::A;
        self.reset();

        log::info!(
            "Configured tick={}ms pulse={}ms",
            self.tick_length_ms,
            self.pulse_length_ms
        );
    }

    /// Set the period between ticks, limited to a multiple of the pulse
    /// length, see [`config::MIN_TICK_MULTIPLIER`].
    ///
    /// When waiting for the next pulse, the wait starts over with the new
    /// period. A pulse in flight is left to finish.
    pub fn set_tick_length(&mut self, tick_length_ms: u32) {
        let clamped = config::clamp_tick_length_ms(tick_length_ms, self.pulse_length_ms);
        if clamped != tick_length_ms {
            log::info!(
                "Requested tick={}ms is too short, using {}ms",
                tick_length_ms,
                clamped
            );
        }
        self.tick_length_ms = clamped;
        if self.phase == Phase::Waiting {
            self.elapsed_ms = 0;
        }
    }

    /// Replace the biphase pair, returning the previous one.
    ///
    /// The returned lines are left low. Counters and the phase are kept, the
    /// caller should `reset` if the lines are swapped mid-pulse.
    pub fn set_output_pins(&mut self, line_a: L, line_b: L) -> (L, L) {
        let mut old_a = mem::replace(&mut self.line_a, line_a);
        let mut old_b = mem::replace(&mut self.line_b, line_b);
        old_a.set_low();
        old_b.set_low();
        self.line_a.set_as_output();
        self.line_b.set_as_output();
        (old_a, old_b)
    }

    /// Report `delta_ms` of elapsed time.
    ///
    /// At most one transition happens per call, so a started pulse is held
    /// high at least until the next call. Overshoot is carried over to keep
    /// the long-term rate exact with irregular deltas.
    pub fn advance(&mut self, delta_ms: u32) {
        if self.paused {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.wrapping_add(delta_ms);

        match self.phase {
            Phase::Pulsing => {
                if self.elapsed_ms >= self.pulse_length_ms {
                    self.pulse_end();
                }
            }
            Phase::Waiting => {
                if self.elapsed_ms >= self.tick_length_ms {
                    self.pulse_start();
                }
            }
        }
    }

    /// Report exactly one millisecond of elapsed time.
    ///
    /// Equivalent to `advance(1)` as long as it is the only time source and
    /// it is called on an exact 1 ms cadence. Mixing it with `advance` may
    /// skip past a transition.
    pub fn advance_one_ms(&mut self) {
        if self.paused {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.wrapping_add(1);

        match self.phase {
            Phase::Pulsing => {
                if self.elapsed_ms == self.pulse_length_ms {
                    self.pulse_end();
                }
            }
            Phase::Waiting => {
                if self.elapsed_ms == self.tick_length_ms {
                    self.pulse_start();
                }
            }
        }
    }

    fn pulse_start(&mut self) {
        self.elapsed_ms -= self.tick_length_ms;
        self.phase = Phase::Pulsing;
        self.line(self.active).set_high();

        log::debug!("Pulse start on {}", self.active);

        if let Some(hook) = self.on_pulse_start.as_mut() {
            hook();
        }
    }

    fn pulse_end(&mut self) {
        self.phase = Phase::Waiting;
        self.line(self.active).set_low();

        // Next pulse goes through the other coil line, reversing the field.
        self.active = self.active.other();

        self.tick_count = self.tick_count.wrapping_add(1);
        self.total_tick_count = self.total_tick_count.wrapping_add(1);

        log::debug!("Tick {}", self.total_tick_count);

        if let Some(hook) = self.on_pulse_complete.as_mut() {
            hook();
        }
    }

    /// Stop advancing time.
    ///
    /// A pulse in flight is abandoned and both lines are pulled low. Tick
    /// counts are kept. After `resume`, the first advance starts a pulse on
    /// the same coil line the abandoned one used.
    pub fn pause(&mut self) {
        self.paused = true;
        self.restart_cycle();
        log::info!("Paused after {} ticks", self.total_tick_count);
    }

    pub fn resume(&mut self) {
        self.paused = false;
        log::info!("Resumed");
    }

    /// Clear the tick count and retrigger a pulse on the next advance.
    pub fn reset(&mut self) {
        self.tick_count = 0;
        self.restart_cycle();
        log::debug!("Reset");
    }

    fn restart_cycle(&mut self) {
        // One millisecond short of a full tick, the next advance starts a
        // pulse right away.
        self.elapsed_ms = self.tick_length_ms.saturating_sub(1);
        self.phase = Phase::Waiting;
        self.line_a.set_low();
        self.line_b.set_low();
    }

    /// Give up the lines, leaving both of them low.
    pub fn release(mut self) -> (L, L) {
        self.line_a.set_low();
        self.line_b.set_low();
        (self.line_a, self.line_b)
    }

    fn line(&mut self, coil: Coil) -> &mut L {
        match coil {
            Coil::A => &mut self.line_a,
            Coil::B => &mut self.line_b,
        }
    }
}

impl<L, S, C> PulseDriver<L, S, C> {
    /// Ticks since the last reset.
    #[must_use]
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Ticks since the driver was configured.
    #[must_use]
    pub fn total_tick_count(&self) -> u32 {
        self.total_tick_count
    }

    #[must_use]
    pub fn tick_length_ms(&self) -> u32 {
        self.tick_length_ms
    }

    #[must_use]
    pub fn pulse_length_ms(&self) -> u32 {
        self.pulse_length_ms
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.phase == Phase::Pulsing
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Line that delivers the next pulse, or the current one while pulsing.
    #[must_use]
    pub fn active_coil(&self) -> Coil {
        self.active
    }
}

impl<L: fmt::Debug, S, C> fmt::Debug for PulseDriver<L, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PulseDriver")
            .field("line_a", &self.line_a)
            .field("line_b", &self.line_b)
            .field("active", &self.active)
            .field("tick_length_ms", &self.tick_length_ms)
            .field("pulse_length_ms", &self.pulse_length_ms)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("phase", &self.phase)
            .field("paused", &self.paused)
            .field("tick_count", &self.tick_count)
            .field("total_tick_count", &self.total_tick_count)
            .field("on_pulse_start", &self.on_pulse_start.is_some())
            .field("on_pulse_complete", &self.on_pulse_complete.is_some())
            .finish()
    }
}
