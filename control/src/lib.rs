//! Pulse generator for the Lavet type stepper motor found in quartz clock
//! movements.
//!
//! The motor moves by one step with each pulse, and each pulse must reverse
//! the polarity of the coil. With the coil connected between two outputs,
//! the driver alternates which of them is pulled high:
//!
//! ```text
//!              |<-- tick length -->|<-- tick length -->|
//!               _                                       _
//!  line A  ____| |_____________________________________| |____
//!                                   _
//!  line B  ________________________| |________________________
//!
//!              |<>| pulse length
//! ```
//!
//! The library does not touch any hardware directly and does not keep time.
//! It is meant to be driven from a periodic timer interrupt of a firmware,
//! which reports elapsed milliseconds and provides the lines through
//! [`OutputLine`].

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
mod driver;
mod line;
mod log;

pub use config::Config;
pub use driver::{Coil, Phase, PulseDriver};
pub use line::{HalLine, OutputLine};
