//! Hardware-free core of the traffic signal firmware.
//!
//! Holds the night-mode flag and its debounce guard, the constant phase
//! tables, and the control loop that plays them through an [`Actuators`]
//! implementation. Everything here runs on the host as well as on the
//! target, so the timing contract can be checked with `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod actuator;
pub mod color;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod mode;
pub mod phase;
pub mod tone;

pub use actuator::Actuators;
pub use color::Rgb;
pub use controller::Controller;
pub use debounce::DebounceGuard;
pub use mode::{Mode, ModeState};
