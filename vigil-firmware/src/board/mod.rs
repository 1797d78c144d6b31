//! Board support: hardware implementations of the core collaborator traits
//!
//! Pin assignments are fixed for the reference carrier board; see the
//! constructor of each module for the exact GPIO map.

pub mod keypad;
pub mod lcd;
pub mod leds;
pub mod sensors;
pub mod tone;
pub mod touch;
pub mod watchdog;
