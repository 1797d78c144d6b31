//! Board-agnostic control core for the Vigil security appliance
//!
//! This crate contains all appliance logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (display, keypad, touch sensing, watchdog, ...)
//! - Fixed-tick cooperative timeslice scheduler
//! - DISARMED / ARMED / ALARM security state machine
//! - Pipelined dual-electrode capacitive touch scan
//! - Watchdog deadline supervision
//! - LED alarm visualization with latched sensor history
//! - Temperature, tamper, and time-of-day display tasks
//!
//! Everything runs single-threaded and to completion inside one 10ms
//! scheduler slice; the fixed task invocation order is the sole
//! concurrency-control mechanism.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod controller;
pub mod safety;
pub mod sched;
pub mod sense;
pub mod state;
pub mod touch;
pub mod traits;
pub mod visual;
