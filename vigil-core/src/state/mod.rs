//! Security state machine
//!
//! The DISARMED / ARMED / ALARM state machine and the key events that
//! drive it.

pub mod events;
pub mod machine;

pub use events::KeyCode;
pub use machine::{SecurityState, TickInputs};
