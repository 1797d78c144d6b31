//! Keypad input trait

use crate::state::KeyCode;

/// Trait for the debounced keypad matrix
///
/// The implementation owns column/row scanning and debouncing. It buffers
/// at most one pending edge event; `take_event` clears the buffer on read,
/// so a press can never be double-counted. By design, exactly one
/// component (the control task) consumes key events per cycle.
pub trait Keypad {
    /// Per-slice scan housekeeping (sample the matrix, run debounce)
    ///
    /// Must be a single-shot poll; never blocks.
    fn scan(&mut self);

    /// Take the pending key event, if any, clearing it
    ///
    /// Raw codes with no [`KeyCode`] mapping are dropped by the
    /// implementation and never surface here.
    fn take_event(&mut self) -> Option<KeyCode>;
}
