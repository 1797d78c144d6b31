//! Key events that drive the control task
//!
//! The keypad collaborator buffers at most one pending edge event and
//! clears it on read; raw codes with no mapping here are dropped before
//! they ever reach the core (invalid keys are a silent no-op).

/// Recognized key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Arm the system (effective in DISARMED)
    Arm,
    /// Disarm the system (effective in ARMED and ALARM)
    Disarm,
    /// Toggle the temperature unit and its alarm bounds
    ToggleUnit,
    /// Acknowledge (clear) the tamper indicator
    AckTamper,
}

impl KeyCode {
    /// Whether this event can change the security state
    pub fn is_state_event(&self) -> bool {
        matches!(self, KeyCode::Arm | KeyCode::Disarm)
    }
}
