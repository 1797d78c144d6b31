//! Hardware deadline timer (watchdog) trait

/// Trait for the hardware watchdog countdown
///
/// Once armed, the countdown unconditionally resets the processor when it
/// reaches zero; there is no software-level recovery. The only persisted
/// state across that reset is the reset-cause register.
pub trait DeadlineTimer {
    /// Whether the previous reset was caused by a deadline expiry
    ///
    /// Reads the persisted reset-cause register; called once at boot.
    fn reset_was_deadline(&mut self) -> bool;

    /// Arm the countdown with the given timeout
    ///
    /// Called once at boot, after the reset-cause check.
    fn arm(&mut self, timeout_ms: u32);

    /// Reload the countdown
    ///
    /// Implementations issue whatever unlock/refresh sequence the
    /// hardware requires (a fixed two-value code write on the reference
    /// part). Must complete without blocking.
    fn refresh(&mut self);
}
