//! Watchdog deadline supervision
//!
//! The hardware countdown is the system's sole defense against a task
//! that hangs: there is no task-level timeout and no software recovery.
//! The deadline is sized just past one 10ms slice, and the refresh runs
//! as the first task of every slice, so the countdown only ever expires
//! if a slice fails to complete. Recovery is a cold reset plus a one-time
//! boot indicator.

use crate::sched::SLICE_PERIOD_MS;
use crate::traits::display::WATCHDOG_POS;
use crate::traits::{CharDisplay, DeadlineTimer, DisplayExt};

/// Deadline timeout: one slice plus margin
///
/// Normal execution always refreshes first; only a hung slice lets the
/// countdown reach zero.
pub const WATCHDOG_TIMEOUT_MS: u32 = SLICE_PERIOD_MS + 1;

/// Indicator shown after a deadline-forced reset
const WATCHDOG_RESET_PROMPT: &str = "WD";

/// Boot-time reset reporting plus the per-slice refresh
#[derive(Debug)]
pub struct WatchdogSupervisor {
    prior_deadline_reset: bool,
}

impl WatchdogSupervisor {
    /// Check the persisted reset cause, report it, and arm the deadline
    ///
    /// If the prior reset was a deadline expiry, "WD" is written once at
    /// its fixed display position; it never reappears after any
    /// subsequent event. Runs once at boot, before the first slice.
    pub fn start(
        timer: &mut impl DeadlineTimer,
        display: &mut impl CharDisplay,
    ) -> Self {
        let prior_deadline_reset = timer.reset_was_deadline();
        if prior_deadline_reset {
            display.write_at(WATCHDOG_POS, WATCHDOG_RESET_PROMPT);
        }
        timer.arm(WATCHDOG_TIMEOUT_MS);

        Self {
            prior_deadline_reset,
        }
    }

    /// Reload the countdown; first task of every slice
    pub fn refresh(&self, timer: &mut impl DeadlineTimer) {
        timer.refresh();
    }

    /// Whether the boot followed a deadline-forced reset
    pub fn prior_deadline_reset(&self) -> bool {
        self.prior_deadline_reset
    }
}
