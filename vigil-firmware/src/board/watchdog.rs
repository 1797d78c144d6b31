//! RP2040 hardware watchdog as the deadline timer
//!
//! The watchdog's reason register persists across a watchdog-forced
//! reset, which is how the boot sequence distinguishes a deadline expiry
//! from a power-on.

use embassy_rp::pac;
use embassy_rp::watchdog::Watchdog;
use embassy_time::Duration;
use vigil_core::traits::DeadlineTimer;

pub struct HardwareWatchdog {
    inner: Watchdog,
}

impl HardwareWatchdog {
    pub fn new(inner: Watchdog) -> Self {
        Self { inner }
    }
}

impl DeadlineTimer for HardwareWatchdog {
    fn reset_was_deadline(&mut self) -> bool {
        pac::WATCHDOG.reason().read().timer()
    }

    fn arm(&mut self, timeout_ms: u32) {
        self.inner.start(Duration::from_millis(u64::from(timeout_ms)));
    }

    fn refresh(&mut self) {
        self.inner.feed();
    }
}
