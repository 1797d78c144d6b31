//! Charge-transfer capacitive sensing on two GPIO pads
//!
//! Each measurement discharges the pad, then releases it to the internal
//! pull-up and counts polling iterations until the line reads high,
//! accumulated over a fixed number of transfer cycles. A finger's added
//! capacitance slows the rise and inflates the count.
//!
//! The pad measurement itself is synchronous, so the trait's in-flight
//! semantics are modeled with a two-deep result shift: triggering a scan
//! retires the previous result into the completed register first.

use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{block_for, Duration};
use vigil_core::touch::Electrode;
use vigil_core::traits::TouchSense;

/// Charge/discharge cycles accumulated per measurement
const TRANSFER_CYCLES: u16 = 128;

pub struct ChargePads {
    pads: [Flex<'static>; 2],
    /// Count of the most recently completed (retired) scan
    completed: u16,
    /// Count of the scan currently "in flight"
    pending: u16,
}

impl ChargePads {
    pub fn new(pad1: Flex<'static>, pad2: Flex<'static>) -> Self {
        Self {
            pads: [pad1, pad2],
            completed: 0,
            pending: 0,
        }
    }

    fn measure(&mut self, electrode: Electrode) -> u16 {
        let pad = &mut self.pads[electrode.index()];
        let mut total: u16 = 0;

        for _ in 0..TRANSFER_CYCLES {
            // Discharge the pad
            pad.set_as_output();
            pad.set_low();
            block_for(Duration::from_micros(2));

            // Release to the pull-up and count the rise
            pad.set_pull(Pull::Up);
            pad.set_as_input();
            while pad.is_low() {
                total = total.saturating_add(1);
                if total == u16::MAX {
                    return total;
                }
            }
        }
        total
    }
}

impl TouchSense for ChargePads {
    fn start_scan(&mut self, electrode: Electrode) {
        self.completed = self.pending;
        self.pending = self.measure(electrode);
    }

    fn last_count(&self) -> u16 {
        self.completed
    }

    fn scan_blocking(&mut self, electrode: Electrode) -> u16 {
        let count = self.measure(electrode);
        self.completed = count;
        self.pending = count;
        count
    }
}
