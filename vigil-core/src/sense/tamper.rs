//! Tamper (orientation change) detection
//!
//! Polls the orientation sensor every 5 slices and shows "TP" when a
//! change is reported. The very first post-boot read is unreliable -
//! the hardware does not dependably clear its status flag on the first
//! acknowledgement - so it is discarded through an explicit one-shot
//! flag here rather than ad hoc state in the task body.

use crate::traits::display::TAMPER_POS;
use crate::traits::{CharDisplay, DisplayExt, OrientationSensor};

/// Indicator shown while a tamper event is unacknowledged
const TAMPER_PROMPT: &str = "TP";

/// Tamper check task state
#[derive(Debug, Default)]
pub struct TamperMonitor {
    first_read_discarded: bool,
}

impl TamperMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll the sensor; show the indicator on a reported change
    ///
    /// The first invocation only consumes (and discards) the unreliable
    /// post-boot status read.
    pub fn run(
        &mut self,
        display: &mut impl CharDisplay,
        sensor: &mut impl OrientationSensor,
    ) {
        let changed = sensor.orientation_changed();

        if !self.first_read_discarded {
            self.first_read_discarded = true;
            return;
        }

        if changed {
            display.write_at(TAMPER_POS, TAMPER_PROMPT);
        }
    }

    /// Clear the indicator cells (AckTamper key)
    ///
    /// Acknowledgement is display-only; it never touches the security
    /// state.
    pub fn acknowledge(display: &mut impl CharDisplay) {
        display.clear_at(TAMPER_POS, TAMPER_PROMPT.len());
    }
}
