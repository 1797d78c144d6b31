//! Pipelined dual-electrode capacitive touch scan
//!
//! The sensing hardware scans one electrode at a time and latches the
//! count when done. Rather than wait for each scan, the engine keeps one
//! scan in flight at all times: every invocation triggers the *other*
//! electrode's scan, then judges the previously completed result of this
//! electrode against its calibrated threshold. The cost is one extra
//! invocation of latency (worst case two before a touch is visible);
//! no invocation ever blocks.
//!
//! No debouncing happens here - a single sample above threshold counts
//! as touched. Thresholds are calibrated once at boot from a no-touch
//! baseline plus a fixed margin.

use crate::traits::TouchSense;

/// Offset added to the no-touch baseline to form the touch threshold
///
/// Large enough that noise never trips it, small enough that light
/// presses still register.
pub const TOUCH_OFFSET: u16 = 2000;

/// The two physical electrodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Electrode {
    E1,
    E2,
}

impl Electrode {
    /// Channel array index for this electrode
    pub fn index(self) -> usize {
        match self {
            Electrode::E1 => 0,
            Electrode::E2 => 1,
        }
    }
}

/// Which half of the scan pipeline runs next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanPhase {
    /// Trigger electrode 2, judge electrode 1's completed scan
    ScanSecondReadFirst,
    /// Trigger electrode 1, judge electrode 2's completed scan
    ScanFirstReadSecond,
}

/// Calibration and latest result for one electrode
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElectrodeChannel {
    baseline: u16,
    threshold: u16,
    raw_count: u16,
    touched: bool,
}

impl ElectrodeChannel {
    fn calibrated(baseline: u16) -> Self {
        Self {
            baseline,
            threshold: baseline.saturating_add(TOUCH_OFFSET),
            raw_count: 0,
            touched: false,
        }
    }

    /// Judge a completed scan count; strictly greater than threshold
    /// means touched (equal is not touched).
    fn judge(&mut self, raw_count: u16) {
        self.raw_count = raw_count;
        self.touched = raw_count > self.threshold;
    }

    /// No-touch baseline captured at boot
    pub fn baseline(&self) -> u16 {
        self.baseline
    }

    /// Calibrated touch threshold
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Raw count of the last judged scan
    pub fn raw_count(&self) -> u16 {
        self.raw_count
    }

    /// Calibrated touched flag - the only field consumers read
    pub fn touched(&self) -> bool {
        self.touched
    }
}

/// The two-phase alternating scan engine
///
/// Sole owner of the scan phase and the per-electrode channels; the
/// touched flags are refreshed only inside the scheduler-serialized
/// [`poll`](Self::poll) invocation, so readers always observe a fully
/// completed scan.
#[derive(Debug)]
pub struct TouchScanEngine {
    channels: [ElectrodeChannel; 2],
    phase: ScanPhase,
}

impl TouchScanEngine {
    /// Calibrate both electrodes and prime the pipeline
    ///
    /// Takes one blocking scan per electrode with no assumed touch; the
    /// raw count becomes that electrode's baseline. Boot-time only.
    pub fn calibrate(sensor: &mut impl TouchSense) -> Self {
        let baseline_e1 = sensor.scan_blocking(Electrode::E1);
        let baseline_e2 = sensor.scan_blocking(Electrode::E2);

        // Put an electrode 1 scan in flight so the first steady-state
        // invocation judges a count that belongs to electrode 1.
        sensor.start_scan(Electrode::E1);

        Self {
            channels: [
                ElectrodeChannel::calibrated(baseline_e1),
                ElectrodeChannel::calibrated(baseline_e2),
            ],
            phase: ScanPhase::ScanSecondReadFirst,
        }
    }

    /// Run one pipeline step
    ///
    /// Triggers the next scan, judges the previous one, and flips the
    /// phase. Invoked from the task table every 20ms.
    pub fn poll(&mut self, sensor: &mut impl TouchSense) {
        match self.phase {
            ScanPhase::ScanSecondReadFirst => {
                sensor.start_scan(Electrode::E2);
                let count = sensor.last_count();
                self.channels[Electrode::E1.index()].judge(count);
                self.phase = ScanPhase::ScanFirstReadSecond;
            }
            ScanPhase::ScanFirstReadSecond => {
                sensor.start_scan(Electrode::E1);
                let count = sensor.last_count();
                self.channels[Electrode::E2.index()].judge(count);
                self.phase = ScanPhase::ScanSecondReadFirst;
            }
        }
    }

    /// Calibrated touched flag for an electrode
    pub fn touched(&self, electrode: Electrode) -> bool {
        self.channels[electrode.index()].touched()
    }

    /// Per-electrode calibration and latest result
    pub fn channel(&self, electrode: Electrode) -> &ElectrodeChannel {
        &self.channels[electrode.index()]
    }

    /// Phase the next invocation will run
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }
}
