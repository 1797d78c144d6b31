//! Capacitive touch sensing trait

use crate::touch::Electrode;

/// Trait for the capacitive touch sensing module
///
/// The hardware scans one electrode at a time and latches the resulting
/// oscillation count in a result register. The scan engine pipelines
/// around this: it triggers the next scan and only then judges the count
/// of the previous one.
pub trait TouchSense {
    /// Trigger a scan of the given electrode and return immediately
    ///
    /// The scan completes in hardware well within one 10ms slice; its
    /// count is not observable through [`last_count`](Self::last_count)
    /// until the scan has finished.
    fn start_scan(&mut self, electrode: Electrode);

    /// Raw count of the most recently *completed* scan
    ///
    /// A scan still in flight is never reflected here; the register
    /// holds the previous result until the hardware finishes.
    fn last_count(&self) -> u16;

    /// Scan an electrode and wait for the result
    ///
    /// Blocking; used only during boot-time calibration, never from the
    /// per-tick task path.
    fn scan_blocking(&mut self, electrode: Electrode) -> u16;
}
