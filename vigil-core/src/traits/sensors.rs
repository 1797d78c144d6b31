//! Temperature, orientation, and wall-clock collaborator traits

use crate::sense::TempUnit;

/// Trait for the sampled temperature channel
pub trait TemperatureSensor {
    /// Poll for a fresh conversion in the requested unit
    ///
    /// Returns `None` when no new sample has been latched since the last
    /// poll (the converter runs on its own hardware cadence, 500ms in
    /// the reference board). Values are saturated to the unit-specific
    /// sensor range (-10..125 for Celsius, 14..257 for Fahrenheit).
    fn sample(&mut self, unit: TempUnit) -> Option<i16>;
}

/// Trait for the orientation-change (tamper) sensor
pub trait OrientationSensor {
    /// Poll and clear the orientation-changed status flag
    ///
    /// Hardware quirk: the very first post-boot read does not reliably
    /// clear the flag, so its result must be discarded. The core handles
    /// that in [`TamperMonitor`](crate::sense::TamperMonitor); the
    /// implementation just reads the status register.
    fn orientation_changed(&mut self) -> bool;
}

/// Trait for the battery-backed time-of-day source
pub trait WallClock {
    /// Elapsed seconds since midnight, in `[0, 86400)`
    fn seconds_of_day(&mut self) -> u32;
}
