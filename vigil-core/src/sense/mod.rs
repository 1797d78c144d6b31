//! Slow sensor tasks: temperature readout and tamper detection

pub mod tamper;
pub mod temp;

pub use tamper::TamperMonitor;
pub use temp::{AlarmBounds, TempUnit, TemperatureMonitor};
