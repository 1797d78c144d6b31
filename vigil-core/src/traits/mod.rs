//! Hardware abstraction traits
//!
//! These traits define the interface between the control core and the
//! board-specific I/O leaves (LCD controller, keypad matrix, TSI module,
//! ADC conversion, accelerometer, RTC, watchdog registers). All of them
//! are simple request/response contracts: nothing on the per-tick path
//! blocks on I/O, and none of them return errors - failure signaling
//! happens through the display and the watchdog reset.

pub mod display;
pub mod input;
pub mod output;
pub mod sensors;
pub mod touch;
pub mod watchdog;

pub use display::{CharDisplay, DisplayExt};
pub use input::Keypad;
pub use output::{IndicatorLeds, Led, ToneOutput};
pub use sensors::{OrientationSensor, TemperatureSensor, WallClock};
pub use touch::TouchSense;
pub use watchdog::DeadlineTimer;
