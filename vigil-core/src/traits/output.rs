//! Indicator LED and alarm tone output traits

/// The two indicator LEDs embedded in the touch pads
///
/// Named after the board silkscreen (D8 sits in the electrode 1 pad,
/// D9 in the electrode 2 pad).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    D8,
    D9,
}

/// Trait for driving the indicator LEDs
pub trait IndicatorLeds {
    /// Turn an LED on or off
    fn set(&mut self, led: Led, on: bool);

    /// Toggle an LED's current state
    fn toggle(&mut self, led: Led);
}

/// Trait for the alarm tone output
///
/// The tone machinery (waveform playback) is initialized once at boot;
/// these calls only gate it. Both are idempotent - the control task
/// re-asserts the gate every pass rather than tracking edges.
pub trait ToneOutput {
    /// Start (or keep) the alarm tone playing
    fn start(&mut self);

    /// Stop the alarm tone
    fn stop(&mut self);
}
