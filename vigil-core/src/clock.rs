//! Time-of-day display
//!
//! Splits the clock source's seconds-of-day counter into a 24h reading
//! and renders it once per second. The RTC register access (and any
//! battery-backed offset tuning) belongs to the clock collaborator.

use crate::traits::display::CLOCK_POS;
use crate::traits::{CharDisplay, WallClock};

/// Seconds in one day; the clock source stays below this
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A 24h wall-clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeOfDay {
    /// Split a seconds-of-day count into hours, minutes, seconds
    ///
    /// Tolerates counts at or past one day by wrapping.
    pub fn from_seconds_of_day(seconds_of_day: u32) -> Self {
        let t = seconds_of_day % SECONDS_PER_DAY;
        Self {
            hours: (t / 3600) as u8,
            minutes: ((t / 60) % 60) as u8,
            seconds: (t % 60) as u8,
        }
    }
}

/// Render "HH:MM:SS"-style cells at the clock position
///
/// Field layout follows the reference board: each zero-padded field is
/// written as three cells whose leading cell is then overwritten with
/// the ':' separator.
pub fn render(display: &mut impl CharDisplay, time: TimeOfDay) {
    let (row, col) = CLOCK_POS;
    display.move_to(row, col);
    display.write_dec_byte(time.hours, false);
    display.move_to(row, col + 3);
    display.write_dec_byte(time.minutes, true);
    display.move_to(row, col + 3);
    display.write_char(b':');
    display.move_to(row, col + 6);
    display.write_dec_byte(time.seconds, true);
    display.move_to(row, col + 6);
    display.write_char(b':');
}

/// Clock display task: read the source and render
pub fn run(display: &mut impl CharDisplay, clock: &mut impl WallClock) {
    render(display, TimeOfDay::from_seconds_of_day(clock.seconds_of_day()));
}
