//! Temperature readout and out-of-range detection
//!
//! The converter hardware samples on its own 500ms cadence; this task
//! polls every slice and acts only when a fresh conversion is latched.
//! The active unit selects both the displayed suffix and the alarm bound
//! pair used for the out-of-range predicate.

use crate::traits::display::TEMP_POS;
use crate::traits::{CharDisplay, TemperatureSensor};

/// LCD glyph code for the degree sign
const DEGREE_GLYPH: u8 = 0xDF;

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    /// Display suffix letter
    pub fn suffix(self) -> u8 {
        match self {
            TempUnit::Celsius => b'C',
            TempUnit::Fahrenheit => b'F',
        }
    }

    /// Alarm bound pair for this unit
    pub fn alarm_bounds(self) -> AlarmBounds {
        match self {
            TempUnit::Celsius => AlarmBounds { low: 0, high: 40 },
            TempUnit::Fahrenheit => AlarmBounds { low: 32, high: 104 },
        }
    }
}

/// Inclusive in-range band for the temperature alarm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmBounds {
    pub low: i16,
    pub high: i16,
}

impl AlarmBounds {
    /// Whether a reading falls outside the band
    pub fn out_of_range(&self, temperature: i16) -> bool {
        temperature < self.low || temperature > self.high
    }
}

/// Temperature display task state
///
/// Owns the active unit and the out-of-range flag; the flag is written
/// only here and read by the control task on the next slice.
#[derive(Debug, Default)]
pub struct TemperatureMonitor {
    unit: TempUnit,
    out_of_range: bool,
}

impl TemperatureMonitor {
    /// Create the monitor; the unit powers up as Celsius
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the active unit (and with it the alarm bound pair)
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    /// Currently active unit
    pub fn unit(&self) -> TempUnit {
        self.unit
    }

    /// Latest out-of-range verdict
    pub fn out_of_range(&self) -> bool {
        self.out_of_range
    }

    /// Poll the sensor; on a fresh sample, refresh display and flag
    ///
    /// Renders sign, three value cells, the degree glyph, and the unit
    /// letter at the temperature position.
    pub fn run(
        &mut self,
        display: &mut impl CharDisplay,
        sensor: &mut impl TemperatureSensor,
    ) {
        let Some(temperature) = sensor.sample(self.unit) else {
            return;
        };

        self.out_of_range = self.unit.alarm_bounds().out_of_range(temperature);

        let sign = if temperature < 0 { b'-' } else { b' ' };
        let magnitude = temperature.unsigned_abs().min(255) as u8;

        display.move_to(TEMP_POS.0, TEMP_POS.1);
        display.write_char(sign);
        display.write_dec_byte(magnitude, false);
        display.write_char(DEGREE_GLYPH);
        display.write_char(self.unit.suffix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSensor {
        reading: Option<i16>,
    }

    impl TemperatureSensor for FixedSensor {
        fn sample(&mut self, _unit: TempUnit) -> Option<i16> {
            self.reading.take()
        }
    }

    #[derive(Default)]
    struct MockDisplay {
        cells: heapless::Vec<u8, 32>,
    }

    impl CharDisplay for MockDisplay {
        fn move_to(&mut self, _row: u8, _col: u8) {}

        fn write_str(&mut self, text: &str) {
            self.cells.extend(text.bytes());
        }

        fn write_char(&mut self, glyph: u8) {
            self.cells.push(glyph).unwrap();
        }

        fn write_dec_byte(&mut self, value: u8, zero_padded: bool) {
            let pad = if zero_padded { b'0' } else { b' ' };
            let cells = [
                if value >= 100 { b'0' + value / 100 } else { pad },
                if value >= 10 { b'0' + (value / 10) % 10 } else { pad },
                b'0' + value % 10,
            ];
            self.cells.extend(cells);
        }
    }

    #[test]
    fn celsius_band_is_zero_to_forty() {
        let bounds = TempUnit::Celsius.alarm_bounds();
        assert!(bounds.out_of_range(-1));
        assert!(!bounds.out_of_range(0));
        assert!(!bounds.out_of_range(40));
        assert!(bounds.out_of_range(41));
        assert!(bounds.out_of_range(45));
    }

    #[test]
    fn fahrenheit_band_is_thirty_two_to_one_oh_four() {
        let bounds = TempUnit::Fahrenheit.alarm_bounds();
        assert!(bounds.out_of_range(31));
        assert!(!bounds.out_of_range(32));
        assert!(!bounds.out_of_range(104));
        assert!(bounds.out_of_range(105));
    }

    #[test]
    fn toggle_twice_restores_unit_and_bounds() {
        let mut monitor = TemperatureMonitor::new();
        let unit = monitor.unit();
        let bounds = unit.alarm_bounds();

        monitor.toggle_unit();
        assert_ne!(monitor.unit(), unit);
        assert_ne!(monitor.unit().alarm_bounds(), bounds);

        monitor.toggle_unit();
        assert_eq!(monitor.unit(), unit);
        assert_eq!(monitor.unit().alarm_bounds(), bounds);
    }

    #[test]
    fn fresh_sample_sets_flag_and_renders() {
        let mut monitor = TemperatureMonitor::new();
        let mut display = MockDisplay::default();
        let mut sensor = FixedSensor { reading: Some(45) };

        monitor.run(&mut display, &mut sensor);

        assert!(monitor.out_of_range());
        assert_eq!(
            display.cells.as_slice(),
            &[b' ', b' ', b'4', b'5', 0xDF, b'C']
        );
    }

    #[test]
    fn no_sample_leaves_flag_and_display_untouched() {
        let mut monitor = TemperatureMonitor::new();
        let mut display = MockDisplay::default();
        let mut sensor = FixedSensor { reading: None };

        monitor.run(&mut display, &mut sensor);

        assert!(!monitor.out_of_range());
        assert!(display.cells.is_empty());
    }

    #[test]
    fn negative_reading_renders_sign_and_stays_in_range_check() {
        let mut monitor = TemperatureMonitor::new();
        let mut display = MockDisplay::default();
        let mut sensor = FixedSensor { reading: Some(-5) };

        monitor.run(&mut display, &mut sensor);

        assert!(monitor.out_of_range());
        assert_eq!(display.cells[0], b'-');
    }
}
