//! Temperature, orientation, and wall-clock sources
//!
//! - Temperature: TMP36 analog sensor on ADC0, sampled on a 500ms cadence
//! - Orientation: MMA8451 accelerometer's portrait/landscape detector
//!   over I2C, used as the tamper sensor
//! - Wall clock: monotonic uptime plus a build-time set point

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::i2c::{Blocking as I2cBlocking, I2c};
use embassy_time::{Duration, Instant};
use vigil_core::sense::TempUnit;
use vigil_core::traits::{OrientationSensor, TemperatureSensor, WallClock};

/// Hold-off between temperature conversions
const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Sensor range clamp per unit, matching the TMP36's usable span
const CELSIUS_RANGE: (i16, i16) = (-10, 125);
const FAHRENHEIT_RANGE: (i16, i16) = (14, 257);

pub struct Tmp36 {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
    last_sample: Option<Instant>,
}

impl Tmp36 {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self {
            adc,
            channel,
            last_sample: None,
        }
    }
}

impl TemperatureSensor for Tmp36 {
    fn sample(&mut self, unit: TempUnit) -> Option<i16> {
        // Enforce the conversion cadence; polls in between see no sample
        let now = Instant::now();
        if let Some(last) = self.last_sample {
            if now - last < SAMPLE_INTERVAL {
                return None;
            }
        }

        let raw = match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => raw,
            Err(_) => {
                defmt::warn!("temperature conversion failed");
                return None;
            }
        };
        self.last_sample = Some(now);

        // TMP36 transfer function: 500mV at 0C, 10mV per degree
        let millivolts = i32::from(raw) * 3300 / 4096;
        let celsius = (millivolts - 500) / 10;

        let (value, range) = match unit {
            TempUnit::Celsius => (celsius, CELSIUS_RANGE),
            TempUnit::Fahrenheit => (celsius * 9 / 5 + 32, FAHRENHEIT_RANGE),
        };
        Some((value.clamp(range.0.into(), range.1.into())) as i16)
    }
}

/// MMA8451 I2C address (SA0 high)
const MMA8451_ADDR: u8 = 0x1D;
const REG_PL_STATUS: u8 = 0x10;
const REG_PL_CFG: u8 = 0x11;
const REG_CTRL_REG1: u8 = 0x2A;

/// New-orientation flag in PL_STATUS
const PL_STATUS_NEWLP: u8 = 0x80;

pub struct Mma8451 {
    i2c: I2c<'static, I2cBlocking>,
}

impl Mma8451 {
    /// Enable the portrait/landscape detector and activate the part
    ///
    /// The status flag is read-to-clear, but the first post-boot read is
    /// unreliable; the core discards it.
    pub fn new(mut i2c: I2c<'static, I2cBlocking>) -> Self {
        // Standby to configure, enable P/L detection, back to active
        let _ = i2c.blocking_write(MMA8451_ADDR, &[REG_CTRL_REG1, 0x00]);
        let _ = i2c.blocking_write(MMA8451_ADDR, &[REG_PL_CFG, 0x40]);
        let _ = i2c.blocking_write(MMA8451_ADDR, &[REG_CTRL_REG1, 0x01]);
        Self { i2c }
    }
}

impl OrientationSensor for Mma8451 {
    fn orientation_changed(&mut self) -> bool {
        let mut status = [0u8; 1];
        match self
            .i2c
            .blocking_write_read(MMA8451_ADDR, &[REG_PL_STATUS], &mut status)
        {
            Ok(()) => status[0] & PL_STATUS_NEWLP != 0,
            Err(_) => {
                defmt::warn!("orientation status read failed");
                false
            }
        }
    }
}

/// Uptime-based time-of-day source
///
/// There is no battery-backed RTC on the carrier board; the clock starts
/// from a set point baked in at flash time and free-runs on the monotonic
/// timer. Retune the set point when reflashing.
pub struct UptimeClock {
    set_point_seconds: u32,
}

impl UptimeClock {
    pub fn new(set_point_seconds: u32) -> Self {
        Self { set_point_seconds }
    }
}

impl WallClock for UptimeClock {
    fn seconds_of_day(&mut self) -> u32 {
        let uptime = Instant::now().as_secs() as u32;
        (self.set_point_seconds.wrapping_add(uptime)) % vigil_core::clock::SECONDS_PER_DAY
    }
}
