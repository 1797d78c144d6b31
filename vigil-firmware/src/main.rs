//! Vigil - Security Appliance Firmware
//!
//! Main firmware binary for the RP2040-based alarm appliance. All
//! appliance logic lives in `vigil-core`; this binary wires the board's
//! peripherals to the core's collaborator traits and drives the 10ms
//! slice loop.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::Pwm;
use embassy_rp::watchdog::Watchdog;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use vigil_core::controller::Controller;
use vigil_core::sched::SLICE_PERIOD_MS;

mod board;

use board::keypad::MatrixKeypad;
use board::lcd::Hd44780;
use board::leds::PadLeds;
use board::sensors::{Mma8451, Tmp36, UptimeClock};
use board::tone::AlarmTone;
use board::touch::ChargePads;
use board::watchdog::HardwareWatchdog;

/// Wall-clock set point baked in at flash time (09:00:00)
///
/// No battery-backed RTC on this board; retune when reflashing.
const CLOCK_SET_POINT_SECONDS: u32 = 9 * 3600;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("vigil firmware starting");

    let p = embassy_rp::init(Default::default());

    // Status LCD, 4-bit parallel: RS=GP2, EN=GP3, D4..D7=GP4..GP7
    let display = Hd44780::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        [
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
        ],
    );

    // Keypad matrix: rows GP8..GP11 driven, columns GP12..GP15 read
    let keypad = MatrixKeypad::new(
        [
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
        ],
        [
            Input::new(p.PIN_12, Pull::Down),
            Input::new(p.PIN_13, Pull::Down),
            Input::new(p.PIN_14, Pull::Down),
            Input::new(p.PIN_15, Pull::Down),
        ],
    );

    // Touch electrodes: GP18 (pad 1), GP19 (pad 2)
    let touch = ChargePads::new(Flex::new(p.PIN_18), Flex::new(p.PIN_19));

    // TMP36 on ADC0 (GP26)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let temp = Tmp36::new(adc, Channel::new_pin(p.PIN_26, Pull::None));

    // MMA8451 accelerometer on I2C0: SDA=GP0, SCL=GP1
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, I2cConfig::default());
    let orientation = Mma8451::new(i2c);

    let clock = UptimeClock::new(CLOCK_SET_POINT_SECONDS);

    let watchdog = HardwareWatchdog::new(Watchdog::new(p.WATCHDOG));

    // Pad LEDs: D8=GP20, D9=GP21
    let leds = PadLeds::new(
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::Low),
    );

    // Piezo driver on GP16 (PWM slice 0, channel A)
    let tone = AlarmTone::new(Pwm::new_output_a(
        p.PWM_SLICE0,
        p.PIN_16,
        AlarmTone::tone_config(),
    ));

    // Boot: reset-cause check, watchdog arm, touch calibration
    let mut controller = Controller::new(
        display,
        keypad,
        touch,
        temp,
        orientation,
        clock,
        watchdog,
        leds,
        tone,
    );
    info!("boot complete, entering slice loop");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(SLICE_PERIOD_MS)));
    loop {
        ticker.next().await;
        controller.run_slice();
    }
}
