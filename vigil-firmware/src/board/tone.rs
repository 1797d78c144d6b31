//! Alarm tone on a PWM output
//!
//! The slice is configured once for roughly a 1kHz square wave into the
//! piezo driver; start/stop only flip the slice enable bit, so both calls
//! are cheap and idempotent.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use vigil_core::traits::ToneOutput;

pub struct AlarmTone {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl AlarmTone {
    /// Wrap a PWM slice already routed to the piezo pin
    ///
    /// 125MHz system clock / 16 divider / 7812 top = ~1kHz.
    pub fn tone_config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.divider = 16u8.into();
        config.top = 7812;
        config.compare_a = 3906;
        config.enable = false;
        config
    }

    pub fn new(pwm: Pwm<'static>) -> Self {
        Self {
            pwm,
            config: Self::tone_config(),
        }
    }
}

impl ToneOutput for AlarmTone {
    fn start(&mut self) {
        if !self.config.enable {
            self.config.enable = true;
            self.pwm.set_config(&self.config);
        }
    }

    fn stop(&mut self) {
        if self.config.enable {
            self.config.enable = false;
            self.pwm.set_config(&self.config);
        }
    }
}
