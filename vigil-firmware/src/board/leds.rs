//! The two indicator LEDs embedded in the touch pads

use embassy_rp::gpio::Output;
use vigil_core::traits::{IndicatorLeds, Led};

pub struct PadLeds {
    d8: Output<'static>,
    d9: Output<'static>,
}

impl PadLeds {
    pub fn new(d8: Output<'static>, d9: Output<'static>) -> Self {
        Self { d8, d9 }
    }

    fn pin(&mut self, led: Led) -> &mut Output<'static> {
        match led {
            Led::D8 => &mut self.d8,
            Led::D9 => &mut self.d9,
        }
    }
}

impl IndicatorLeds for PadLeds {
    fn set(&mut self, led: Led, on: bool) {
        if on {
            self.pin(led).set_high();
        } else {
            self.pin(led).set_low();
        }
    }

    fn toggle(&mut self, led: Led) {
        self.pin(led).toggle();
    }
}
