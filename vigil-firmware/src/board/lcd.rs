//! HD44780-compatible 2x16 character LCD, 4-bit parallel mode
//!
//! All writes are blocking; the longest (clear) takes about 2ms and only
//! happens during boot. Per-cell writes cost tens of microseconds, well
//! inside the slice budget for the few cells rewritten per task.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};
use vigil_core::traits::CharDisplay;

/// DDRAM base address of each display row
const ROW_BASE: [u8; 2] = [0x00, 0x40];

pub struct Hd44780 {
    rs: Output<'static>,
    en: Output<'static>,
    data: [Output<'static>; 4],
}

impl Hd44780 {
    /// Initialize the controller into 4-bit, 2-line mode
    ///
    /// Runs the datasheet's by-instruction init sequence; blocks for
    /// roughly 60ms. Boot-time only.
    pub fn new(
        rs: Output<'static>,
        en: Output<'static>,
        data: [Output<'static>; 4],
    ) -> Self {
        let mut lcd = Self { rs, en, data };

        // Power-on settle, then the three 8-bit function-set knocks that
        // force the controller into a known state
        block_for(Duration::from_millis(50));
        lcd.rs.set_low();
        lcd.write_nibble(0x3);
        block_for(Duration::from_millis(5));
        lcd.write_nibble(0x3);
        block_for(Duration::from_micros(150));
        lcd.write_nibble(0x3);
        block_for(Duration::from_micros(150));

        // Switch to 4-bit mode
        lcd.write_nibble(0x2);
        block_for(Duration::from_micros(150));

        // Function set: 4-bit, 2 lines, 5x8 font
        lcd.command(0x28);
        // Display on, cursor off, blink off
        lcd.command(0x0C);
        // Clear display
        lcd.command(0x01);
        block_for(Duration::from_millis(2));
        // Entry mode: increment, no shift
        lcd.command(0x06);

        lcd
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (i, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << i) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
        // Enable pulse; minimum width is 450ns
        self.en.set_high();
        block_for(Duration::from_micros(1));
        self.en.set_low();
        block_for(Duration::from_micros(1));
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        block_for(Duration::from_micros(40));
    }

    fn command(&mut self, cmd: u8) {
        self.rs.set_low();
        self.write_byte(cmd);
    }

    fn cell(&mut self, value: u8) {
        self.rs.set_high();
        self.write_byte(value);
    }
}

impl CharDisplay for Hd44780 {
    fn move_to(&mut self, row: u8, col: u8) {
        let base = ROW_BASE[usize::from(row.clamp(1, 2)) - 1];
        self.command(0x80 | (base + col.saturating_sub(1)));
    }

    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.cell(byte);
        }
    }

    fn write_char(&mut self, glyph: u8) {
        self.cell(glyph);
    }

    fn write_dec_byte(&mut self, value: u8, zero_padded: bool) {
        let pad = if zero_padded { b'0' } else { b' ' };
        let hundreds = value / 100;
        let tens = (value / 10) % 10;

        self.cell(if hundreds != 0 { b'0' + hundreds } else { pad });
        self.cell(if hundreds != 0 || tens != 0 {
            b'0' + tens
        } else {
            pad
        });
        self.cell(b'0' + value % 10);
    }
}
