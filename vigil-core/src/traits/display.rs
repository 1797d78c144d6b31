//! Character display trait for the 2x16 status LCD
//!
//! The display is a fire-and-forget collaborator: writes are assumed
//! synchronous and always succeeding, so the trait is infallible. All
//! coordinates are 1-based, matching the LCD controller's addressing.

/// Number of display rows
pub const ROWS: u8 = 2;
/// Number of display columns
pub const COLS: u8 = 16;

/// Cursor position of the temperature readout (sign cell)
pub const TEMP_POS: (u8, u8) = (1, 1);
/// Cursor position of the time-of-day readout
pub const CLOCK_POS: (u8, u8) = (1, 8);
/// Cursor position of the security state prompt line
pub const PROMPT_POS: (u8, u8) = (2, 1);
/// Cursor position of the "TP" tamper indicator
pub const TAMPER_POS: (u8, u8) = (2, 12);
/// Cursor position of the "WD" watchdog reset indicator
pub const WATCHDOG_POS: (u8, u8) = (2, 15);

/// Width of the state prompt field in cells
pub const PROMPT_WIDTH: usize = 10;

/// Trait for the character LCD
///
/// Implementations own the controller protocol (nibble timing, DDRAM
/// addressing); the core only moves the cursor and emits cells.
pub trait CharDisplay {
    /// Move the cursor to a 1-based (row, column) position
    fn move_to(&mut self, row: u8, col: u8);

    /// Write an ASCII string starting at the cursor
    fn write_str(&mut self, text: &str);

    /// Write a single raw glyph code at the cursor
    ///
    /// Takes a raw byte rather than `char` so callers can emit
    /// controller-specific glyphs such as the degree sign (0xDF).
    fn write_char(&mut self, glyph: u8);

    /// Write a decimal value as exactly three cells
    ///
    /// Leading positions are blank, or '0' when `zero_padded` is set
    /// (e.g. 7 renders as "  7" or "007"). Fixed-width output lets
    /// callers overwrite individual cells afterwards.
    fn write_dec_byte(&mut self, value: u8, zero_padded: bool);
}

/// Helper trait for positioned writes
pub trait DisplayExt: CharDisplay {
    /// Move to a layout position and write a string there
    fn write_at(&mut self, pos: (u8, u8), text: &str) {
        self.move_to(pos.0, pos.1);
        self.write_str(text);
    }

    /// Blank `width` cells starting at a layout position
    fn clear_at(&mut self, pos: (u8, u8), width: usize) {
        self.move_to(pos.0, pos.1);
        for _ in 0..width {
            self.write_char(b' ');
        }
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> DisplayExt for T {}
