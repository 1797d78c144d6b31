//! 4x4 matrix keypad with two-sample debounce
//!
//! Rows are driven one at a time and the columns read back through
//! pull-downs. A key state only commits after two identical consecutive
//! scans (20ms apart), and a press edge buffers at most one event until
//! the control task consumes it.

use embassy_rp::gpio::{Input, Output};
use embassy_time::{block_for, Duration};
use vigil_core::state::KeyCode;
use vigil_core::traits::Keypad;

/// Key action at each matrix position (row-major)
///
/// Physical legend, letter column top to bottom:
/// ```text
///   1 2 3 A        A = arm
///   4 5 6 B        B = toggle temperature unit
///   7 8 9 C        C = acknowledge tamper
///   * 0 # D        D = disarm
/// ```
const KEY_MAP: [Option<KeyCode>; 16] = [
    None,
    None,
    None,
    Some(KeyCode::Arm),
    None,
    None,
    None,
    Some(KeyCode::ToggleUnit),
    None,
    None,
    None,
    Some(KeyCode::AckTamper),
    None,
    None,
    None,
    Some(KeyCode::Disarm),
];

// The legend's letter column is load-bearing; pin it down
const _: () = {
    assert!(matches!(KEY_MAP[3], Some(KeyCode::Arm)));
    assert!(matches!(KEY_MAP[7], Some(KeyCode::ToggleUnit)));
    assert!(matches!(KEY_MAP[11], Some(KeyCode::AckTamper)));
    assert!(matches!(KEY_MAP[15], Some(KeyCode::Disarm)));
};

pub struct MatrixKeypad {
    rows: [Output<'static>; 4],
    cols: [Input<'static>; 4],
    /// Raw bitmap from the previous scan, for the stability check
    last_raw: u16,
    /// Debounced key bitmap
    stable: u16,
    pending: Option<KeyCode>,
}

impl MatrixKeypad {
    pub fn new(rows: [Output<'static>; 4], cols: [Input<'static>; 4]) -> Self {
        Self {
            rows,
            cols,
            last_raw: 0,
            stable: 0,
            pending: None,
        }
    }

    fn sample_matrix(&mut self) -> u16 {
        let mut raw = 0u16;
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_high();
            // Let the column lines settle through the pull-downs
            block_for(Duration::from_micros(3));
            for (c, col) in self.cols.iter().enumerate() {
                if col.is_high() {
                    raw |= 1 << (r * 4 + c);
                }
            }
            row.set_low();
        }
        raw
    }
}

impl Keypad for MatrixKeypad {
    fn scan(&mut self) {
        let raw = self.sample_matrix();

        if raw == self.last_raw {
            let pressed = raw & !self.stable;
            self.stable = raw;

            // First newly pressed key with a mapping wins; unmapped keys
            // are dropped here and never surface
            for bit in 0..16 {
                if pressed & (1 << bit) != 0 {
                    if let Some(key) = KEY_MAP[bit] {
                        self.pending = Some(key);
                        break;
                    }
                }
            }
        }
        self.last_raw = raw;
    }

    fn take_event(&mut self) -> Option<KeyCode> {
        self.pending.take()
    }
}
