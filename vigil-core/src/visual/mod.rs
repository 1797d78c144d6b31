//! Indicator LED visualization
//!
//! Derives the LED blink pattern from the security state and a latched
//! history of which electrodes have triggered during the current alarm
//! episode. Two explicit rate dividers cooperate: the task table invokes
//! the engine every 5 slices (50ms), and an inner enter-counter divides
//! that by 5 again (250ms) for the slow heartbeat patterns.

use crate::state::SecurityState;
use crate::touch::Electrode;
use crate::traits::{IndicatorLeds, Led};

/// Task table period for the visualization task, in slices
pub const VIZ_PERIOD_SLICES: u16 = 5;

/// Inner divider applied on top of the task period for slow patterns
const SLOW_PATTERN_DIVIDER: u8 = 5;

/// Latched set of electrodes that triggered during one alarm episode
///
/// Bits only ever get set within an episode; the set empties the moment
/// the state leaves ALARM, so it is non-empty only while alarming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorHistory(u8);

impl SensorHistory {
    const E1_BIT: u8 = 0b10;
    const E2_BIT: u8 = 0b01;

    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    fn bit(electrode: Electrode) -> u8 {
        match electrode {
            Electrode::E1 => Self::E1_BIT,
            Electrode::E2 => Self::E2_BIT,
        }
    }

    /// Latch an electrode into the set
    pub fn latch(&mut self, electrode: Electrode) {
        self.0 |= Self::bit(electrode);
    }

    /// Whether an electrode has triggered this episode
    pub fn contains(&self, electrode: Electrode) -> bool {
        self.0 & Self::bit(electrode) != 0
    }

    /// Whether nothing has triggered yet
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// LED pattern engine, invoked every [`VIZ_PERIOD_SLICES`] slices
#[derive(Debug)]
pub struct AlarmVisualizationEngine {
    history: SensorHistory,
    enter_counter: u8,
    toggle_on: bool,
}

impl Default for AlarmVisualizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmVisualizationEngine {
    /// Create the engine with empty history
    ///
    /// The enter-counter starts saturated so the first invocation of a
    /// slow pattern acts immediately instead of waiting 250ms.
    pub fn new() -> Self {
        Self {
            history: SensorHistory::empty(),
            enter_counter: SLOW_PATTERN_DIVIDER,
            toggle_on: false,
        }
    }

    /// Run one visualization pass
    ///
    /// `electrode1`/`electrode2` are the current touched flags; the
    /// engine latches them into the episode history while alarming.
    pub fn update(
        &mut self,
        leds: &mut impl IndicatorLeds,
        state: SecurityState,
        electrode1: bool,
        electrode2: bool,
    ) {
        match state {
            SecurityState::Alarming { .. } => {
                // Latch which sensors have been activated; an idle
                // electrode turns off the *opposite* LED. The crossed
                // indices are long-standing board behavior - keep as is.
                if electrode1 {
                    self.history.latch(Electrode::E1);
                } else {
                    leds.set(Led::D9, false);
                }
                if electrode2 {
                    self.history.latch(Electrode::E2);
                } else {
                    leds.set(Led::D8, false);
                }

                // Fast blink (10Hz) on the latched subset
                let phase_on = self.next_toggle();
                match (
                    self.history.contains(Electrode::E1),
                    self.history.contains(Electrode::E2),
                ) {
                    (true, false) => leds.set(Led::D8, phase_on),
                    (false, true) => leds.set(Led::D9, phase_on),
                    (true, true) => {
                        leds.set(Led::D8, phase_on);
                        leds.set(Led::D9, phase_on);
                    }
                    (false, false) => {}
                }
            }
            SecurityState::Disarmed => {
                self.history.clear();
                if self.slow_tick() {
                    // Each LED mirrors its own electrode, toggling while
                    // held rather than lighting steadily
                    if electrode1 {
                        leds.toggle(Led::D8);
                    } else {
                        leds.set(Led::D8, false);
                    }
                    if electrode2 {
                        leds.toggle(Led::D9);
                    } else {
                        leds.set(Led::D9, false);
                    }
                }
            }
            SecurityState::Armed => {
                self.history.clear();
                if self.slow_tick() {
                    // Alternating heartbeat
                    let phase_on = self.next_toggle();
                    leds.set(Led::D8, phase_on);
                    leds.set(Led::D9, !phase_on);
                }
            }
        }
    }

    /// Latched sensor-activation history for the current alarm episode
    pub fn history(&self) -> SensorHistory {
        self.history
    }

    /// Advance the blink phase and return whether this is an "on" phase
    fn next_toggle(&mut self) -> bool {
        self.toggle_on = !self.toggle_on;
        self.toggle_on
    }

    /// Inner rate divider for the 250ms patterns
    ///
    /// Fires on one pass in [`SLOW_PATTERN_DIVIDER`]; the counter also
    /// advances on the firing pass.
    fn slow_tick(&mut self) -> bool {
        let fire = self.enter_counter >= SLOW_PATTERN_DIVIDER;
        if fire {
            self.enter_counter = 0;
        }
        self.enter_counter += 1;
        fire
    }
}
