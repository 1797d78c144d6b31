//! Security state machine definition
//!
//! All display, LED, and tone behavior is a function of the current
//! state; the state itself is a function of the previous state and the
//! inputs latched for this slice.

use super::events::KeyCode;

/// Inputs sampled at the start of a control pass
///
/// All flags are the previous slice's latched values; the control task
/// runs before the producers that refresh them, so staleness is bounded
/// by one base period.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInputs {
    /// The single pending key event, if any
    pub key: Option<KeyCode>,
    /// Electrode 1 touched flag
    pub electrode1: bool,
    /// Electrode 2 touched flag
    pub electrode2: bool,
    /// Temperature outside the active unit's alarm bounds
    pub temperature_out_of_range: bool,
}

impl TickInputs {
    /// Whether any alarm trigger condition is present
    pub fn triggered(&self) -> bool {
        self.electrode1 || self.electrode2 || self.temperature_out_of_range
    }
}

/// Security states
///
/// `Alarming` carries the captured cause as an orthogonal flag - it is
/// distinguished for display purposes only, not a fourth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecurityState {
    /// Triggers ignored; waiting for the Arm key
    Disarmed,
    /// Monitoring; any trigger enters ALARM
    Armed,
    /// Latched alarm; only the Disarm key leaves
    Alarming {
        /// Temperature (rather than touch) tripped the alarm
        from_temperature: bool,
    },
}

impl Default for SecurityState {
    /// The appliance powers up armed
    fn default() -> Self {
        SecurityState::Armed
    }
}

impl SecurityState {
    /// Process one slice worth of inputs and return the next state
    ///
    /// This is the core transition logic. Keys other than Arm/Disarm
    /// never change the state; a Disarm observed together with a trigger
    /// wins (the alarm is never entered on the same pass it is
    /// disarmed).
    pub fn step(self, inputs: &TickInputs) -> Self {
        use SecurityState::*;

        match self {
            Disarmed => match inputs.key {
                Some(KeyCode::Arm) => Armed,
                _ => Disarmed,
            },
            Armed => match inputs.key {
                Some(KeyCode::Disarm) => Disarmed,
                _ if inputs.triggered() => Alarming {
                    from_temperature: inputs.temperature_out_of_range,
                },
                _ => Armed,
            },
            Alarming { .. } => match inputs.key {
                Some(KeyCode::Disarm) => Disarmed,
                _ => self,
            },
        }
    }

    /// The prompt text shown when this state is entered
    pub fn prompt(&self) -> &'static str {
        match self {
            SecurityState::Disarmed => "DISARMED",
            SecurityState::Armed => "ARMED",
            SecurityState::Alarming {
                from_temperature: true,
            } => "TEMP ALARM",
            SecurityState::Alarming {
                from_temperature: false,
            } => "ALARM",
        }
    }

    /// Whether the alarm is latched
    pub fn is_alarming(&self) -> bool {
        matches!(self, SecurityState::Alarming { .. })
    }

    /// Whether the alarm tone should be playing
    ///
    /// The tone is gated by state: running only while alarming.
    pub fn tone_active(&self) -> bool {
        self.is_alarming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(key: KeyCode) -> TickInputs {
        TickInputs {
            key: Some(key),
            ..TickInputs::default()
        }
    }

    #[test]
    fn arm_disarm_round_trip() {
        let state = SecurityState::Disarmed;
        let armed = state.step(&key(KeyCode::Arm));
        assert_eq!(armed, SecurityState::Armed);
        let disarmed = armed.step(&key(KeyCode::Disarm));
        assert_eq!(disarmed, SecurityState::Disarmed);
    }

    #[test]
    fn touch_trigger_enters_sensor_alarm() {
        let inputs = TickInputs {
            electrode1: true,
            ..TickInputs::default()
        };
        let next = SecurityState::Armed.step(&inputs);
        assert_eq!(
            next,
            SecurityState::Alarming {
                from_temperature: false
            }
        );
        assert_eq!(next.prompt(), "ALARM");
    }

    #[test]
    fn temperature_trigger_enters_temp_alarm() {
        let inputs = TickInputs {
            temperature_out_of_range: true,
            ..TickInputs::default()
        };
        let next = SecurityState::Armed.step(&inputs);
        assert_eq!(
            next,
            SecurityState::Alarming {
                from_temperature: true
            }
        );
        assert_eq!(next.prompt(), "TEMP ALARM");
    }

    #[test]
    fn triggers_ignored_while_disarmed() {
        let inputs = TickInputs {
            electrode1: true,
            electrode2: true,
            temperature_out_of_range: true,
            ..TickInputs::default()
        };
        assert_eq!(
            SecurityState::Disarmed.step(&inputs),
            SecurityState::Disarmed
        );
    }

    #[test]
    fn alarm_latches_until_disarm() {
        let alarm = SecurityState::Alarming {
            from_temperature: false,
        };

        // Triggers clearing does not leave the alarm
        assert_eq!(alarm.step(&TickInputs::default()), alarm);

        // Arm key does not leave the alarm either
        assert_eq!(alarm.step(&key(KeyCode::Arm)), alarm);

        // Only Disarm leaves, unconditionally
        let still_triggered = TickInputs {
            key: Some(KeyCode::Disarm),
            electrode1: true,
            temperature_out_of_range: true,
            ..TickInputs::default()
        };
        assert_eq!(alarm.step(&still_triggered), SecurityState::Disarmed);
    }

    #[test]
    fn disarm_wins_over_simultaneous_trigger() {
        let inputs = TickInputs {
            key: Some(KeyCode::Disarm),
            electrode2: true,
            ..TickInputs::default()
        };
        assert_eq!(SecurityState::Armed.step(&inputs), SecurityState::Disarmed);
    }

    #[test]
    fn cause_captured_at_entry() {
        // Both touch and temperature present: cause records temperature
        let inputs = TickInputs {
            electrode1: true,
            temperature_out_of_range: true,
            ..TickInputs::default()
        };
        assert_eq!(
            SecurityState::Armed.step(&inputs),
            SecurityState::Alarming {
                from_temperature: true
            }
        );
    }

    #[test]
    fn orthogonal_keys_never_change_state() {
        for state in [
            SecurityState::Disarmed,
            SecurityState::Armed,
            SecurityState::Alarming {
                from_temperature: false,
            },
        ] {
            assert_eq!(state.step(&key(KeyCode::ToggleUnit)), state);
            assert_eq!(state.step(&key(KeyCode::AckTamper)), state);
        }
    }

    proptest! {
        /// With no trigger inputs, any key sequence only ever alternates
        /// between Disarmed and Armed - Alarming is unreachable.
        #[test]
        fn key_only_sequences_never_alarm(
            keys in prop::collection::vec(
                prop::sample::select(&[
                    KeyCode::Arm,
                    KeyCode::Disarm,
                    KeyCode::ToggleUnit,
                    KeyCode::AckTamper,
                ][..]),
                0..64,
            )
        ) {
            let mut state = SecurityState::default();
            for k in keys {
                state = state.step(&key(k));
                prop_assert!(!state.is_alarming());
            }
        }

        /// Once alarming, the state stays alarming under arbitrary
        /// sensor/temperature churn until a Disarm event is observed.
        #[test]
        fn alarm_is_idempotent_under_triggers(
            flags in prop::collection::vec(prop::array::uniform3(any::<bool>()), 1..64)
        ) {
            let mut state = SecurityState::Alarming { from_temperature: false };
            for [e1, e2, temp] in flags {
                let inputs = TickInputs {
                    key: None,
                    electrode1: e1,
                    electrode2: e2,
                    temperature_out_of_range: temp,
                };
                state = state.step(&inputs);
                prop_assert_eq!(
                    state,
                    SecurityState::Alarming { from_temperature: false }
                );
            }
        }
    }
}
