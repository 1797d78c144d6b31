//! Appliance controller
//!
//! The controller owns every collaborator and engine, plus the fixed
//! task table, and dispatches one slice worth of routines per base tick:
//!
//! - watchdog refresh, control/state update, temperature display,
//!   key scan, touch scan, LED update, tamper check, clock display
//!
//! Everything runs to completion inside the slice; shared flags are
//! written by at most one task per tick and read by the others in
//! table order, so no locking is needed anywhere.

use crate::clock;
use crate::safety::WatchdogSupervisor;
use crate::sched::{SliceScheduler, TaskId, TaskSlot};
use crate::sense::{TamperMonitor, TemperatureMonitor};
use crate::state::{KeyCode, SecurityState, TickInputs};
use crate::touch::{Electrode, TouchScanEngine};
use crate::traits::display::{PROMPT_POS, PROMPT_WIDTH};
use crate::traits::{
    CharDisplay, DeadlineTimer, DisplayExt, IndicatorLeds, Keypad,
    OrientationSensor, TemperatureSensor, ToneOutput, TouchSense, WallClock,
};
use crate::visual::{AlarmVisualizationEngine, VIZ_PERIOD_SLICES};

/// Number of slots in the task table
pub const TASK_COUNT: usize = 8;

/// Control task period: key handling and state update every 20ms
const CONTROL_PERIOD_SLICES: u16 = 2;
/// Touch scan period: one pipeline step every 20ms
const TOUCH_PERIOD_SLICES: u16 = 2;
/// Tamper check period: 50ms
const TAMPER_PERIOD_SLICES: u16 = 5;
/// Clock display period: once per second
const CLOCK_PERIOD_SLICES: u16 = 100;

/// The fixed task table, constructed once at startup
///
/// Slot order is the invocation order within a slice and it is
/// significant: the control task runs before the scans that refresh the
/// flags it reads, so it always observes a previously completed scan,
/// and the watchdog refresh always runs first.
pub const fn task_table() -> SliceScheduler<TASK_COUNT> {
    SliceScheduler::new([
        TaskSlot::new(TaskId::WatchdogRefresh, 1),
        TaskSlot::new(TaskId::ControlDisplay, CONTROL_PERIOD_SLICES),
        TaskSlot::new(TaskId::TempDisplay, 1),
        TaskSlot::new(TaskId::KeyScan, 1),
        TaskSlot::new(TaskId::TouchScan, TOUCH_PERIOD_SLICES),
        TaskSlot::new(TaskId::LedUpdate, VIZ_PERIOD_SLICES),
        TaskSlot::new(TaskId::TamperCheck, TAMPER_PERIOD_SLICES),
        TaskSlot::new(TaskId::ClockDisplay, CLOCK_PERIOD_SLICES),
    ])
}

/// The appliance control core
///
/// Generic over the board's collaborator implementations; the firmware
/// constructs one of these at boot and calls [`run_slice`](Self::run_slice)
/// once per 10ms tick.
pub struct Controller<D, K, T, S, O, C, W, L, Q>
where
    D: CharDisplay,
    K: Keypad,
    T: TouchSense,
    S: TemperatureSensor,
    O: OrientationSensor,
    C: WallClock,
    W: DeadlineTimer,
    L: IndicatorLeds,
    Q: ToneOutput,
{
    display: D,
    keypad: K,
    touch_sense: T,
    temp_sensor: S,
    orientation: O,
    clock: C,
    deadline: W,
    leds: L,
    tone: Q,

    schedule: SliceScheduler<TASK_COUNT>,
    watchdog: WatchdogSupervisor,
    touch: TouchScanEngine,
    temp: TemperatureMonitor,
    tamper: TamperMonitor,
    viz: AlarmVisualizationEngine,
    state: SecurityState,
    /// State last written to the prompt line (None before the first draw)
    shown_state: Option<SecurityState>,
}

impl<D, K, T, S, O, C, W, L, Q> Controller<D, K, T, S, O, C, W, L, Q>
where
    D: CharDisplay,
    K: Keypad,
    T: TouchSense,
    S: TemperatureSensor,
    O: OrientationSensor,
    C: WallClock,
    W: DeadlineTimer,
    L: IndicatorLeds,
    Q: ToneOutput,
{
    /// Boot the appliance
    ///
    /// Performs the one-time blocking setup: watchdog reset-cause check
    /// and arming, then touch calibration. After this returns, nothing
    /// in the controller blocks again.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mut display: D,
        keypad: K,
        mut touch_sense: T,
        temp_sensor: S,
        orientation: O,
        clock: C,
        mut deadline: W,
        leds: L,
        tone: Q,
    ) -> Self {
        let watchdog = WatchdogSupervisor::start(&mut deadline, &mut display);
        let touch = TouchScanEngine::calibrate(&mut touch_sense);

        Self {
            display,
            keypad,
            touch_sense,
            temp_sensor,
            orientation,
            clock,
            deadline,
            leds,
            tone,
            schedule: task_table(),
            watchdog,
            touch,
            temp: TemperatureMonitor::new(),
            tamper: TamperMonitor::new(),
            viz: AlarmVisualizationEngine::new(),
            state: SecurityState::default(),
            shown_state: None,
        }
    }

    /// Run one full slice: advance the schedule, dispatch due tasks
    ///
    /// Invoked once per base tick from the main loop; must complete
    /// within the base period, which the watchdog deadline enforces.
    pub fn run_slice(&mut self) {
        let due = self.schedule.advance();
        for id in due {
            self.run_task(id);
        }
    }

    fn run_task(&mut self, id: TaskId) {
        match id {
            TaskId::WatchdogRefresh => self.watchdog.refresh(&mut self.deadline),
            TaskId::ControlDisplay => self.control_display_task(),
            TaskId::TempDisplay => {
                self.temp.run(&mut self.display, &mut self.temp_sensor)
            }
            TaskId::KeyScan => self.keypad.scan(),
            TaskId::TouchScan => self.touch.poll(&mut self.touch_sense),
            TaskId::LedUpdate => self.viz.update(
                &mut self.leds,
                self.state,
                self.touch.touched(Electrode::E1),
                self.touch.touched(Electrode::E2),
            ),
            TaskId::TamperCheck => {
                self.tamper.run(&mut self.display, &mut self.orientation)
            }
            TaskId::ClockDisplay => clock::run(&mut self.display, &mut self.clock),
        }
    }

    /// Key handling, state machine step, tone gate, prompt display
    ///
    /// Consumes the single pending key event (this is the only reader),
    /// steps the state machine on the previous tick's latched flags, and
    /// rewrites the prompt line only on the pass the state changes.
    fn control_display_task(&mut self) {
        let key = self.keypad.take_event();

        // Orthogonal keys act without touching the security state
        match key {
            Some(KeyCode::ToggleUnit) => self.temp.toggle_unit(),
            Some(KeyCode::AckTamper) => TamperMonitor::acknowledge(&mut self.display),
            _ => {}
        }

        let inputs = TickInputs {
            key,
            electrode1: self.touch.touched(Electrode::E1),
            electrode2: self.touch.touched(Electrode::E2),
            temperature_out_of_range: self.temp.out_of_range(),
        };
        let next = self.state.step(&inputs);

        // Tone gate re-asserted every pass; both calls are idempotent
        if next.tone_active() {
            self.tone.start();
        } else {
            self.tone.stop();
        }

        // Edge-triggered prompt rewrite
        if self.shown_state != Some(next) {
            self.display.clear_at(PROMPT_POS, PROMPT_WIDTH);
            self.display.write_at(PROMPT_POS, next.prompt());
            self.shown_state = Some(next);
        }

        self.state = next;
    }

    /// Current security state
    pub fn state(&self) -> SecurityState {
        self.state
    }

    /// Base ticks since boot
    pub fn tick(&self) -> u32 {
        self.schedule.tick()
    }

    /// Temperature monitor (active unit, out-of-range flag)
    pub fn temperature(&self) -> &TemperatureMonitor {
        &self.temp
    }

    /// Touch engine (calibration, touched flags)
    pub fn touch(&self) -> &TouchScanEngine {
        &self.touch
    }

    /// Visualization engine (latched sensor history)
    pub fn visualization(&self) -> &AlarmVisualizationEngine {
        &self.viz
    }

    /// Watchdog supervisor (prior reset cause)
    pub fn watchdog(&self) -> &WatchdogSupervisor {
        &self.watchdog
    }
}
