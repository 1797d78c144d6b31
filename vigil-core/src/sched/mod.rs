//! Fixed-tick cooperative timeslice scheduler
//!
//! One hardware timer tick (10ms) drives one slice: the scheduler walks a
//! fixed, ordered list of task slots and reports which tasks are due this
//! slice. Each slot carries its own period divider, so a task runs at a
//! multiple of the base period without blocking the others; an idle slot
//! costs one counter increment.
//!
//! Ordering is fixed and significant: consumers of latched sensor flags
//! run before the producers that refresh them, so every task observes the
//! previous slice's data - bounded staleness of one base period.

use heapless::Vec;

/// Base scheduler period in milliseconds
pub const SLICE_PERIOD_MS: u32 = 10;

/// Identity of a task routine in the fixed table
///
/// Declaration order matches the invocation order within a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Reload the hardware deadline timer
    WatchdogRefresh,
    /// Key handling, state machine step, prompt display
    ControlDisplay,
    /// Temperature readout and out-of-range flag
    TempDisplay,
    /// Keypad matrix scan and debounce
    KeyScan,
    /// Pipelined capacitive touch scan
    TouchScan,
    /// Indicator LED visualization
    LedUpdate,
    /// Orientation-change (tamper) check
    TamperCheck,
    /// Time-of-day readout
    ClockDisplay,
}

/// One (routine, period, elapsed) record in the task table
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskSlot {
    task: TaskId,
    period_ticks: u16,
    elapsed: u16,
}

impl TaskSlot {
    /// Create a slot that fires every `period_ticks` base ticks
    ///
    /// The elapsed counter starts one short of the period so every task
    /// fires on the very first slice after boot.
    pub const fn new(task: TaskId, period_ticks: u16) -> Self {
        assert!(period_ticks >= 1);
        Self {
            task,
            period_ticks,
            elapsed: period_ticks - 1,
        }
    }

    /// Task routine this slot dispatches
    pub fn task(&self) -> TaskId {
        self.task
    }

    /// Configured period in base ticks
    pub fn period_ticks(&self) -> u16 {
        self.period_ticks
    }

    /// Ticks elapsed since the routine last ran
    ///
    /// Always strictly less than the period between slices
    /// (reset-on-fire, not wrap).
    pub fn elapsed(&self) -> u16 {
        self.elapsed
    }
}

/// The fixed, ordered task table
///
/// Owned by exactly one caller; constructed once at startup. `advance`
/// is invoked once per base tick from the main loop, never from the tick
/// interrupt itself - the interrupt only advances time.
#[derive(Debug, Clone)]
pub struct SliceScheduler<const N: usize> {
    slots: [TaskSlot; N],
    tick: u32,
}

impl<const N: usize> SliceScheduler<N> {
    /// Create a scheduler over a fixed slot table
    pub const fn new(slots: [TaskSlot; N]) -> Self {
        Self { slots, tick: 0 }
    }

    /// Advance one base tick and collect the tasks due this slice
    ///
    /// Walks every slot in table order; a slot whose elapsed counter
    /// reaches its period resets to zero and its task is included, in
    /// table order, in the returned list. The caller dispatches the due
    /// routines sequentially; all of them must finish inside the base
    /// period budget.
    pub fn advance(&mut self) -> Vec<TaskId, N> {
        self.tick = self.tick.wrapping_add(1);

        let mut due = Vec::new();
        for slot in self.slots.iter_mut() {
            slot.elapsed += 1;
            if slot.elapsed >= slot.period_ticks {
                slot.elapsed = 0;
                // Table length bounds the list; push cannot fail
                let _ = due.push(slot.task);
            }
        }
        due
    }

    /// Monotone count of base ticks since startup
    ///
    /// Never resets except at power-on.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Read-only view of the slot table
    pub fn slots(&self) -> &[TaskSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> SliceScheduler<3> {
        SliceScheduler::new([
            TaskSlot::new(TaskId::WatchdogRefresh, 1),
            TaskSlot::new(TaskId::ControlDisplay, 2),
            TaskSlot::new(TaskId::LedUpdate, 5),
        ])
    }

    #[test]
    fn every_task_fires_on_first_tick() {
        let mut sched = table();
        let due = sched.advance();
        assert_eq!(
            due.as_slice(),
            &[
                TaskId::WatchdogRefresh,
                TaskId::ControlDisplay,
                TaskId::LedUpdate
            ]
        );
    }

    #[test]
    fn dividers_fire_at_their_own_cadence() {
        let mut sched = table();
        let mut control_runs = 0;
        let mut led_runs = 0;
        let mut wdog_runs = 0;

        for _ in 0..100 {
            for id in sched.advance() {
                match id {
                    TaskId::WatchdogRefresh => wdog_runs += 1,
                    TaskId::ControlDisplay => control_runs += 1,
                    TaskId::LedUpdate => led_runs += 1,
                    _ => unreachable!(),
                }
            }
        }

        assert_eq!(wdog_runs, 100);
        assert_eq!(control_runs, 50);
        assert_eq!(led_runs, 20);
    }

    #[test]
    fn due_list_preserves_table_order() {
        let mut sched = table();
        for _ in 0..10 {
            let due = sched.advance();
            let mut last = None;
            for id in due {
                let idx = match id {
                    TaskId::WatchdogRefresh => 0,
                    TaskId::ControlDisplay => 1,
                    TaskId::LedUpdate => 2,
                    _ => unreachable!(),
                };
                if let Some(prev) = last {
                    assert!(idx > prev);
                }
                last = Some(idx);
            }
        }
    }

    #[test]
    fn tick_counter_is_monotone() {
        let mut sched = table();
        assert_eq!(sched.tick(), 0);
        for expected in 1..=50 {
            sched.advance();
            assert_eq!(sched.tick(), expected);
        }
    }

    proptest! {
        /// Elapsed counters never exceed their configured period
        /// (reset-on-fire, not wrap), for any period mix and run length.
        #[test]
        fn elapsed_never_exceeds_period(
            periods in prop::array::uniform3(1u16..=120),
            ticks in 1usize..500,
        ) {
            let mut sched = SliceScheduler::new([
                TaskSlot::new(TaskId::WatchdogRefresh, periods[0]),
                TaskSlot::new(TaskId::ControlDisplay, periods[1]),
                TaskSlot::new(TaskId::LedUpdate, periods[2]),
            ]);

            for _ in 0..ticks {
                sched.advance();
                for slot in sched.slots() {
                    prop_assert!(slot.elapsed() < slot.period_ticks());
                }
            }
        }

        /// Over T ticks a slot with period P fires exactly
        /// ceil(T / P) times (it fires on the first tick).
        #[test]
        fn fire_count_matches_period(period in 1u16..=50, ticks in 1u32..400) {
            let mut sched = SliceScheduler::new([
                TaskSlot::new(TaskId::LedUpdate, period),
            ]);

            let mut fired = 0u32;
            for _ in 0..ticks {
                fired += sched.advance().len() as u32;
            }
            let expected = ticks.div_ceil(u32::from(period));
            prop_assert_eq!(fired, expected);
        }
    }
}
