// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic timer driven by an explicit virtual clock.
//!
//! Nothing happens until the owner moves the clock. [`ManualTimer::advance`] fires
//! every due callback in deadline order, letting callbacks schedule further work that
//! falls inside the same window. [`ManualTimer::block_for`] moves the clock while
//! pretending the thread is busy, so due callbacks wait for the next advance, and
//! [`ManualTimer::rewind`] moves the clock backward.
//!
//! ```
//! use cadence_runtime::impls::manual::ManualTimer;
//! use cadence_runtime::timer::Timer;
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let timer = ManualTimer::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = fired.clone();
//! timer.schedule_after(Duration::from_millis(10), Box::new(move || flag.set(true)));
//!
//! timer.advance(Duration::from_millis(9));
//! assert!(!fired.get());
//! timer.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use crate::timer::{Timer, TimerCallback};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Sub};
use std::rc::Rc;
use std::time::Duration;

/// Instant on a [`ManualTimer`]'s virtual clock, measured from the clock's origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualInstant(Duration);

impl ManualInstant {
    /// Time elapsed since the clock's origin.
    #[must_use]
    pub const fn since_origin(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for ManualInstant {
    type Output = ManualInstant;

    fn add(self, duration: Duration) -> ManualInstant {
        ManualInstant(self.0.saturating_add(duration))
    }
}

impl Sub for ManualInstant {
    type Output = Duration;

    fn sub(self, other: ManualInstant) -> Duration {
        self.0.saturating_sub(other.0)
    }
}

/// Handle to a callback scheduled on a [`ManualTimer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ManualTask {
    deadline: ManualInstant,
    id: u64,
}

impl ManualTask {
    #[must_use]
    pub const fn deadline(&self) -> ManualInstant {
        self.deadline
    }
}

/// Virtual-clock timer. Clones share the same clock and task queue.
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    schedule: Rc<RefCell<Schedule>>,
}

#[derive(Default)]
struct Schedule {
    now: ManualInstant,
    next_id: u64,
    tasks: BTreeMap<(ManualInstant, u64), TimerCallback>,
}

impl fmt::Debug for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schedule")
            .field("now", &self.now)
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, firing every callback that falls due.
    ///
    /// Returns the number of callbacks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Moves the clock to `target`, firing every callback due at or before it.
    ///
    /// Callbacks run in deadline order with the clock set to their deadline, and
    /// may schedule further callbacks. The clock never moves backward here.
    pub fn advance_to(&self, target: ManualInstant) -> usize {
        let mut fired = 0;
        while let Some(callback) = self.pop_due(target) {
            callback();
            fired += 1;
        }

        let mut schedule = self.schedule.borrow_mut();
        schedule.now = schedule.now.max(target);
        fired
    }

    /// Fires callbacks that are already due without moving the clock.
    pub fn run_due(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    /// Moves the clock forward without firing anything, as if the thread were busy.
    pub fn block_for(&self, by: Duration) {
        let mut schedule = self.schedule.borrow_mut();
        schedule.now = schedule.now + by;
    }

    /// Moves the clock backward. Pending deadlines are left untouched.
    pub fn rewind(&self, by: Duration) {
        let mut schedule = self.schedule.borrow_mut();
        schedule.now = ManualInstant(schedule.now.0.saturating_sub(by));
    }

    /// Number of callbacks waiting to fire.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.schedule.borrow().tasks.len()
    }

    /// Deadline of the next callback, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<ManualInstant> {
        self.schedule
            .borrow()
            .tasks
            .keys()
            .next()
            .map(|(deadline, _)| *deadline)
    }

    fn pop_due(&self, target: ManualInstant) -> Option<TimerCallback> {
        let mut schedule = self.schedule.borrow_mut();
        let key = schedule
            .tasks
            .keys()
            .next()
            .copied()
            .filter(|(deadline, _)| *deadline <= target)?;
        schedule.now = schedule.now.max(key.0);
        schedule.tasks.remove(&key)
    }
}

impl Timer for ManualTimer {
    type Instant = ManualInstant;
    type Task = ManualTask;

    fn now(&self) -> Self::Instant {
        self.schedule.borrow().now
    }

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Task {
        let mut schedule = self.schedule.borrow_mut();
        let id = schedule.next_id;
        schedule.next_id += 1;

        let deadline = schedule.now + delay;
        schedule.tasks.insert((deadline, id), callback);
        ManualTask { deadline, id }
    }

    fn cancel_task(&self, task: Self::Task) {
        self.schedule
            .borrow_mut()
            .tasks
            .remove(&(task.deadline, task.id));
    }
}
