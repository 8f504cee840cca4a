// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::clone::Clone;
use core::cmp::Ord;
use core::fmt::Debug;
use core::marker::Copy;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Callback run by a [`Timer`] once its deadline has passed.
pub type TimerCallback = Box<dyn FnOnce() + 'static>;

pub trait Timer: Clone + Debug + 'static {
    type Instant: Copy + Debug + Ord + Add<Duration, Output = Self::Instant> + Sub<Self::Instant, Output = Duration>;

    /// Handle to a scheduled callback, consumed by [`Timer::cancel_task`].
    type Task: Debug;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Runs `callback` on the timer's thread once `delay` has elapsed.
    ///
    /// The callback never runs synchronously inside this call, even for a zero delay.
    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Task;

    /// Prevents a scheduled callback from running. Cancelling a task that already
    /// ran is a no-op.
    fn cancel_task(&self, task: Self::Task);
}
