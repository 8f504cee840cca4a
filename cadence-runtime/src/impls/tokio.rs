// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use crate::{
    runtime::Runtime,
    timer::{Timer, TimerCallback},
};

#[cfg(feature = "runtime-tokio")]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;
}

/// Timer backed by tokio's time driver.
///
/// Callbacks are spawned with [`tokio::task::spawn_local`], so scheduling must happen
/// inside a [`tokio::task::LocalSet`]. Instants come from [`tokio::time::Instant`],
/// which follows a paused test clock.
///
/// # Panics
///
/// [`Timer::schedule_after`] panics when called outside a `LocalSet`.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Instant = tokio::time::Instant;
    type Task = tokio::task::JoinHandle<()>;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Task {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    fn cancel_task(&self, task: Self::Task) {
        task.abort();
    }
}
