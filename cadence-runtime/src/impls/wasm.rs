// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-wasm")]
use std::time::Duration;

#[cfg(feature = "runtime-wasm")]
use crate::{
    runtime::Runtime,
    timer::{Timer, TimerCallback},
};

#[cfg(feature = "runtime-wasm")]
pub struct WasmRuntime;

#[cfg(feature = "runtime-wasm")]
impl Runtime for WasmRuntime {
    type Timer = WasmTimer;
    type Instant = WasmInstant;
}

/// Millisecond wall-clock instant read from `Date.now()`.
#[cfg(feature = "runtime-wasm")]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WasmInstant(u64);

#[cfg(feature = "runtime-wasm")]
impl WasmInstant {
    fn now() -> Self {
        WasmInstant(js_sys::Date::now() as u64)
    }
}

#[cfg(feature = "runtime-wasm")]
impl std::ops::Sub for WasmInstant {
    type Output = Duration;

    fn sub(self, other: WasmInstant) -> Duration {
        Duration::from_millis(self.0.saturating_sub(other.0))
    }
}

#[cfg(feature = "runtime-wasm")]
impl std::ops::Add<Duration> for WasmInstant {
    type Output = WasmInstant;

    fn add(self, duration: Duration) -> WasmInstant {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        WasmInstant(self.0.saturating_add(millis))
    }
}

/// Timer backed by the browser's `setTimeout`.
#[cfg(feature = "runtime-wasm")]
#[derive(Clone, Debug, Default)]
pub struct WasmTimer;

#[cfg(feature = "runtime-wasm")]
impl Timer for WasmTimer {
    type Instant = WasmInstant;
    type Task = gloo_timers::callback::Timeout;

    fn now(&self) -> Self::Instant {
        WasmInstant::now()
    }

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Task {
        // setTimeout takes a signed 32-bit millisecond delay
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX).min(i32::MAX as u32);
        gloo_timers::callback::Timeout::new(millis, callback)
    }

    fn cancel_task(&self, task: Self::Task) {
        drop(task.cancel());
    }
}
