// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::debounced::Debounced;
use cadence_core::{DebounceConfig, IntoWait, ThrottleOptions};
use cadence_runtime::timer::Timer;

/// Throttles `func` on the default timer: at most one invocation per `wait`, on both
/// the leading and the trailing edge.
///
/// # Panics
///
/// With the tokio runtime, the first call that arms a timer panics when it does not
/// run inside a `tokio::task::LocalSet`. Construction itself never panics.
#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub fn throttle<A, R, F>(func: F, wait: impl IntoWait) -> Debounced<A, R, crate::DefaultTimer>
where
    A: 'static,
    R: Clone + 'static,
    F: Fn(A) -> R + 'static,
{
    throttle_with_timer(func, wait, ThrottleOptions::default(), Default::default())
}

pub fn throttle_with_timer<A, R, TM, F>(
    func: F,
    wait: impl IntoWait,
    options: ThrottleOptions,
    timer: TM,
) -> Debounced<A, R, TM>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    F: Fn(A) -> R + 'static,
{
    throttle_with_context(move |_, args| func(args), wait, options, timer)
}

/// Throttles a function that also receives the calling context passed to
/// [`Debounced::call_with`].
pub fn throttle_with_context<A, R, TM, C, F>(
    func: F,
    wait: impl IntoWait,
    options: ThrottleOptions,
    timer: TM,
) -> Debounced<A, R, TM, C>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    C: 'static,
    F: Fn(Option<C>, A) -> R + 'static,
{
    Debounced::from_parts(Box::new(func), DebounceConfig::throttle(wait, options), timer)
}
