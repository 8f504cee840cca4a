// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::debounced::Debounced;
use cadence_core::{DebounceConfig, DebounceOptions, IntoWait};
use cadence_runtime::timer::Timer;

/// Debounces `func` on the default timer with the default options.
///
/// The function runs once calls have stopped for `wait`, with the arguments of the
/// last call. Under tokio the handle must be called from inside a `LocalSet`.
///
/// # Panics
///
/// With the tokio runtime, the first call that arms a timer panics when it does not
/// run inside a `tokio::task::LocalSet`. Construction itself never panics.
#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub fn debounce<A, R, F>(func: F, wait: impl IntoWait) -> Debounced<A, R, crate::DefaultTimer>
where
    A: 'static,
    R: Clone + 'static,
    F: Fn(A) -> R + 'static,
{
    debounce_with_timer(func, wait, DebounceOptions::default(), Default::default())
}

/// Debounces `func` on `timer`.
pub fn debounce_with_timer<A, R, TM, F>(
    func: F,
    wait: impl IntoWait,
    options: DebounceOptions,
    timer: TM,
) -> Debounced<A, R, TM>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    F: Fn(A) -> R + 'static,
{
    debounce_with_context(move |_, args| func(args), wait, options, timer)
}

/// Debounces a function that also receives the calling context passed to
/// [`Debounced::call_with`].
pub fn debounce_with_context<A, R, TM, C, F>(
    func: F,
    wait: impl IntoWait,
    options: DebounceOptions,
    timer: TM,
) -> Debounced<A, R, TM, C>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    C: 'static,
    F: Fn(Option<C>, A) -> R + 'static,
{
    Debounced::from_parts(Box::new(func), DebounceConfig::new(wait, options), timer)
}
