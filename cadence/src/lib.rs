// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Cadence
//!
//! Debounce and throttle wrappers for plain functions.
//!
//! A wrapper turns a burst of calls into a reduced set of invocations of the
//! underlying function, keeping the latest arguments and calling context and
//! returning the most recent result on every call.
//!
//! ## Overview
//!
//! - **[`debounce`]** - invoke once calls have been quiet for `wait`
//! - **[`throttle`]** - invoke at most once per `wait`
//! - **[`Debounced`]** - the callable handle, with `call`, `call_with`, `cancel` and `flush`
//! - **[`DebounceOptions`]** / **[`ThrottleOptions`]** - leading/trailing edges and the
//!   `max_wait` ceiling
//!
//! Everything runs on one thread. The underlying function may call back into its
//! own wrapper, including recursively.
//!
//! ## Runtime Support
//!
//! - `runtime-tokio` (default) - [`TokioTimer`], needs a `tokio::task::LocalSet`
//! - `runtime-wasm` - `WasmTimer` on browser `setTimeout`
//! - [`ManualTimer`] - always available, a virtual clock for tests and simulations
//!
//! ## Example
//!
//! ```
//! use cadence::{throttle_with_timer, ManualTimer, ThrottleOptions};
//! use std::time::Duration;
//!
//! let timer = ManualTimer::new();
//! let throttled = throttle_with_timer(|n: u32| n * 2, 100, ThrottleOptions::default(), timer.clone());
//!
//! assert_eq!(throttled.call(1), Some(2));
//! assert_eq!(throttled.call(2), Some(2));
//!
//! timer.advance(Duration::from_millis(100));
//! assert_eq!(throttled.last_result(), Some(4));
//! ```

mod builder;
mod debounce;
mod debounced;
mod engine;
mod logging;
mod throttle;

pub mod prelude;

pub use builder::{DebounceBuilder, ThrottleBuilder};
pub use debounce::{debounce_with_context, debounce_with_timer};
pub use debounced::Debounced;
pub use throttle::{throttle_with_context, throttle_with_timer};

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub use debounce::debounce;
#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub use throttle::throttle;

pub use cadence_core::{CadenceError, DebounceConfig, DebounceOptions, IntoWait, Result, ThrottleOptions};
pub use cadence_runtime::impls::manual::{ManualInstant, ManualTimer};
pub use cadence_runtime::timer::Timer;

pub type ManualDebounced<A, R, C = ()> = Debounced<A, R, ManualTimer, C>;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use cadence_runtime::impls::tokio::TokioTimer;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type TokioDebounced<A, R, C = ()> = Debounced<A, R, TokioTimer, C>;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use cadence_runtime::impls::wasm::WasmTimer;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type WasmDebounced<A, R, C = ()> = Debounced<A, R, WasmTimer, C>;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type DefaultRuntime = cadence_runtime::impls::tokio::TokioRuntime;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type DefaultRuntime = cadence_runtime::impls::wasm::WasmRuntime;

/// Timer used by [`debounce`] and [`throttle`].
#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub type DefaultTimer = <DefaultRuntime as cadence_runtime::runtime::Runtime>::Timer;
