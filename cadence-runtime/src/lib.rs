// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer abstraction for the cadence engines.
//!
//! The engines only ever need three things from their host: the current instant,
//! a way to run a callback after a delay, and a way to cancel that callback. The
//! [`timer::Timer`] trait captures exactly that, and [`impls`] provides:
//!
//! - `TokioTimer` (`runtime-tokio`, default) - `spawn_local` + `tokio::time::sleep`
//! - `WasmTimer` (`runtime-wasm`) - browser `setTimeout` through `gloo-timers`
//! - [`impls::manual::ManualTimer`] - virtual clock for tests and simulations

pub mod impls;
pub mod runtime;
pub mod timer;
