// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the cadence debounce and throttle wrappers.
//!
//! This crate is meant for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `InvocationLog<C, A>`
//!
//! Records what the underlying function was invoked with. Clones share the same log,
//! so one clone can move into the wrapped closure while the test keeps the other:
//!
//! ```rust
//! use cadence_test_utils::InvocationLog;
//!
//! let log = InvocationLog::<(), &str>::new();
//! let recorder = log.clone();
//! recorder.record(None, "a");
//!
//! assert_eq!(log.count(), 1);
//! assert_eq!(log.args(), vec!["a"]);
//! ```
//!
//! ## Test Fixtures
//!
//! - `Receiver` - a named calling context handed to `call_with`
//!
//! ## Helpers
//!
//! - `ms` - milliseconds as a `Duration`
//! - `advance_ms` / `block_ms` - drive a `ManualTimer` in milliseconds
//! - `run_local` - run a future inside a tokio `LocalSet`

pub mod helpers;
pub mod invocation_log;
pub mod receiver;
pub mod test_data;

pub use helpers::{advance_ms, block_ms, ms};
pub use invocation_log::{Invocation, InvocationLog};
pub use receiver::Receiver;

#[cfg(not(target_arch = "wasm32"))]
pub use helpers::run_local;
