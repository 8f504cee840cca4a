// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used functions and types.
//!
//! ```
//! use cadence::prelude::*;
//! ```

pub use crate::debounce::{debounce_with_context, debounce_with_timer};
pub use crate::throttle::{throttle_with_context, throttle_with_timer};
pub use crate::{DebounceBuilder, Debounced, ThrottleBuilder};
pub use cadence_core::{DebounceOptions, IntoWait, ThrottleOptions};
pub use cadence_runtime::timer::Timer;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub use crate::{debounce, throttle};
