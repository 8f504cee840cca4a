// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_runtime::impls::manual::ManualTimer;
use std::time::Duration;

#[must_use]
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Moves the virtual clock forward, firing due callbacks. Returns how many fired.
pub fn advance_ms(timer: &ManualTimer, millis: u64) -> usize {
    timer.advance(ms(millis))
}

/// Moves the virtual clock forward without firing anything, like a busy loop would.
pub fn block_ms(timer: &ManualTimer, millis: u64) {
    timer.block_for(ms(millis));
}

/// Runs `future` to completion inside a fresh `LocalSet`, as `TokioTimer` requires.
#[cfg(not(target_arch = "wasm32"))]
pub async fn run_local<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    tokio::task::LocalSet::new().run_until(future).await
}
