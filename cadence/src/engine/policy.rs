// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pure edge decisions. Nothing here touches timers or the underlying function.

use super::records::TimingRecord;
use cadence_core::DebounceConfig;
use core::ops::Sub;
use core::time::Duration;

/// Time elapsed since a recorded instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Elapsed {
    /// Nothing was recorded yet.
    Never,
    /// The clock is now earlier than the recorded instant.
    Backward,
    Since(Duration),
}

impl Elapsed {
    pub(crate) fn between<I>(now: I, earlier: Option<I>) -> Self
    where
        I: Copy + Ord + Sub<I, Output = Duration>,
    {
        match earlier {
            None => Self::Never,
            Some(earlier) if now < earlier => Self::Backward,
            Some(earlier) => Self::Since(now - earlier),
        }
    }
}

/// What a call does once its bookkeeping is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallEdge {
    /// A new burst starts: open the windows and optionally invoke.
    Leading,
    /// The ceiling was reached while timers are armed: invoke right away.
    Ceiling,
    /// Nothing to invoke now; make sure the timers are armed.
    Deferred,
}

/// Whether enough time has passed for an invocation at `now`.
///
/// True on the first call, once `wait` has passed since the last call, when the
/// clock went backward, or once the ceiling has passed since the last invocation.
pub(crate) fn should_invoke<I>(config: &DebounceConfig, timing: &TimingRecord<I>, now: I) -> bool
where
    I: Copy + Ord + Sub<I, Output = Duration>,
{
    let quiet = match Elapsed::between(now, timing.last_call_time) {
        Elapsed::Never | Elapsed::Backward => true,
        Elapsed::Since(since_last_call) => since_last_call >= config.wait(),
    };

    quiet || ceiling_reached(config, timing, now)
}

fn ceiling_reached<I>(config: &DebounceConfig, timing: &TimingRecord<I>, now: I) -> bool
where
    I: Copy + Ord + Sub<I, Output = Duration>,
{
    let Some(max_wait) = config.max_wait() else {
        return false;
    };

    match Elapsed::between(now, timing.last_invoke_time) {
        Elapsed::Never => true,
        Elapsed::Backward => false,
        Elapsed::Since(since_last_invoke) => since_last_invoke >= max_wait,
    }
}

pub(crate) fn classify_call(is_invoking: bool, delay_armed: bool, maxing: bool) -> CallEdge {
    match (is_invoking, delay_armed, maxing) {
        (true, false, _) => CallEdge::Leading,
        (true, true, true) => CallEdge::Ceiling,
        _ => CallEdge::Deferred,
    }
}

/// Time left before the quiet period since the last call completes, within `[0, wait]`.
pub(crate) fn remaining_wait<I>(config: &DebounceConfig, timing: &TimingRecord<I>, now: I) -> Duration
where
    I: Copy + Ord + Sub<I, Output = Duration>,
{
    match Elapsed::between(now, timing.last_call_time) {
        Elapsed::Since(since_last_call) => config.wait().saturating_sub(since_last_call),
        Elapsed::Never | Elapsed::Backward => config.wait(),
    }
}

/// Time left before the ceiling since the last invocation is reached.
///
/// `None` when no ceiling is configured.
pub(crate) fn remaining_ceiling<I>(config: &DebounceConfig, timing: &TimingRecord<I>, now: I) -> Option<Duration>
where
    I: Copy + Ord + Sub<I, Output = Duration>,
{
    let max_wait = config.max_wait()?;
    Some(match Elapsed::between(now, timing.last_invoke_time) {
        Elapsed::Since(since_last_invoke) => max_wait.saturating_sub(since_last_invoke),
        Elapsed::Never => Duration::ZERO,
        Elapsed::Backward => max_wait,
    })
}
