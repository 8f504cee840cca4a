// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Arguments and calling context of a call that has not been invoked yet.
#[derive(Debug)]
pub(crate) struct PendingCall<A, C> {
    pub(crate) args: A,
    pub(crate) context: Option<C>,
}

/// Latest pending call and the last value returned by the underlying function.
#[derive(Debug)]
pub(crate) struct InvocationRecord<A, C, R> {
    pending: Option<PendingCall<A, C>>,
    result: Option<R>,
}

impl<A, C, R> Default for InvocationRecord<A, C, R> {
    fn default() -> Self {
        Self {
            pending: None,
            result: None,
        }
    }
}

impl<A, C, R: Clone> InvocationRecord<A, C, R> {
    /// Replaces whatever was pending with the newest call.
    pub(crate) fn record(&mut self, args: A, context: Option<C>) {
        self.pending = Some(PendingCall { args, context });
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingCall<A, C>> {
        self.pending.take()
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub(crate) fn store_result(&mut self, result: R) {
        self.result = Some(result);
    }

    pub(crate) fn result(&self) -> Option<R> {
        self.result.clone()
    }
}

/// When the wrapper was last called and when the current ceiling window opened.
///
/// `last_invoke_time` moves on every invocation and also when a burst starts on the
/// leading edge, whether or not that edge invokes, so the ceiling is measured from
/// the start of the burst. It never moves backward, even when the clock does.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimingRecord<I> {
    pub(crate) last_call_time: Option<I>,
    pub(crate) last_invoke_time: Option<I>,
}

impl<I> Default for TimingRecord<I> {
    fn default() -> Self {
        Self {
            last_call_time: None,
            last_invoke_time: None,
        }
    }
}

impl<I: Copy + Ord> TimingRecord<I> {
    /// Opens a new ceiling window at `now`, keeping a later recorded instant.
    pub(crate) fn mark_invoked(&mut self, now: I) {
        let latest = self.last_invoke_time.map_or(now, |previous| previous.max(now));
        self.last_invoke_time = Some(latest);
    }
}
