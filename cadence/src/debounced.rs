// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::builder::{DebounceBuilder, ThrottleBuilder};
use crate::engine::{BoxedFunc, Engine};
use cadence_core::DebounceConfig;
use cadence_runtime::timer::Timer;
use core::fmt;
use std::rc::Rc;

/// Callable handle around a debounced or throttled function.
///
/// `A` is the argument type (use a tuple for several arguments), `R` the return type
/// of the underlying function and `C` the optional calling context handed to it next
/// to the arguments. Every call returns the result of the most recent invocation, or
/// `None` while the function has never run.
///
/// Clones share the same state, so a clone can be captured by the underlying function
/// itself to call back into its own wrapper.
///
/// # Examples
///
/// ```
/// use cadence::{debounce_with_timer, DebounceOptions, ManualTimer};
/// use std::time::Duration;
///
/// let timer = ManualTimer::new();
/// let debounced = debounce_with_timer(|text: &str| text.len(), 32, DebounceOptions::default(), timer.clone());
///
/// assert_eq!(debounced.call("a"), None);
/// assert_eq!(debounced.call("abc"), None);
///
/// timer.advance(Duration::from_millis(32));
/// assert_eq!(debounced.last_result(), Some(3));
/// ```
pub struct Debounced<A, R, TM: Timer, C = ()> {
    engine: Rc<Engine<A, C, R, TM>>,
}

impl<A, R, TM, C> Debounced<A, R, TM, C>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    C: 'static,
{
    pub(crate) fn from_parts(func: BoxedFunc<A, C, R>, config: DebounceConfig, timer: TM) -> Self {
        Self {
            engine: Engine::new(func, config, timer),
        }
    }

    /// Starts a fluent debounce builder on `timer`.
    pub fn builder(timer: TM) -> DebounceBuilder<A, R, TM, C> {
        DebounceBuilder::new(timer)
    }

    /// Starts a fluent throttle builder on `timer`.
    pub fn throttle_builder(timer: TM) -> ThrottleBuilder<A, R, TM, C> {
        ThrottleBuilder::new(timer)
    }

    /// Calls the wrapper without a calling context.
    pub fn call(&self, args: A) -> Option<R> {
        self.engine.call(args, None)
    }

    /// Calls the wrapper, handing `context` to the underlying function with `args`.
    pub fn call_with(&self, context: C, args: A) -> Option<R> {
        self.engine.call(args, Some(context))
    }

    /// Drops the pending invocation and disarms every timer.
    ///
    /// The last result is kept, and the next call starts a fresh burst.
    pub fn cancel(&self) {
        self.engine.cancel();
    }

    /// Runs a pending trailing invocation right away.
    ///
    /// Returns the last result unchanged when nothing is pending.
    pub fn flush(&self) -> Option<R> {
        self.engine.flush()
    }

    /// Whether a delay timer is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.engine.is_pending()
    }

    /// Result of the most recent invocation, without calling.
    #[must_use]
    pub fn last_result(&self) -> Option<R> {
        self.engine.last_result()
    }

    /// The normalized configuration the wrapper runs with.
    #[must_use]
    pub fn config(&self) -> DebounceConfig {
        self.engine.config()
    }
}

impl<A, R, TM: Timer, C> Clone for Debounced<A, R, TM, C> {
    fn clone(&self) -> Self {
        Self {
            engine: Rc::clone(&self.engine),
        }
    }
}

impl<A, R, TM, C> fmt::Debug for Debounced<A, R, TM, C>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    C: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("config", &self.engine.config())
            .field("pending", &self.engine.is_pending())
            .finish_non_exhaustive()
    }
}
