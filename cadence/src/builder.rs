// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fluent construction of [`Debounced`] handles.
//!
//! Builders collect the function, the wait and the options, and only fail at
//! [`build`](DebounceBuilder::build) when no function was supplied.

use crate::debounced::Debounced;
use crate::engine::BoxedFunc;
use cadence_core::{CadenceError, DebounceConfig, DebounceOptions, IntoWait, Result, ThrottleOptions};
use cadence_runtime::timer::Timer;
use core::time::Duration;

const MISSING_FUNC: &str = "expected a function to wrap";

/// Builder for a debounced handle. Starts from the debounce defaults.
pub struct DebounceBuilder<A, R, TM: Timer, C = ()> {
    timer: TM,
    wait: Duration,
    options: DebounceOptions,
    func: Option<BoxedFunc<A, C, R>>,
}

impl<A, R, TM, C> DebounceBuilder<A, R, TM, C>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    C: 'static,
{
    pub fn new(timer: TM) -> Self {
        Self {
            timer,
            wait: Duration::ZERO,
            options: DebounceOptions::default(),
            func: None,
        }
    }

    /// Sets the function to wrap. It receives the calling context, if any, and the arguments.
    #[must_use]
    pub fn func<F>(mut self, func: F) -> Self
    where
        F: Fn(Option<C>, A) -> R + 'static,
    {
        self.func = Some(Box::new(func));
        self
    }

    #[must_use]
    pub fn wait(mut self, wait: impl IntoWait) -> Self {
        self.wait = wait.into_wait();
        self
    }

    #[must_use]
    pub fn leading(mut self, leading: bool) -> Self {
        self.options.leading = leading;
        self
    }

    #[must_use]
    pub fn trailing(mut self, trailing: bool) -> Self {
        self.options.trailing = trailing;
        self
    }

    #[must_use]
    pub fn max_wait(mut self, max_wait: impl IntoWait) -> Self {
        self.options = self.options.with_max_wait(max_wait);
        self
    }

    /// Replaces every option at once.
    #[must_use]
    pub fn options(mut self, options: DebounceOptions) -> Self {
        self.options = options;
        self
    }

    /// # Errors
    /// Returns [`CadenceError::InvalidArgument`] when no function was supplied.
    pub fn build(self) -> Result<Debounced<A, R, TM, C>> {
        let func = self.func.ok_or_else(|| CadenceError::invalid_argument(MISSING_FUNC))?;
        let config = DebounceConfig::new(self.wait, self.options);
        Ok(Debounced::from_parts(func, config, self.timer))
    }
}

/// Builder for a throttled handle. Starts from the throttle defaults.
pub struct ThrottleBuilder<A, R, TM: Timer, C = ()> {
    timer: TM,
    wait: Duration,
    options: ThrottleOptions,
    func: Option<BoxedFunc<A, C, R>>,
}

impl<A, R, TM, C> ThrottleBuilder<A, R, TM, C>
where
    A: 'static,
    R: Clone + 'static,
    TM: Timer,
    C: 'static,
{
    pub fn new(timer: TM) -> Self {
        Self {
            timer,
            wait: Duration::ZERO,
            options: ThrottleOptions::default(),
            func: None,
        }
    }

    #[must_use]
    pub fn func<F>(mut self, func: F) -> Self
    where
        F: Fn(Option<C>, A) -> R + 'static,
    {
        self.func = Some(Box::new(func));
        self
    }

    #[must_use]
    pub fn wait(mut self, wait: impl IntoWait) -> Self {
        self.wait = wait.into_wait();
        self
    }

    #[must_use]
    pub fn leading(mut self, leading: bool) -> Self {
        self.options.leading = leading;
        self
    }

    #[must_use]
    pub fn trailing(mut self, trailing: bool) -> Self {
        self.options.trailing = trailing;
        self
    }

    #[must_use]
    pub fn options(mut self, options: ThrottleOptions) -> Self {
        self.options = options;
        self
    }

    /// # Errors
    /// Returns [`CadenceError::InvalidArgument`] when no function was supplied.
    pub fn build(self) -> Result<Debounced<A, R, TM, C>> {
        let func = self.func.ok_or_else(|| CadenceError::invalid_argument(MISSING_FUNC))?;
        let config = DebounceConfig::throttle(self.wait, self.options);
        Ok(Debounced::from_parts(func, config, self.timer))
    }
}
