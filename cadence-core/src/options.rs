// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Options and normalized configuration for debounced and throttled wrappers.
//!
//! Options are permissive: they can be built in code with the `with_*` methods or
//! read from any serde format. When read from data, a non-object value means
//! "use the defaults", unknown keys are ignored, flags follow truthiness and
//! `maxWait` goes through the same numeric coercion as `wait`.
//!
//! ```
//! use cadence_core::{DebounceConfig, DebounceOptions};
//! use serde_json::json;
//! use std::time::Duration;
//!
//! let options: DebounceOptions =
//!     serde_json::from_value(json!({ "leading": 1, "maxWait": "16", "colour": "red" })).unwrap();
//! let config = DebounceConfig::new(32u64, options);
//!
//! assert!(config.leading());
//! assert!(config.trailing());
//! // maxWait never drops below wait
//! assert_eq!(config.max_wait(), Some(Duration::from_millis(32)));
//! ```

use crate::wait::{is_truthy, IntoWait};
use core::time::Duration;
use serde::Deserialize;
use serde_json::Value;

const LEADING: &str = "leading";
const TRAILING: &str = "trailing";
const MAX_WAIT: &str = "maxWait";

/// Options recognized by a debounced wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct DebounceOptions {
    /// Invoke on the leading edge of a burst.
    pub leading: bool,
    /// Invoke on the trailing edge of a burst.
    pub trailing: bool,
    /// Maximum time a call may be deferred since the last invocation.
    pub max_wait: Option<Duration>,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            leading: false,
            trailing: true,
            max_wait: None,
        }
    }
}

impl DebounceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    #[must_use]
    pub fn with_max_wait(mut self, max_wait: impl IntoWait) -> Self {
        self.max_wait = Some(max_wait.into_wait());
        self
    }

    /// Reads options from an arbitrary value, falling back to defaults.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Value::Object(map) = value else {
            return defaults;
        };

        Self {
            leading: map.get(LEADING).map_or(defaults.leading, is_truthy),
            trailing: map.get(TRAILING).map_or(defaults.trailing, is_truthy),
            max_wait: map.get(MAX_WAIT).map(IntoWait::into_wait),
        }
    }
}

impl From<Value> for DebounceOptions {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Options recognized by a throttled wrapper.
///
/// A throttle is a debounce whose ceiling equals its wait, so there is no
/// `max_wait` here and both edges are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct ThrottleOptions {
    pub leading: bool,
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl ThrottleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    /// Reads options from an arbitrary value, falling back to defaults.
    ///
    /// A `maxWait` key is ignored: the ceiling is always the wait period.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Value::Object(map) = value else {
            return defaults;
        };

        Self {
            leading: map.get(LEADING).map_or(defaults.leading, is_truthy),
            trailing: map.get(TRAILING).map_or(defaults.trailing, is_truthy),
        }
    }

    /// The equivalent debounce options for the given wait period.
    #[must_use]
    pub const fn into_debounce(self, wait: Duration) -> DebounceOptions {
        DebounceOptions {
            leading: self.leading,
            trailing: self.trailing,
            max_wait: Some(wait),
        }
    }
}

impl From<Value> for ThrottleOptions {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Normalized configuration owned by a single wrapper.
///
/// The wait period is sanitized and the ceiling is clamped so that it is never
/// shorter than the wait period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    wait: Duration,
    leading: bool,
    trailing: bool,
    max_wait: Option<Duration>,
}

impl DebounceConfig {
    pub fn new(wait: impl IntoWait, options: DebounceOptions) -> Self {
        let wait = wait.into_wait();
        Self {
            wait,
            leading: options.leading,
            trailing: options.trailing,
            max_wait: options.max_wait.map(|max_wait| max_wait.max(wait)),
        }
    }

    /// Configuration of a throttle: a debounce with `max_wait == wait`.
    pub fn throttle(wait: impl IntoWait, options: ThrottleOptions) -> Self {
        let wait = wait.into_wait();
        Self::new(wait, options.into_debounce(wait))
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    #[must_use]
    pub const fn leading(&self) -> bool {
        self.leading
    }

    #[must_use]
    pub const fn trailing(&self) -> bool {
        self.trailing
    }

    #[must_use]
    pub const fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }

    /// Whether an invocation ceiling is configured.
    #[must_use]
    pub const fn is_maxing(&self) -> bool {
        self.max_wait.is_some()
    }
}
