// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Permissive coercion of wait periods.
//!
//! Wrappers never reject a wait period. Whatever the caller passes is turned into a
//! finite, non-negative number of milliseconds; anything that cannot be read as one
//! (NaN, infinities, negative numbers, unparsable strings, objects) becomes zero.
//!
//! ```
//! use cadence_core::IntoWait;
//! use serde_json::json;
//! use std::time::Duration;
//!
//! assert_eq!(32u64.into_wait(), Duration::from_millis(32));
//! assert_eq!((-5i32).into_wait(), Duration::ZERO);
//! assert_eq!(f64::NAN.into_wait(), Duration::ZERO);
//! assert_eq!(json!(" 0x20 ").into_wait(), Duration::from_millis(32));
//! assert_eq!(None::<u64>.into_wait(), Duration::ZERO);
//! ```

use core::time::Duration;
use serde_json::Value;

/// Conversion into a sanitized wait period.
pub trait IntoWait {
    /// Returns the wait period, with invalid input collapsed to [`Duration::ZERO`].
    fn into_wait(self) -> Duration;
}

impl IntoWait for Duration {
    fn into_wait(self) -> Duration {
        self
    }
}

impl IntoWait for u64 {
    fn into_wait(self) -> Duration {
        Duration::from_millis(self)
    }
}

impl IntoWait for u32 {
    fn into_wait(self) -> Duration {
        Duration::from_millis(u64::from(self))
    }
}

impl IntoWait for i64 {
    fn into_wait(self) -> Duration {
        u64::try_from(self).map_or(Duration::ZERO, Duration::from_millis)
    }
}

impl IntoWait for i32 {
    fn into_wait(self) -> Duration {
        i64::from(self).into_wait()
    }
}

impl IntoWait for f64 {
    fn into_wait(self) -> Duration {
        millis_to_duration(self)
    }
}

impl IntoWait for f32 {
    fn into_wait(self) -> Duration {
        millis_to_duration(f64::from(self))
    }
}

impl IntoWait for &Value {
    fn into_wait(self) -> Duration {
        millis_to_duration(to_millis(self))
    }
}

impl IntoWait for Value {
    fn into_wait(self) -> Duration {
        (&self).into_wait()
    }
}

impl<T: IntoWait> IntoWait for Option<T> {
    fn into_wait(self) -> Duration {
        self.map_or(Duration::ZERO, IntoWait::into_wait)
    }
}

/// Reads an arbitrary value as a finite, non-negative number of milliseconds.
///
/// `null` is zero, booleans are one or zero, strings are trimmed and parsed
/// (including `0x`, `0o` and `0b` prefixes), a single-element array reads as its
/// element. Everything else, and every non-finite or negative result, is zero.
#[must_use]
pub fn to_millis(value: &Value) -> f64 {
    sanitize(raw_number(value))
}

/// JavaScript-style truthiness, used for boolean option flags.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts sanitized milliseconds into a [`Duration`], saturating on overflow.
#[must_use]
pub fn millis_to_duration(millis: f64) -> Duration {
    let nanos = (sanitize(millis) * 1_000_000.0).round();
    if nanos >= u64::MAX as f64 {
        Duration::MAX
    } else {
        Duration::from_nanos(nanos as u64)
    }
}

fn sanitize(millis: f64) -> f64 {
    if millis.is_finite() && millis > 0.0 {
        millis
    } else {
        0.0
    }
}

fn raw_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_number(text),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => raw_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };

    match radix {
        Some(radix) => u64::from_str_radix(&text[2..], radix).map_or(f64::NAN, |n| n as f64),
        None => text.parse::<f64>().unwrap_or(f64::NAN),
    }
}
