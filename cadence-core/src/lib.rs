// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by the cadence crates.
//!
//! - [`CadenceError`] and the crate [`Result`] alias
//! - [`DebounceOptions`], [`ThrottleOptions`] and the normalized [`DebounceConfig`]
//! - [`IntoWait`] and the permissive numeric coercion behind it

pub mod error;
pub mod options;
pub mod wait;

pub use self::error::{CadenceError, Result};
pub use self::options::{DebounceConfig, DebounceOptions, ThrottleOptions};
pub use self::wait::IntoWait;
