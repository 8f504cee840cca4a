// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the cadence call wrappers
//!
//! Debouncing and throttling resolve every timing edge case by policy, so the only
//! failure a caller can observe is a wrapper that was assembled without an underlying
//! function.
//!
//! # Examples
//!
//! ```
//! use cadence_core::{CadenceError, Result};
//!
//! fn require_func(present: bool) -> Result<()> {
//!     if present {
//!         Ok(())
//!     } else {
//!         Err(CadenceError::invalid_argument("expected a function"))
//!     }
//! }
//!
//! assert!(require_func(true).is_ok());
//! assert!(require_func(false).is_err());
//! ```

/// Root error type for all cadence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CadenceError {
    /// A constructor received an argument it cannot work with
    ///
    /// Raised synchronously while building a wrapper, for example when no
    /// underlying function was supplied. There is no recovery path inside the
    /// engine; the caller has to build again with a valid argument.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Description of the offending argument
        context: String,
    },
}

impl CadenceError {
    /// Create an invalid-argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Check if this error was raised while constructing a wrapper
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for cadence operations
pub type Result<T> = core::result::Result<T, CadenceError>;
