// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Calling context handed to a wrapper through `call_with`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Receiver {
    pub name: String,
}

impl Receiver {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receiver[name={}]", self.name)
    }
}
