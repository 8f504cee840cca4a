// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::receiver::Receiver;

#[must_use]
pub fn receiver_alpha() -> Receiver {
    Receiver::new("alpha")
}

#[must_use]
pub fn receiver_beta() -> Receiver {
    Receiver::new("beta")
}

#[must_use]
pub fn receiver_gamma() -> Receiver {
    Receiver::new("gamma")
}
