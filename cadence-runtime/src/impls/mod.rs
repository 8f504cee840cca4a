// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod manual;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub mod tokio;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub mod wasm;
