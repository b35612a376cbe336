/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use roomcall_rooms_client::ApiError;
use thiserror::Error;

use crate::engine::EngineError;

/// Failures surfaced by coordinator intents.
#[derive(Debug, Error)]
pub enum CallError {
    /// The provisioning service was unreachable or answered garbage.
    #[error("room provisioning failed: {0}")]
    Provisioning(#[from] ApiError),

    /// The call engine rejected the join.
    #[error("join failed: {0}")]
    Join(EngineError),

    /// A non-fatal engine failure (media toggles, leave).
    #[error("engine failure: {0}")]
    Engine(EngineError),
}

impl CallError {
    /// Whether this failure puts the coordinator into the error screen.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CallError::Engine(_))
    }
}
