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
 */

//! Room provisioning payloads.

use serde::{Deserialize, Serialize};

/// Response payload for `GET /api/create-room`.
///
/// ```json
/// { "url": "https://example.daily.co/k3j2h1g4f5d6", "config": { "exp": 1767225600 } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreateRoomResponse {
    /// Joinable room URL handed to the call engine.
    pub url: String,
    #[serde(default)]
    pub config: RoomConfig,
}

/// Room properties returned alongside the URL.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RoomConfig {
    /// Unix timestamp in seconds after which the room can no longer be joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl CreateRoomResponse {
    pub fn expires_at(&self) -> Option<i64> {
        self.config.exp
    }
}
