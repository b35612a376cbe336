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

//! API error body.
//!
//! Failed provisioning requests answer with a bare `APIError` JSON object so
//! that the success shape of `GET /api/create-room` stays `{ url, config }`.

use serde::{Deserialize, Serialize};

/// Structured error returned by the room provisioning service.
///
/// The `code` field is a machine-readable identifier (e.g. `"ROOM_CREATION_FAILED"`).
/// The `message` field is a human-readable description suitable for display.
/// The `engineering_error` field carries debug-level detail that should be
/// stripped or redacted in production.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct APIError {
    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Optional engineering-level detail for debugging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    pub fn room_creation_failed(detail: &str) -> Self {
        Self {
            code: "ROOM_CREATION_FAILED".to_string(),
            message: "Could not create a room".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("No route for '{path}'"),
            engineering_error: None,
        }
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
