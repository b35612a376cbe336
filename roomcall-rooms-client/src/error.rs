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

//! Error types for the rooms API client.

use thiserror::Error;

/// Errors returned by [`RoomsApiClient`](crate::RoomsApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A non-success status code with the response body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// The response was 2xx but the body did not match the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
