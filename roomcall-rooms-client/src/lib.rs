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

//! REST client for the roomcall room provisioning service.
//!
//! # Example
//!
//! ```no_run
//! use roomcall_rooms_client::RoomsApiClient;
//!
//! # async fn example() -> Result<(), roomcall_rooms_client::ApiError> {
//! let client = RoomsApiClient::new("http://localhost:8081");
//! let room = client.create_room().await?;
//! println!("Join at {}", room.url);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod rooms;

pub use error::ApiError;
pub use roomcall_types;

use reqwest::Client;

/// A typed REST client for the room provisioning service.
#[derive(Debug, Clone)]
pub struct RoomsApiClient {
    base_url: String,
    http: Client,
}

impl RoomsApiClient {
    /// Create a new client pointing at the given service base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8081"`
    pub fn new(base_url: &str) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Same as [`new`](Self::new) but reusing an existing `reqwest::Client`.
    pub fn with_http_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        Ok(self.http.get(self.url(path)?))
    }

    fn url(&self, path: &str) -> Result<String, ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::Config("base URL is empty".to_string()));
        }
        Ok(format!("{}{}", self.base_url, path))
    }
}

/// Decode a 2xx JSON body into `T`, or map the status to [`ApiError`].
pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|e| ApiError::MalformedResponse(e.to_string()))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = RoomsApiClient::new("http://localhost:8081//");
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn empty_base_url_is_a_config_error() {
        let client = RoomsApiClient::new("");
        assert!(matches!(client.url("/api/create-room"), Err(ApiError::Config(_))));
    }
}
