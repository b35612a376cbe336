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

//! Shared application state passed to every Axum handler via `State`.

use url::Url;

use crate::config::Config;

/// Application state shared across all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Base under which room URLs are minted.
    pub room_base_url: Url,
    /// Room lifetime in seconds.
    pub room_ttl_secs: i64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            room_base_url: config.room_base_url.clone(),
            room_ttl_secs: config.room_ttl_secs,
        }
    }
}
