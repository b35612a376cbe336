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

//! Application configuration loaded from environment variables.

use std::env;

use url::Url;

/// Configuration for the rooms API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8081").
    pub listen_addr: String,
    /// Base under which room URLs are minted. Always ends with `/`.
    pub room_base_url: Url,
    /// Room lifetime in seconds (default: 3600).
    pub room_ttl_secs: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `ROOM_BASE_URL` (e.g. `https://example.daily.co`)
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8081"`)
    /// - `ROOM_TTL_SECS` (default: `"3600"`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let base = lookup("ROOM_BASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or("ROOM_BASE_URL environment variable is required")?;
        let room_base_url = parse_base_url(&base)?;

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8081".to_string());
        let room_ttl_secs = lookup("ROOM_TTL_SECS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<i64>()
            .ok()
            .filter(|ttl| *ttl > 0)
            .ok_or("ROOM_TTL_SECS must be a positive integer")?;

        Ok(Self {
            listen_addr,
            room_base_url,
            room_ttl_secs,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, String> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash).map_err(|e| format!("ROOM_BASE_URL is invalid: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("ROOM_BASE_URL must be an http(s) URL".to_string());
    }
    Ok(url)
}
