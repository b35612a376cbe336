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

//! Pure display helpers. None of these touch coordinator state.

use url::Url;

/// Whole seconds left until `expires_at_secs`, floored, at `now_ms`.
pub fn remaining_seconds(expires_at_secs: i64, now_ms: f64) -> i64 {
    let remaining_ms = (expires_at_secs as f64) * 1000.0 - now_ms;
    (remaining_ms / 1000.0).floor() as i64
}

/// Format a remaining duration as `minutes:seconds`, e.g. `1:00` or `0:09`.
///
/// Negative durations clamp to `0:00`.
pub fn format_countdown(remaining_secs: i64) -> String {
    let remaining = remaining_secs.max(0);
    format!("{}:{:02}", remaining / 60, remaining % 60)
}

/// `floor(bps / 1000) kb/s`
pub fn format_bitrate(bits_per_second: f64) -> String {
    format!("{} kb/s", floor_non_negative(bits_per_second / 1000.0))
}

/// Loss fraction as a floored percentage, e.g. `0.257` becomes `25%`.
pub fn format_packet_loss(fraction: f64) -> String {
    format!("{}%", floor_non_negative(fraction * 100.0))
}

fn floor_non_negative(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

/// Whether `input` looks like a joinable room link: absolute `http(s)` with a host.
pub fn is_valid_room_url(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
