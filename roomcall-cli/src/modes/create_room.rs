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

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use roomcall_client::constants::COUNTDOWN_PREFIX;
use roomcall_client::format::{format_countdown, remaining_seconds};
use roomcall_client::platform::now_ms;
use roomcall_rooms_client::RoomsApiClient;
use tracing::{debug, info};

use crate::cli_args::CreateRoom;

pub async fn create_room(opts: CreateRoom) -> anyhow::Result<()> {
    let client = RoomsApiClient::new(opts.api_url.as_str());
    info!("Requesting a room from {}", client.base_url());
    let room = client
        .create_room()
        .await
        .with_context(|| format!("failed to create a room at {}", client.base_url()))?;

    let mut out = std::io::stdout();
    writeln!(out, "{}", room.url)?;
    match room.expires_at() {
        Some(exp) => {
            writeln!(out, "{COUNTDOWN_PREFIX}{}", countdown(exp, now_ms()))?;
            if opts.watch {
                watch(exp, Duration::from_secs(1), now_ms, &mut out).await?;
            }
        }
        None => debug!("Room has no expiry"),
    }
    Ok(())
}

/// Print the countdown every `period` until it reaches `0:00`.
pub async fn watch<W: Write>(
    expires_at: i64,
    period: Duration,
    now: impl Fn() -> f64,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(period);
    interval.tick().await;
    loop {
        interval.tick().await;
        let remaining = remaining_seconds(expires_at, now());
        writeln!(out, "{COUNTDOWN_PREFIX}{}", format_countdown(remaining))?;
        out.flush()?;
        if remaining <= 0 {
            info!("Room expired");
            return Ok(());
        }
    }
}

fn countdown(expires_at: i64, now_ms: f64) -> String {
    format_countdown(remaining_seconds(expires_at, now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[tokio::test(start_paused = true)]
    async fn watch_prints_until_expiry() {
        let clock = AtomicU64::new(0);
        let now = || (clock.fetch_add(1, Ordering::SeqCst) + 1) as f64 * 1000.0;
        let mut out = Vec::new();

        watch(3, Duration::from_secs(1), now, &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Demo expires in 0:02",
                "Demo expires in 0:01",
                "Demo expires in 0:00",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn watch_stops_at_once_for_expired_room() {
        let mut out = Vec::new();
        watch(1, Duration::from_secs(1), || 5_000.0, &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Demo expires in 0:00\n");
    }

    #[test]
    fn countdown_formats_minutes() {
        assert_eq!(countdown(60, 0.0), "1:00");
        assert_eq!(countdown(69, 60_000.0), "0:09");
    }
}
