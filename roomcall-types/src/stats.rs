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

//! Network statistics reported by the call engine.

use serde::{Deserialize, Serialize};

/// Flattened network quality sample used by the coordinator.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub video_send_bits_per_second: f64,
    pub video_recv_bits_per_second: f64,
    /// Fraction in `0.0..=1.0`.
    pub worst_video_send_packet_loss: f64,
    /// Fraction in `0.0..=1.0`.
    pub worst_video_recv_packet_loss: f64,
}

/// The nested shape returned by the embeddable widget's `getNetworkStats()`.
///
/// ```json
/// {
///   "stats": {
///     "latest": { "videoSendBitsPerSecond": 512000, "videoRecvBitsPerSecond": 256000 },
///     "worstVideoSendPacketLoss": 0.02,
///     "worstVideoRecvPacketLoss": 0.0
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NetworkStatsReport {
    #[serde(default)]
    pub stats: ReportStats,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    #[serde(default)]
    pub latest: LatestSample,
    #[serde(default)]
    pub worst_video_send_packet_loss: f64,
    #[serde(default)]
    pub worst_video_recv_packet_loss: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LatestSample {
    #[serde(default)]
    pub video_send_bits_per_second: f64,
    #[serde(default)]
    pub video_recv_bits_per_second: f64,
}

impl From<NetworkStatsReport> for NetworkStats {
    fn from(report: NetworkStatsReport) -> Self {
        let stats = report.stats;
        Self {
            video_send_bits_per_second: stats.latest.video_send_bits_per_second,
            video_recv_bits_per_second: stats.latest.video_recv_bits_per_second,
            worst_video_send_packet_loss: stats.worst_video_send_packet_loss,
            worst_video_recv_packet_loss: stats.worst_video_recv_packet_loss,
        }
    }
}
