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

//! The seam to the embeddable call widget.
//!
//! Media transport, signaling and statistics collection all live behind
//! [`CallEngine`]. The coordinator only issues commands and consumes the
//! lifecycle notifications the engine pushes through
//! [`CallCoordinator::handle_engine_event`](crate::CallCoordinator::handle_engine_event).

use async_trait::async_trait;
use roomcall_types::NetworkStats;
use thiserror::Error;

/// Message the widget uses when `join` is called without a URL.
pub const MISSING_URL_MESSAGE: &str = "can't load iframe meeting because url property isn't set";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{}", MISSING_URL_MESSAGE)]
    MissingUrl,

    #[error("join rejected: {0}")]
    Rejected(String),

    #[error("{0}")]
    Failed(String),
}

impl EngineError {
    /// Map a raw widget error message onto the typed error.
    pub fn from_message(message: &str) -> Self {
        if message == MISSING_URL_MESSAGE {
            EngineError::MissingUrl
        } else {
            EngineError::Rejected(message.to_string())
        }
    }

    pub fn is_missing_url(&self) -> bool {
        matches!(self, EngineError::MissingUrl)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    pub url: String,
    pub show_leave_button: bool,
}

/// Local participant media state as reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalMedia {
    pub video: bool,
    pub audio: bool,
    pub screen: bool,
}

/// Lifecycle notifications, delivered once per real transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Loaded,
    StartedCamera,
    CameraError(String),
    JoiningMeeting,
    JoinedMeeting,
    LeftMeeting,
}

impl EngineEvent {
    /// Parse the widget's event name. Unknown names yield `None`.
    pub fn from_name(name: &str, detail: Option<&str>) -> Option<Self> {
        let event = match name {
            "loaded" => EngineEvent::Loaded,
            "started-camera" => EngineEvent::StartedCamera,
            "camera-error" => EngineEvent::CameraError(detail.unwrap_or_default().to_string()),
            "joining-meeting" => EngineEvent::JoiningMeeting,
            "joined-meeting" => EngineEvent::JoinedMeeting,
            "left-meeting" => EngineEvent::LeftMeeting,
            _ => return None,
        };
        Some(event)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Loaded => "loaded",
            EngineEvent::StartedCamera => "started-camera",
            EngineEvent::CameraError(_) => "camera-error",
            EngineEvent::JoiningMeeting => "joining-meeting",
            EngineEvent::JoinedMeeting => "joined-meeting",
            EngineEvent::LeftMeeting => "left-meeting",
        }
    }
}

/// Capabilities the coordinator needs from the call widget.
#[async_trait]
pub trait CallEngine: Send + Sync {
    /// Start joining. Resolves once the widget accepted or rejected the room.
    async fn join(&self, options: JoinOptions) -> Result<(), EngineError>;

    async fn leave(&self) -> Result<(), EngineError>;

    async fn local_media(&self) -> LocalMedia;

    async fn set_local_video(&self, enabled: bool) -> Result<(), EngineError>;

    async fn set_local_audio(&self, enabled: bool) -> Result<(), EngineError>;

    async fn start_screen_share(&self) -> Result<(), EngineError>;

    async fn stop_screen_share(&self) -> Result<(), EngineError>;

    async fn request_fullscreen(&self) -> Result<(), EngineError>;

    fn show_local_video(&self) -> bool;

    fn set_show_local_video(&self, show: bool);

    fn show_participants_bar(&self) -> bool;

    fn set_show_participants_bar(&self, show: bool);

    async fn get_network_stats(&self) -> Result<NetworkStats, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_message_maps_to_typed_error() {
        assert!(EngineError::from_message(MISSING_URL_MESSAGE).is_missing_url());
        assert_eq!(
            EngineError::from_message("room expired"),
            EngineError::Rejected("room expired".to_string())
        );
    }

    #[test]
    fn event_names_round_trip() {
        for name in [
            "loaded",
            "started-camera",
            "camera-error",
            "joining-meeting",
            "joined-meeting",
            "left-meeting",
        ] {
            let event = EngineEvent::from_name(name, None).unwrap();
            assert_eq!(event.name(), name);
        }
        assert_eq!(EngineEvent::from_name("app-message", None), None);
    }

    #[test]
    fn camera_error_keeps_detail() {
        assert_eq!(
            EngineEvent::from_name("camera-error", Some("NotAllowedError")),
            Some(EngineEvent::CameraError("NotAllowedError".to_string()))
        );
    }
}
