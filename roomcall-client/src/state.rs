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

//! Screen modes, the session record and user intents.

use serde::{Deserialize, Serialize};

use crate::constants::{
    JOIN_ERROR_DESCRIPTION, JOIN_ERROR_TITLE, PROVISIONING_ERROR_DESCRIPTION,
    PROVISIONING_ERROR_TITLE,
};

/// The mutually exclusive screen mode shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Start screen: join form and "create and start" button.
    #[default]
    Home,
    /// The engine is establishing the connection.
    Lobby,
    /// Joined; call controls and network stats are shown.
    InCall,
    /// A provisioning or join failure is on screen until the user retries.
    Error,
}

impl ViewState {
    /// Whether an active session is allowed in this state.
    pub fn holds_session(self) -> bool {
        matches!(self, ViewState::Lobby | ViewState::InCall)
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewState::Home => "Home",
            ViewState::Lobby => "Lobby",
            ViewState::InCall => "InCall",
            ViewState::Error => "Error",
        };
        f.write_str(name)
    }
}

/// The coordinator's record of the room currently being joined or in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub room_url: Option<String>,
    /// Unix seconds. Only meaningful while `active`.
    pub expires_at: Option<i64>,
    pub active: bool,
}

impl Session {
    pub fn new(room_url: impl Into<String>, expires_at: Option<i64>) -> Self {
        Self {
            room_url: Some(room_url.into()),
            expires_at,
            active: true,
        }
    }
}

/// The user action that triggered a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionIntent {
    JoinExisting(String),
    CreateAndStart,
    Retry,
    Leave,
}

/// Title/description pair shown on the error screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub title: String,
    pub description: String,
}

impl ErrorMessage {
    pub fn provisioning() -> Self {
        Self {
            title: PROVISIONING_ERROR_TITLE.to_string(),
            description: PROVISIONING_ERROR_DESCRIPTION.to_string(),
        }
    }

    pub fn incorrect_room_url() -> Self {
        Self {
            title: JOIN_ERROR_TITLE.to_string(),
            description: JOIN_ERROR_DESCRIPTION.to_string(),
        }
    }
}

/// Formatted, read-only network quality values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkDisplay {
    pub video_send: String,
    pub video_receive: String,
    pub packet_loss_send: String,
    pub packet_loss_receive: String,
}
