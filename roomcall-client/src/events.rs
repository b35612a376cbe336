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

//! Events emitted by the coordinator.
//!
//! A presentation layer subscribes through
//! [`CallCoordinator::subscribe`](crate::CallCoordinator::subscribe) and
//! derives everything it shows from these events.

use crate::engine::EngineEvent;
use crate::state::{ErrorMessage, NetworkDisplay, ViewState};

#[derive(Clone, Debug, PartialEq)]
pub enum CallEvent {
    // === View ===
    /// The screen mode changed. Never emitted with `from == to`.
    ViewChanged { from: ViewState, to: ViewState },

    /// A room is being provisioned (`true`) or the attempt resolved (`false`).
    LoadingChanged(bool),

    /// An error message is about to be shown.
    ErrorShown(ErrorMessage),

    /// The error message was dismissed by a retry.
    ErrorCleared,

    // === Session ===
    SessionStarted {
        room_url: String,
        expires_at: Option<i64>,
    },

    SessionEnded,

    /// Remaining room lifetime, formatted as `m:ss`.
    CountdownTick(String),

    // === In-call ===
    NetworkStatsUpdated(NetworkDisplay),

    ScreenShareChanged(bool),

    LocalVideoVisibilityChanged(bool),

    ParticipantsBarVisibilityChanged(bool),

    /// Informational engine notification (loaded, started-camera, camera-error).
    Engine(EngineEvent),
}
