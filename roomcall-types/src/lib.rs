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

//! Shared wire types for roomcall.
//!
//! This crate defines the contract between the room provisioning service,
//! its REST client and the call coordinator. It is intentionally
//! framework-agnostic: no axum, no reqwest, no runtime.

pub mod error;
pub mod rooms;
pub mod stats;

pub use error::APIError;
pub use rooms::{CreateRoomResponse, RoomConfig};
pub use stats::{NetworkStats, NetworkStatsReport};
