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

//! Room provisioning handler.

use axum::{extract::State, Json};
use rand::Rng;
use roomcall_types::{CreateRoomResponse, RoomConfig};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

const ROOM_NAME_LEN: usize = 12;

fn generate_room_name() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..ROOM_NAME_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Mint a room URL under `base`. `base` must end with `/`.
pub fn mint_room(base: &Url, ttl_secs: i64, now_secs: i64) -> Result<CreateRoomResponse, AppError> {
    let name = generate_room_name();
    let url = base.join(&name)?;
    let exp = now_secs
        .checked_add(ttl_secs)
        .ok_or_else(|| AppError::room_creation_failed("room expiry overflows"))?;
    Ok(CreateRoomResponse {
        url: url.to_string(),
        config: RoomConfig { exp: Some(exp) },
    })
}

/// GET /api/create-room
pub async fn create_room(
    State(state): State<AppState>,
) -> Result<Json<CreateRoomResponse>, AppError> {
    let now = chrono::Utc::now().timestamp();
    let room = mint_room(&state.room_base_url, state.room_ttl_secs, now)?;
    tracing::info!("Created room {} (exp {:?})", room.url, room.config.exp);
    Ok(Json(room))
}
