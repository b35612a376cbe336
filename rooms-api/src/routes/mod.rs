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

//! Axum router configuration for the rooms API.

pub mod rooms;

use axum::{http::Uri, routing::get, Router};

use crate::error::AppError;
use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/create-room", get(rooms::create_room))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
