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

//! Room provisioning endpoint: `/api/create-room`.

use log::debug;
use roomcall_types::CreateRoomResponse;

use crate::error::ApiError;
use crate::{parse_json_response, RoomsApiClient};

impl RoomsApiClient {
    /// Ask the provisioning service for a fresh room.
    ///
    /// Calls `GET /api/create-room`. Any non-2xx status, transport failure or
    /// body that is not `{ url, config }` is an error. An empty `url` is
    /// passed through untouched; rejecting it is the call engine's job.
    pub async fn create_room(&self) -> Result<CreateRoomResponse, ApiError> {
        let response = self.get("/api/create-room")?.send().await?;
        let room: CreateRoomResponse = parse_json_response(response).await?;
        debug!("Provisioned room {} (exp: {:?})", room.url, room.config.exp);
        Ok(room)
    }
}
