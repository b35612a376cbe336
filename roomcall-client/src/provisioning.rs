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

//! The seam to the room provisioning service.

use async_trait::async_trait;
use roomcall_rooms_client::{ApiError, RoomsApiClient};
use roomcall_types::CreateRoomResponse;

/// Anything that can hand out a joinable room.
#[async_trait]
pub trait RoomProvisioner: Send + Sync {
    async fn create_room(&self) -> Result<CreateRoomResponse, ApiError>;
}

#[async_trait]
impl RoomProvisioner for RoomsApiClient {
    async fn create_room(&self) -> Result<CreateRoomResponse, ApiError> {
        RoomsApiClient::create_room(self).await
    }
}
