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

pub const NETWORK_POLL_INTERVAL_MS: u64 = 2000;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
pub const EVENT_BUS_CAPACITY: usize = 256;

pub const START_LABEL: &str = "Start";
pub const LOADING_LABEL: &str = "Loading...";
pub const COUNTDOWN_PREFIX: &str = "Demo expires in ";

pub const PROVISIONING_ERROR_TITLE: &str = "Error creating room";
pub const PROVISIONING_ERROR_DESCRIPTION: &str =
    "Failed to connect to the backend. Please check if the server is running.";
pub const JOIN_ERROR_TITLE: &str = "Incorrect room URL";
pub const JOIN_ERROR_DESCRIPTION: &str =
    "Meeting link entered is invalid. Please update the room URL.";
