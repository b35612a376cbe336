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

use clap::{Args, Parser, Subcommand};
use url::Url;

/// Room Call CLI
///
/// Talks to the room provisioning service that backs the call page.
#[derive(Parser, Debug)]
#[clap(name = "roomcall")]
pub struct Opt {
    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Create a room and print its URL and expiry.
    CreateRoom(CreateRoom),
}

#[derive(Args, Debug, Clone)]
pub struct CreateRoom {
    /// Base URL of the room provisioning service.
    #[clap(
        long = "api-url",
        env = "ROOMCALL_API_URL",
        default_value = "http://localhost:8081"
    )]
    pub api_url: Url,

    /// Keep running and print the remaining time once per second until the
    /// room expires.
    #[clap(long = "watch", short = 'w')]
    pub watch: bool,
}
