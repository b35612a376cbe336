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

//! Room provisioning API server entry point.
//!
//! Answers `GET /api/create-room` for the call page.

use rooms_api::config::Config;
use rooms_api::routes;
use rooms_api::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(&config);
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!(
        "Rooms API listening on {} (rooms under {}, ttl {}s)",
        config.listen_addr,
        config.room_base_url,
        config.room_ttl_secs
    );

    axum::serve(listener, app).await?;
    Ok(())
}
