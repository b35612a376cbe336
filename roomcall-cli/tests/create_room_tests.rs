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

use roomcall_cli::cli_args::CreateRoom;
use roomcall_cli::modes::create_room::create_room;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn opts(server: &MockServer) -> CreateRoom {
    CreateRoom {
        api_url: Url::parse(&server.uri()).unwrap(),
        watch: false,
    }
}

#[tokio::test]
async fn test_create_room_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/create-room"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://demo.daily.co/abc123def456",
            "config": { "exp": 4_102_444_800i64 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    create_room(opts(&server)).await.unwrap();
}

#[tokio::test]
async fn test_create_room_without_expiry_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/create-room"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "url": "https://demo.daily.co/abc123def456" })),
        )
        .mount(&server)
        .await;

    create_room(opts(&server)).await.unwrap();
}

#[tokio::test]
async fn test_create_room_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/create-room"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = create_room(opts(&server)).await.unwrap_err();
    assert!(err.to_string().contains("failed to create a room"), "{err}");
}
