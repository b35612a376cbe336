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

//! Integration tests for `GET /api/create-room` against a mock server.

use roomcall_rooms_client::{ApiError, RoomsApiClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/create-room"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_create_room_success() {
    let server = server_answering(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "url": "https://x.daily.co/room1",
        "config": { "exp": 1767225600 }
    })))
    .await;

    let client = RoomsApiClient::new(&server.uri());
    let room = client.create_room().await.expect("room");
    assert_eq!(room.url, "https://x.daily.co/room1");
    assert_eq!(room.expires_at(), Some(1_767_225_600));
}

#[tokio::test]
async fn test_create_room_server_error_carries_status_and_body() {
    let server = server_answering(ResponseTemplate::new(500).set_body_string("boom")).await;

    let client = RoomsApiClient::new(&server.uri());
    match client.create_room().await {
        Err(ApiError::ServerError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_room_malformed_body() {
    let server = server_answering(ResponseTemplate::new(200).set_body_string("<html></html>")).await;

    let client = RoomsApiClient::new(&server.uri());
    assert!(matches!(
        client.create_room().await,
        Err(ApiError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_create_room_unreachable_server() {
    // Nothing listens on port 9 on a test box.
    let client = RoomsApiClient::new("http://127.0.0.1:9");
    assert!(matches!(client.create_room().await, Err(ApiError::Network(_))));
}
