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

//! Integration tests for `GET /api/create-room`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use rooms_api::routes;
use rooms_api::state::AppState;
use roomcall_types::{APIError, CreateRoomResponse};
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use url::Url;

const BASE: &str = "https://demo.daily.co/";
const TTL: i64 = 3600;

fn build_app() -> Router {
    let state = AppState {
        room_base_url: Url::parse(BASE).unwrap(),
        room_ttl_secs: TTL,
    };
    routes::router().with_state(state)
}

async fn response_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("deserialize response body")
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_room_returns_url_and_expiry() {
    let before = chrono::Utc::now().timestamp();
    let resp = build_app().oneshot(get("/api/create-room")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let room: CreateRoomResponse = response_json(resp).await;
    let after = chrono::Utc::now().timestamp();

    assert!(room.url.starts_with(BASE));
    let name = &room.url[BASE.len()..];
    assert_eq!(name.len(), 12);

    let exp = room.config.exp.expect("exp is set");
    assert!(exp >= before + TTL && exp <= after + TTL);
}

#[tokio::test]
async fn test_create_room_mints_distinct_rooms() {
    let first: CreateRoomResponse =
        response_json(build_app().oneshot(get("/api/create-room")).await.unwrap()).await;
    let second: CreateRoomResponse =
        response_json(build_app().oneshot(get("/api/create-room")).await.unwrap()).await;
    assert_ne!(first.url, second.url);
}

#[tokio::test]
async fn test_create_room_body_shape() {
    let resp = build_app().oneshot(get("/api/create-room")).await.unwrap();
    let body: serde_json::Value = response_json(resp).await;
    assert!(body["url"].is_string());
    assert!(body["config"]["exp"].is_i64());
}

#[tokio::test]
async fn test_unknown_route_returns_not_found_error() {
    let resp = build_app().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: APIError = response_json(resp).await;
    assert_eq!(err.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_create_room_rejects_post() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/create-room")
        .body(Body::empty())
        .unwrap();
    let resp = build_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
