// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User listing pagination tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn get_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_users_default_page() {
    let (app, state) = common::create_test_app();
    for i in 0..3 {
        common::seed_user(&state, &format!("user{}", i), &format!("u{}@example.com", i)).await;
    }
    let token = common::create_test_jwt("1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(get_request("/api/users", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;

    assert_eq!(json["users"].as_array().unwrap().len(), 3);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 10);
    assert_eq!(json["pagination"]["total"], 3);
    assert_eq!(json["pagination"]["pages"], 1);
}

#[tokio::test]
async fn test_list_users_pages_split() {
    let (app, state) = common::create_test_app();
    for i in 0..5 {
        common::seed_user(&state, &format!("user{}", i), &format!("u{}@example.com", i)).await;
    }
    let token = common::create_test_jwt("1", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(get_request("/api/users?page=1&limit=2", &token))
        .await
        .unwrap();
    let first = common::body_json(response).await;
    assert_eq!(first["users"].as_array().unwrap().len(), 2);
    assert_eq!(first["pagination"]["total"], 5);
    assert_eq!(first["pagination"]["pages"], 3);

    let response = app
        .oneshot(get_request("/api/users?page=3&limit=2", &token))
        .await
        .unwrap();
    let last = common::body_json(response).await;
    assert_eq!(last["users"].as_array().unwrap().len(), 1);

    // Pages must not overlap
    let first_ids: Vec<&str> = first["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    let last_ids: Vec<&str> = last["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert!(first_ids.iter().all(|id| !last_ids.contains(id)));
}

#[tokio::test]
async fn test_list_users_page_past_end_is_empty() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "ada", "ada@example.com").await;
    let token = common::create_test_jwt("1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(get_request("/api/users?page=99&limit=10", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["users"], serde_json::json!([]));
    assert_eq!(json["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_list_users_oversized_limit_rejected() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "ada", "ada@example.com").await;
    let token = common::create_test_jwt("1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(get_request("/api/users?limit=1000", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
