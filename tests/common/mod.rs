// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use skilldir::config::Config;
use skilldir::models::{NewUser, UserProfile};
use skilldir::routes::create_router;
use skilldir::services::ProfileService;
use skilldir::store::{ProfileStore, SkillIndex};
use skilldir::AppState;
use std::sync::Arc;

/// Create a test app with a fresh in-memory store and index.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let profile_service = ProfileService::new(ProfileStore::new(), SkillIndex::new());

    let state = Arc::new(AppState {
        config,
        profile_service,
    });

    (create_router(state.clone()), state)
}

/// Create a signed JWT for a test user.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    skilldir::middleware::auth::create_jwt(user_id, signing_key, 3600)
        .expect("Failed to create test JWT")
}

/// Seed a profile directly through the service (no password hashing, so
/// seeding stays fast; auth tests register over HTTP instead).
#[allow(dead_code)]
pub async fn seed_user(state: &Arc<AppState>, username: &str, email: &str) -> UserProfile {
    state
        .profile_service
        .create_profile(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "seed$seed".to_string(),
        })
        .await
        .expect("Failed to seed test user")
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Response body was not valid JSON")
}
