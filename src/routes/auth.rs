// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and login routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::{NewUser, UserProfile};
use crate::services::auth::hash_password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Registration payload. All fields required.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
}

/// Login payload.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session envelope returned by both register and login.
#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Register a new account and issue a session token.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    // Deserialize by hand so an incomplete body maps to a 400, not axum's
    // default rejection
    let request: RegisterRequest = serde_json::from_value(payload)
        .map_err(|_| AppError::InvalidInput("Missing required fields".to_string()))?;
    request
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let password_hash = hash_password(&request.password)?;
    let user = state
        .profile_service
        .create_profile(NewUser {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password_hash,
        })
        .await?;

    let token = create_jwt(
        &user.id,
        &state.config.jwt_signing_key,
        state.config.token_ttl_secs,
    )?;

    Ok((StatusCode::CREATED, Json(SessionResponse { token, user })))
}

/// Log in with email and password.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SessionResponse>> {
    let request: LoginRequest = serde_json::from_value(payload)
        .map_err(|_| AppError::InvalidInput("Missing email or password".to_string()))?;
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing email or password".to_string(),
        ));
    }

    let user = state
        .profile_service
        .authenticate(&request.email, &request.password)?;

    let token = create_jwt(
        &user.id,
        &state.config.jwt_signing_key,
        state.config.token_ttl_secs,
    )?;

    Ok(Json(SessionResponse { token, user }))
}
