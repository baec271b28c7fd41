// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory routes (require authentication).

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::UserProfile;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/search", get(search_users))
        .route(
            "/api/users/profile",
            get(get_own_profile).put(update_own_profile),
        )
        .route("/api/users/profile/skills", put(update_own_skills))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

// ─── Envelopes ───────────────────────────────────────────────

/// Single-user envelope: `{ "user": {...} }`.
#[derive(Serialize)]
pub struct UserEnvelope {
    pub user: UserProfile,
}

/// Multi-user envelope: `{ "users": [...] }`.
#[derive(Serialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserProfile>,
}

#[derive(Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: usize,
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserProfile>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub message: String,
    pub user_id: String,
}

// ─── Listing & Search ────────────────────────────────────────

#[derive(Deserialize)]
struct ListQuery {
    /// Pagination: page number (1-indexed)
    #[serde(default = "default_page")]
    page: u32,
    /// Pagination: items per page
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

const MAX_LIMIT: u32 = 100;

/// List users, newest first, paginated.
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserListResponse>> {
    if query.limit == 0 || query.limit > MAX_LIMIT {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }

    let page = query.page.max(1);
    let (users, total) = state.profile_service.list_profiles(page, query.limit);
    let pages = total.div_ceil(query.limit as usize);

    Ok(Json(UserListResponse {
        users,
        pagination: Pagination {
            page,
            limit: query.limit,
            total,
            pages,
        },
    }))
}

#[derive(Deserialize)]
struct SearchQuery {
    /// Skill token, matched exactly (case-sensitive)
    skill: String,
}

/// Search users by skill.
///
/// Always 200 with a `users` array; no matches is an empty array, not an
/// error. Result order is unspecified.
async fn search_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<UsersEnvelope>> {
    let users = state.profile_service.search_by_skill(&query.skill);
    Ok(Json(UsersEnvelope { users }))
}

// ─── Own Profile ─────────────────────────────────────────────

/// Get the authenticated user's profile.
async fn get_own_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserEnvelope>> {
    let user = state.profile_service.get_profile(&auth.user_id)?;
    Ok(Json(UserEnvelope { user }))
}

/// Partially update the authenticated user's profile.
async fn update_own_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<UserEnvelope>> {
    let user = state
        .profile_service
        .update_profile(&auth.user_id, &payload)
        .await?;
    Ok(Json(UserEnvelope { user }))
}

/// Replace the authenticated user's skill list.
async fn update_own_skills(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<UserEnvelope>> {
    let user = state
        .profile_service
        .update_skills(&auth.user_id, &payload)
        .await?;
    Ok(Json(UserEnvelope { user }))
}

// ─── Users by Id ─────────────────────────────────────────────

/// Get a user by id.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserEnvelope>> {
    let user = state.profile_service.get_profile(&id)?;
    Ok(Json(UserEnvelope { user }))
}

/// Update a user by id. Users may only update their own profile.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<UserEnvelope>> {
    if auth.user_id != id {
        return Err(AppError::Forbidden(
            "Not authorized to update this profile".to_string(),
        ));
    }

    let user = state.profile_service.update_profile(&id, &payload).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Delete a user account. Users may only delete their own account.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>> {
    if auth.user_id != id {
        return Err(AppError::Forbidden(
            "Not authorized to delete this profile".to_string(),
        ));
    }

    let user = state.profile_service.remove_profile(&id).await?;

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".to_string(),
        user_id: user.id,
    }))
}
