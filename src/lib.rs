// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Skilldir: user profile and skill directory API
//!
//! This crate provides the backend API for the team directory: per-user
//! profiles, partial profile updates, and skill-based user search.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use services::ProfileService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub profile_service: ProfileService,
}
