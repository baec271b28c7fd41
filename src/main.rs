// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skilldir API Server
//!
//! Serves the team directory: user profiles, partial profile updates,
//! and skill-based user search.

use skilldir::{
    config::Config,
    services::ProfileService,
    store::{ProfileStore, SkillIndex},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Skilldir API");

    // The service owns the store/index pair; nothing else writes to them
    let store = ProfileStore::new();
    let index = SkillIndex::new();
    let profile_service = ProfileService::new(store, index);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        profile_service,
    });

    // Build router
    let app = skilldir::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skilldir=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
