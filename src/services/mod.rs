// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod profile;
pub mod validation;

pub use profile::ProfileService;
pub use validation::ValidationError;
