// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User profile model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile record.
///
/// Field names serialize in camelCase to match the wire format the
/// frontend consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier, assigned at registration (also the store key)
    pub id: String,
    /// Login handle, unique
    pub username: String,
    /// Email address, unique, owned by the auth layer
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Free-text bio
    pub bio: Option<String>,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Skill tokens, unique within the list, order preserved
    pub skills: Vec<String>,
    /// When the account was created (RFC 3339)
    pub created_at: String,
}

/// A validated, normalized partial update to a profile.
///
/// `None` means the field was absent from the payload and must be left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub skills: Option<Vec<String>>,
}

/// Login credentials, stored beside the profile.
///
/// Kept out of [`UserProfile`] so a password hash can never leak into an
/// API response.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// PBKDF2 password hash, `salt$hash` base64 encoded
    pub password_hash: String,
}

/// Input for creating a profile at registration time.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}
