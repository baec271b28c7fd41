// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation of partial profile-update payloads.
//!
//! Profile updates arrive as free-form JSON so clients can send any
//! subset of the editable fields. Each field present is checked against
//! its rule; one bad field rejects the whole payload. Unknown fields are
//! ignored, which keeps old servers compatible with newer clients.

use crate::models::ProfileUpdate;
use serde_json::Value;

/// Rejection reason for a profile-update payload.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{0} must be a string")]
    NotAString(&'static str),

    #[error("skills must be a list of strings")]
    SkillsNotAList,

    #[error("skills is required")]
    SkillsMissing,
}

/// Validate and normalize a partial profile update.
///
/// Returns the accepted field set, or the first rule violation. Never
/// touches any state.
pub fn validate_profile_update(payload: &Value) -> Result<ProfileUpdate, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let mut update = ProfileUpdate::default();

    if let Some(value) = object.get("firstName") {
        update.first_name = Some(required_text(value, "firstName")?);
    }
    if let Some(value) = object.get("lastName") {
        update.last_name = Some(required_text(value, "lastName")?);
    }
    if let Some(value) = object.get("bio") {
        update.bio = Some(text(value, "bio")?);
    }
    if let Some(value) = object.get("avatar") {
        update.avatar = Some(text(value, "avatar")?);
    }
    if let Some(value) = object.get("skills") {
        update.skills = Some(skill_list(value)?);
    }

    Ok(update)
}

/// Validate a skills-only update.
///
/// Same rules as [`validate_profile_update`], but `skills` must be
/// present and every other field is ignored.
pub fn validate_skills_update(payload: &Value) -> Result<ProfileUpdate, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let skills = object.get("skills").ok_or(ValidationError::SkillsMissing)?;

    Ok(ProfileUpdate {
        skills: Some(skill_list(skills)?),
        ..Default::default()
    })
}

/// A string value that must be non-empty after trimming.
fn required_text(value: &Value, field: &'static str) -> Result<String, ValidationError> {
    let text = value
        .as_str()
        .ok_or(ValidationError::NotAString(field))?
        .trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(text.to_string())
}

/// A string value; empty is allowed.
fn text(value: &Value, field: &'static str) -> Result<String, ValidationError> {
    Ok(value
        .as_str()
        .ok_or(ValidationError::NotAString(field))?
        .to_string())
}

/// A sequence of string tokens.
///
/// Tokens are trimmed; empties are dropped and duplicates collapse to
/// their first occurrence, so the stored list always holds unique tokens.
fn skill_list(value: &Value) -> Result<Vec<String>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::SkillsNotAList)?;

    let mut skills = Vec::with_capacity(items.len());
    for item in items {
        let token = item
            .as_str()
            .ok_or(ValidationError::SkillsNotAList)?
            .trim()
            .to_string();
        if !token.is_empty() && !skills.contains(&token) {
            skills.push(token);
        }
    }

    Ok(skills)
}
