// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile service: validation, store updates, and skill reindexing.
//!
//! The service owns the store/index pair and is the only writer. Updates
//! for one user are serialized through a per-user async mutex so the
//! store write and the index write can never interleave with another
//! update to the same user. Updates for different users run in parallel.

use crate::error::{AppError, Result};
use crate::models::{NewUser, ProfileUpdate, UserProfile};
use crate::services::validation;
use crate::store::{ProfileStore, SkillIndex};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Orchestrates profile reads, partial updates, and skill search.
pub struct ProfileService {
    store: ProfileStore,
    index: SkillIndex,
    /// Per-user write locks; an entry is created on first use and shared
    /// by every waiter for that user.
    update_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ProfileService {
    /// Create a service owning the given store and index.
    pub fn new(store: ProfileStore, index: SkillIndex) -> Self {
        Self {
            store,
            index,
            update_locks: DashMap::new(),
        }
    }

    /// Register a new profile and index any initial skills.
    pub async fn create_profile(&self, new_user: NewUser) -> Result<UserProfile> {
        let profile = self.store.create(new_user)?;

        if !profile.skills.is_empty() {
            self.index.add_user(&profile.id, &profile.skills);
        }

        tracing::info!(user_id = %profile.id, "Profile created");
        Ok(profile)
    }

    /// Apply a partial profile update from a raw JSON payload.
    ///
    /// Validation failures reject the whole payload before any store or
    /// index mutation.
    pub async fn update_profile(&self, user_id: &str, payload: &Value) -> Result<UserProfile> {
        let update = validation::validate_profile_update(payload)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        self.apply(user_id, update).await
    }

    /// Replace a user's skill list. Same contract as [`Self::update_profile`],
    /// restricted to the `skills` field.
    pub async fn update_skills(&self, user_id: &str, payload: &Value) -> Result<UserProfile> {
        let update = validation::validate_skills_update(payload)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        self.apply(user_id, update).await
    }

    /// Get a profile by id.
    pub fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.store
            .get(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// All profiles holding the given skill token (exact, case-sensitive).
    ///
    /// Index entries whose profile no longer resolves are stale leftovers
    /// and are skipped, never surfaced as errors. Order is unspecified.
    pub fn search_by_skill(&self, skill: &str) -> Vec<UserProfile> {
        self.index
            .users_with_skill(skill)
            .iter()
            .filter_map(|user_id| self.store.get(user_id))
            .collect()
    }

    /// A page of profiles, newest first, plus the total count.
    pub fn list_profiles(&self, page: u32, limit: u32) -> (Vec<UserProfile>, usize) {
        self.store.list(page, limit)
    }

    /// Authenticate by email and password.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile> {
        let Some((profile, credentials)) = self.store.get_by_email(email) else {
            return Err(AppError::Unauthorized);
        };
        if !crate::services::auth::verify_password(password, &credentials.password_hash) {
            return Err(AppError::Unauthorized);
        }
        Ok(profile)
    }

    /// Remove a profile and purge its id from every index entry.
    pub async fn remove_profile(&self, user_id: &str) -> Result<UserProfile> {
        let lock = self.lock_for(user_id);
        let _guard = lock.lock().await;

        let profile = self
            .store
            .remove(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        // Store first, index second: a search racing this delete sees at
        // worst a stale index entry, which it already skips.
        self.index.remove_user(user_id, &profile.skills);

        tracing::info!(user_id = %user_id, "Profile removed");
        Ok(profile)
    }

    /// Validated-update commit path, shared by profile and skills updates.
    async fn apply(&self, user_id: &str, update: ProfileUpdate) -> Result<UserProfile> {
        let lock = self.lock_for(user_id);
        let _guard = lock.lock().await;

        let current = self
            .store
            .get(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let (added, removed) = match &update.skills {
            Some(new_skills) => skill_diff(&current.skills, new_skills),
            None => (Vec::new(), Vec::new()),
        };

        // Index additions land before the store write and removals after
        // it, so a concurrent reader can never see stored skills the index
        // does not report. The reverse (an index entry the store does not
        // confirm yet) reads as stale and is skipped by search.
        self.index.add_user(user_id, &added);

        let updated = self
            .store
            .apply_update(user_id, &update)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        self.index.remove_user(user_id, &removed);

        tracing::debug!(
            user_id = %user_id,
            skills_added = added.len(),
            skills_removed = removed.len(),
            "Profile updated"
        );
        Ok(updated)
    }

    fn lock_for(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.update_locks
            .entry(user_id.to_string())
            .or_default()
            .clone()
    }

    /// Direct access to the skill index (benchmarks and invariant checks).
    pub fn index(&self) -> &SkillIndex {
        &self.index
    }
}

/// Tokens present only in `new` (added) and only in `old` (removed).
fn skill_diff(old: &[String], new: &[String]) -> (Vec<String>, Vec<String>) {
    let added = new
        .iter()
        .filter(|skill| !old.contains(skill))
        .cloned()
        .collect();
    let removed = old
        .iter()
        .filter(|skill| !new.contains(skill))
        .cloned()
        .collect();
    (added, removed)
}
