// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory profile store with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (create, read, partial update, remove)
//! - Credentials (stored beside profiles, never serialized)
//! - Paginated listing, newest first

use crate::error::AppError;
use crate::models::{Credentials, NewUser, ProfileUpdate, UserProfile};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent in-memory profile storage.
///
/// Profiles are keyed by user id. Email and username uniqueness is
/// enforced through guard maps so two concurrent registrations cannot
/// claim the same identity.
#[derive(Default)]
pub struct ProfileStore {
    profiles: DashMap<String, UserProfile>,
    credentials: DashMap<String, Credentials>,
    emails: DashMap<String, String>,
    usernames: DashMap<String, String>,
    next_id: AtomicU64,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile and its credentials, assigning a fresh id.
    ///
    /// Fails with `Conflict` when the email or username is already taken.
    pub fn create(&self, new_user: NewUser) -> Result<UserProfile, AppError> {
        let id = (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string();

        match self.emails.entry(new_user.email.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::Conflict("Email already registered".to_string()));
            }
            Entry::Vacant(entry) => {
                entry.insert(id.clone());
            }
        }

        match self.usernames.entry(new_user.username.clone()) {
            Entry::Occupied(_) => {
                // Roll back the email claim from above
                self.emails.remove(&new_user.email);
                return Err(AppError::Conflict("Username already taken".to_string()));
            }
            Entry::Vacant(entry) => {
                entry.insert(id.clone());
            }
        }

        let profile = UserProfile {
            id: id.clone(),
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            bio: None,
            avatar: None,
            skills: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.credentials.insert(
            id.clone(),
            Credentials {
                password_hash: new_user.password_hash,
            },
        );
        self.profiles.insert(id, profile.clone());

        Ok(profile)
    }

    /// Get a profile by id.
    pub fn get(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.get(user_id).map(|entry| entry.clone())
    }

    /// Merge a validated partial update into an existing profile.
    ///
    /// Fields absent from the update are left untouched. Returns the
    /// updated profile, or `None` when the user does not exist.
    pub fn apply_update(&self, user_id: &str, update: &ProfileUpdate) -> Option<UserProfile> {
        let mut entry = self.profiles.get_mut(user_id)?;

        if let Some(first_name) = &update.first_name {
            entry.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            entry.last_name = last_name.clone();
        }
        if let Some(bio) = &update.bio {
            entry.bio = Some(bio.clone());
        }
        if let Some(avatar) = &update.avatar {
            entry.avatar = Some(avatar.clone());
        }
        if let Some(skills) = &update.skills {
            entry.skills = skills.clone();
        }

        Some(entry.clone())
    }

    /// Remove a profile, its credentials, and its identity claims.
    pub fn remove(&self, user_id: &str) -> Option<UserProfile> {
        let (_, profile) = self.profiles.remove(user_id)?;
        self.credentials.remove(user_id);
        self.emails.remove(&profile.email);
        self.usernames.remove(&profile.username);
        Some(profile)
    }

    /// Look up a profile and its credentials by email (login path).
    pub fn get_by_email(&self, email: &str) -> Option<(UserProfile, Credentials)> {
        let user_id = self.emails.get(email)?.clone();
        let profile = self.get(&user_id)?;
        let credentials = self.credentials.get(&user_id)?.clone();
        Some((profile, credentials))
    }

    /// A page of profiles, newest first, plus the total count.
    ///
    /// `page` is 1-indexed; ties on the creation timestamp break on the
    /// numeric id so ordering is stable.
    pub fn list(&self, page: u32, limit: u32) -> (Vec<UserProfile>, usize) {
        let mut all: Vec<UserProfile> = self
            .profiles
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        let total = all.len();

        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| numeric_id(&b.id).cmp(&numeric_id(&a.id)))
        });

        let page = page.max(1);
        let skip = (page as usize - 1) * limit as usize;
        let users = all.into_iter().skip(skip).take(limit as usize).collect();

        (users, total)
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn numeric_id(id: &str) -> u64 {
    id.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = ProfileStore::new();
        let a = store.create(new_user("alice", "alice@example.com")).unwrap();
        let b = store.create(new_user("bob", "bob@example.com")).unwrap();

        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = ProfileStore::new();
        store.create(new_user("alice", "same@example.com")).unwrap();

        let err = store
            .create(new_user("bob", "same@example.com"))
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_username_rolls_back_email_claim() {
        let store = ProfileStore::new();
        store.create(new_user("alice", "alice@example.com")).unwrap();

        let err = store
            .create(new_user("alice", "other@example.com"))
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // The email from the failed attempt must be usable again
        store
            .create(new_user("carol", "other@example.com"))
            .unwrap();
    }

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let store = ProfileStore::new();
        let created = store.create(new_user("alice", "alice@example.com")).unwrap();

        let update = ProfileUpdate {
            bio: Some("Builds backends".to_string()),
            ..Default::default()
        };
        let updated = store.apply_update(&created.id, &update).unwrap();

        assert_eq!(updated.first_name, "Test");
        assert_eq!(updated.bio.as_deref(), Some("Builds backends"));
        assert_eq!(updated.email, "alice@example.com");
    }

    #[test]
    fn test_update_missing_user_returns_none() {
        let store = ProfileStore::new();
        assert!(store.apply_update("999", &ProfileUpdate::default()).is_none());
    }

    #[test]
    fn test_remove_frees_identity() {
        let store = ProfileStore::new();
        let created = store.create(new_user("alice", "alice@example.com")).unwrap();

        store.remove(&created.id).unwrap();
        assert!(store.get(&created.id).is_none());
        assert!(store.get_by_email("alice@example.com").is_none());

        // Identity can be registered again after removal
        store.create(new_user("alice", "alice@example.com")).unwrap();
    }
}
