// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skill index: derived mapping from skill token to the set of users
//! holding it.
//!
//! Lookups are exact and case-sensitive. Entries whose user set drains
//! empty are pruned eagerly; search correctness does not depend on it.

use dashmap::DashMap;
use std::collections::HashSet;

/// Concurrent skill -> user-id-set mapping.
///
/// Writers for different skill tokens touch different shards, so updates
/// to one user's entries never block reads of another's.
#[derive(Default)]
pub struct SkillIndex {
    entries: DashMap<String, HashSet<String>>,
}

impl SkillIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user under each of the given skill tokens.
    pub fn add_user<'a>(&self, user_id: &str, skills: impl IntoIterator<Item = &'a String>) {
        for skill in skills {
            self.entries
                .entry(skill.clone())
                .or_default()
                .insert(user_id.to_string());
        }
    }

    /// Remove a user from each of the given skill tokens, pruning entries
    /// that drain empty.
    pub fn remove_user<'a>(&self, user_id: &str, skills: impl IntoIterator<Item = &'a String>) {
        for skill in skills {
            if let Some(mut entry) = self.entries.get_mut(skill.as_str()) {
                entry.remove(user_id);
            }
            // Emptiness is re-checked under the shard lock, so a concurrent
            // add_user for the same token is never dropped.
            self.entries.remove_if(skill.as_str(), |_, users| users.is_empty());
        }
    }

    /// Users holding the given skill. Empty set when no entry exists.
    pub fn users_with_skill(&self, skill: &str) -> HashSet<String> {
        self.entries
            .get(skill)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Number of distinct skill tokens currently indexed.
    pub fn skill_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_and_lookup() {
        let index = SkillIndex::new();
        index.add_user("1", &skills(&["Rust", "Go"]));
        index.add_user("2", &skills(&["Rust"]));

        let users = index.users_with_skill("Rust");
        assert!(users.contains("1"));
        assert!(users.contains("2"));
        assert_eq!(index.users_with_skill("Go").len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let index = SkillIndex::new();
        index.add_user("1", &skills(&["JavaScript"]));

        assert!(index.users_with_skill("javascript").is_empty());
        assert_eq!(index.users_with_skill("JavaScript").len(), 1);
    }

    #[test]
    fn test_missing_skill_returns_empty_set() {
        let index = SkillIndex::new();
        assert!(index.users_with_skill("nonexistent_skill").is_empty());
    }

    #[test]
    fn test_remove_prunes_empty_entries() {
        let index = SkillIndex::new();
        index.add_user("1", &skills(&["Rust"]));
        assert_eq!(index.skill_count(), 1);

        index.remove_user("1", &skills(&["Rust"]));
        assert!(index.users_with_skill("Rust").is_empty());
        assert_eq!(index.skill_count(), 0);
    }

    #[test]
    fn test_remove_keeps_other_users() {
        let index = SkillIndex::new();
        index.add_user("1", &skills(&["Rust"]));
        index.add_user("2", &skills(&["Rust"]));

        index.remove_user("1", &skills(&["Rust"]));
        let users = index.users_with_skill("Rust");
        assert!(!users.contains("1"));
        assert!(users.contains("2"));
    }
}
