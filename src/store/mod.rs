// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: in-memory profile store and the derived skill index.

pub mod index;
pub mod profiles;

pub use index::SkillIndex;
pub use profiles::ProfileStore;
