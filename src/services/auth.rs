// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password hashing for account credentials.
//!
//! PBKDF2-HMAC-SHA256 with a random per-user salt. Hashes are stored as
//! `base64(salt)$base64(hash)`; verification is constant-time via
//! `ring::pbkdf2::verify`.

use crate::error::{AppError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use ring::rand::{SecureRandom, SystemRandom};
use ring::{digest, pbkdf2};
use std::num::NonZeroU32;

const SALT_LEN: usize = 16;
const CREDENTIAL_LEN: usize = digest::SHA256_OUTPUT_LEN;
// OWASP-recommended floor for PBKDF2-HMAC-SHA256
const ITERATIONS: u32 = 600_000;

static ALGORITHM: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to generate salt")))?;

    let mut hash = [0u8; CREDENTIAL_LEN];
    pbkdf2::derive(
        ALGORITHM,
        NonZeroU32::new(ITERATIONS).unwrap(),
        &salt,
        password.as_bytes(),
        &mut hash,
    );

    Ok(format!(
        "{}${}",
        STANDARD.encode(salt),
        STANDARD.encode(hash)
    ))
}

/// Verify a password against a stored `salt$hash` string.
///
/// Malformed stored hashes verify as false rather than erroring, so a
/// corrupt record reads as bad credentials instead of a 500.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_b64, hash_b64)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(hash)) = (STANDARD.decode(salt_b64), STANDARD.decode(hash_b64)) else {
        return false;
    };

    pbkdf2::verify(
        ALGORITHM,
        NonZeroU32::new(ITERATIONS).unwrap(),
        &salt,
        password.as_bytes(),
        &hash,
    )
    .is_ok()
}
