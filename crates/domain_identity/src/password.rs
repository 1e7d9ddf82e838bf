//! Password hashing with Argon2
//!
//! Hashes are salted PHC strings. The salt lives inside the hash, so two
//! hashes of the same password never compare equal.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Errors from hashing or verifying credentials
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

/// Hashes a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Checks a candidate password against a stored PHC hash
pub fn verify_password(candidate: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::HashError(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}
