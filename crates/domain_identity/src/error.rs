//! Identity domain errors

use thiserror::Error;

use crate::password::PasswordError;

/// Errors that can occur in the identity domain
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Username unknown or password mismatch; deliberately indistinct
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The tenant exists but is blocked (e.g., lapsed license)
    #[error("Company is not active: {0}")]
    CompanyInactive(String),

    /// Credential hashing/verification failure
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}
