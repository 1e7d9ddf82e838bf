//! User entity and roles

use chrono::{DateTime, Utc};
use core_kernel::{CompanyId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::password::{verify_password, PasswordError};

/// Access level of a user within (or above) a tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Cross-tenant operator of the platform itself
    Superadmin,
    /// Tenant administrator
    Admin,
    /// Regular cashier/clerk
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::Superadmin),
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// A user account bound to a tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Login name (unique across the platform)
    pub username: String,
    /// Argon2 PHC-format password hash
    pub password_hash: String,
    /// Access level
    pub role: Role,
    /// Owning tenant
    pub company_id: CompanyId,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user from an already-hashed password
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            company_id,
            created_at: Utc::now(),
        }
    }

    /// Checks a candidate password against the stored hash
    pub fn verify_password(&self, candidate: &str) -> Result<bool, PasswordError> {
        verify_password(candidate, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Superadmin, Role::Admin, Role::User] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_verify_password_against_stored_hash() {
        let hash = hash_password("admin123").unwrap();
        let user = User::new(UserId::new(), "admin", hash, Role::Admin, CompanyId::new());

        assert!(user.verify_password("admin123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }
}
