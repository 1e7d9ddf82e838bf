//! Authentication and tenancy
//!
//! Login issues a JWT whose claims carry the user id, role, AND owning
//! company. Every ledger operation derives its tenant from those validated
//! claims, never from a caller-supplied company parameter, so one tenant's
//! token cannot read another tenant's ledger.

use chrono::{Duration, Utc};
use core_kernel::{CompanyId, UserId};
use domain_identity::{Role, TenantContext, User};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Owning tenant (company ID)
    pub company: String,
    /// User's role
    pub role: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Malformed claims: {0}")]
    MalformedClaims(String),
}

/// Creates a new JWT token for an authenticated user
pub fn create_token(
    user: &User,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user.id.as_uuid().to_string(),
        company: user.company_id.as_uuid().to_string(),
        role: user.role.as_str().to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

/// Builds the verified tenant context out of validated claims
pub fn tenant_context(claims: &Claims) -> Result<TenantContext, AuthError> {
    let user_id: UserId = claims
        .sub
        .parse()
        .map_err(|_| AuthError::MalformedClaims("bad user id".to_string()))?;
    let company_id: CompanyId = claims
        .company
        .parse()
        .map_err(|_| AuthError::MalformedClaims("bad company id".to_string()))?;
    let role: Role = claims
        .role
        .parse()
        .map_err(AuthError::MalformedClaims)?;

    Ok(TenantContext::new(company_id, user_id, role))
}
