//! Authentication handlers

use axum::{extract::State, Json};
use domain_identity::{IdentityError, User};
use infra_db::{CompanyRepository, UserRepository};
use validator::Validate;

use crate::auth::create_token;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::AppState;

/// Authenticates a user and issues a tenant-scoped token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let users = UserRepository::new(state.pool.clone());
    let found = users.find_by_username(&request.username).await?;
    let user = authenticate(found, &request.password)?;

    let companies = CompanyRepository::new(state.pool.clone());
    let company = companies
        .find_by_id(user.company_id)
        .await?
        .ok_or(IdentityError::InvalidCredentials)?;
    if !company.is_active {
        return Err(IdentityError::CompanyInactive(company.name).into());
    }

    let token = create_token(&user, &state.config.jwt_secret, state.config.jwt_expiration_secs)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        role: user.role.as_str().to_string(),
        company_id: user.company_id.as_uuid().to_string(),
    }))
}

/// Checks the candidate password against the stored hash
///
/// Unknown usernames and wrong passwords are deliberately indistinct.
fn authenticate(found: Option<User>, password: &str) -> Result<User, IdentityError> {
    let user = found.ok_or(IdentityError::InvalidCredentials)?;
    if !user.verify_password(password)? {
        return Err(IdentityError::InvalidCredentials);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CompanyId, UserId};
    use domain_identity::{hash_password, Role};

    fn user_with_password(password: &str) -> User {
        User::new(
            UserId::new(),
            "clerk",
            hash_password(password).unwrap(),
            Role::User,
            CompanyId::new(),
        )
    }

    #[test]
    fn test_authenticate_accepts_the_right_password() {
        let user = user_with_password("pass123");
        assert!(authenticate(Some(user), "pass123").is_ok());
    }

    #[test]
    fn test_unknown_user_and_wrong_password_look_the_same() {
        let missing = authenticate(None, "whatever").unwrap_err();
        let wrong = authenticate(Some(user_with_password("right")), "wrong").unwrap_err();

        assert_eq!(missing.to_string(), wrong.to_string());
    }
}
