//! First-boot data
//!
//! Ensures the master tenant and its superadmin account exist. Safe to run
//! on every startup; existing rows are left untouched.

use sqlx::PgPool;

use core_kernel::UserId;
use domain_identity::{hash_password, Company, Role, User};

use crate::error::DatabaseError;
use crate::repositories::company::CompanyRepository;
use crate::repositories::user::UserRepository;

/// Username of the bootstrap superadmin
pub const ADMIN_USERNAME: &str = "admin";

/// Creates the master company and superadmin user if absent
pub async fn create_initial_data(pool: &PgPool, admin_password: &str) -> Result<(), DatabaseError> {
    let companies = CompanyRepository::new(pool.clone());
    let users = UserRepository::new(pool.clone());

    let master = Company::new(Company::master_id(), "Retail Core Master", "RC-ROOT");
    companies.ensure(&master).await?;

    let password_hash = hash_password(admin_password)
        .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
    let admin = User::new(
        UserId::well_known(1),
        ADMIN_USERNAME,
        password_hash,
        Role::Superadmin,
        Company::master_id(),
    );
    users.ensure(&admin).await?;

    tracing::info!("Bootstrap data ensured (master tenant + superadmin)");
    Ok(())
}
