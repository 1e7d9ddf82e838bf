//! User repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CompanyId, UserId};
use domain_identity::{Role, User};

use crate::error::DatabaseError;

/// Repository for user accounts
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    company_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DatabaseError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(DatabaseError::SerializationError)?;

        Ok(User {
            id: UserId::from_uuid(row.user_id),
            username: row.username,
            password_hash: row.password_hash,
            role,
            company_id: CompanyId::from_uuid(row.company_id),
            created_at: row.created_at,
        })
    }
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if the username is already taken
    pub async fn create(&self, user: &User) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, username, password_hash, role, company_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.company_id.as_uuid())
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts a user if the username is not taken yet
    pub async fn ensure(&self, user: &User) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, username, password_hash, role, company_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.company_id.as_uuid())
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Looks up a user by login name
    ///
    /// Authentication verifies the stored hash against the candidate
    /// password; this method itself does no credential checking.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, username, password_hash, role, company_id, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
