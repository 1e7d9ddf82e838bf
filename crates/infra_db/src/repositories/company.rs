//! Company repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::CompanyId;
use domain_identity::Company;

use crate::error::DatabaseError;

/// Repository for tenant company accounts
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct CompanyRow {
    company_id: Uuid,
    name: String,
    license_key: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: CompanyId::from_uuid(row.company_id),
            name: row.name,
            license_key: row.license_key,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl CompanyRepository {
    /// Creates a new CompanyRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new tenant
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if the id or name is already taken
    pub async fn create(&self, company: &Company) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO companies (company_id, name, license_key, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(company.id.as_uuid())
        .bind(&company.name)
        .bind(&company.license_key)
        .bind(company.is_active)
        .bind(company.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts a tenant if it does not exist yet
    ///
    /// Used by bootstrap and the demo seeder, which must be re-runnable.
    pub async fn ensure(&self, company: &Company) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO companies (company_id, name, license_key, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (company_id) DO NOTHING
            "#,
        )
        .bind(company.id.as_uuid())
        .bind(&company.name)
        .bind(&company.license_key)
        .bind(company.is_active)
        .bind(company.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves a tenant by id
    pub async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DatabaseError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT company_id, name, license_key, is_active, created_at
            FROM companies
            WHERE company_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Company::from))
    }
}
