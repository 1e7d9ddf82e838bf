//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the retail ledger,
//! implemented with SQLx over the repository pattern.
//!
//! # Architecture
//!
//! Repositories hide SQL from the domain layer and own the transactional
//! invariant of the ledger: a stock movement and its corresponding ledger
//! entry (sale or cost-of-goods expense) commit together or not at all.
//!
//! # Tenancy
//!
//! Every statement filters by the verified tenant taken from a
//! [`domain_identity::TenantContext`]; repositories never accept a raw
//! caller-supplied company id.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, SalesRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/retail")).await?;
//! let sales = SalesRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod bootstrap;
pub mod demo;

pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use repositories::company::CompanyRepository;
pub use repositories::user::UserRepository;
pub use repositories::product::{ProductRepository, RestockOutcome, RestockReceipt};
pub use repositories::sales::{DeclineReason, SaleOutcome, SaleReceipt, SalesRepository};
pub use repositories::expense::ExpenseRepository;
pub use repositories::reporting::{RangeReport, ReportingRepository};
pub use demo::{DemoDataSeeder, DemoPlan};
