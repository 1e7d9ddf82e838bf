//! Core Kernel - Foundational types and utilities for the retail ledger
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Temporal types for reporting ranges and calendar-day bucketing
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{ReportRange, Timezone, TemporalError};
pub use identifiers::{CompanyId, UserId, ProductId, SaleId, ExpenseId};
pub use error::CoreError;
