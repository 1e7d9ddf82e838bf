//! Ledger Domain
//!
//! The append-only financial record of a tenant: sales on one side, expenses
//! on the other. Entries are immutable facts once written; reporting reduces
//! them to range views, daily series, and period summaries.

pub mod sale;
pub mod expense;
pub mod report;
pub mod error;

pub use sale::{Sale, SaleKind};
pub use expense::{Expense, COST_OF_GOODS_CATEGORY};
pub use report::{DailySalesPoint, ExpenseLine, FinancialSummary, SaleLine};
pub use error::LedgerError;
