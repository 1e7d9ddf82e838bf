//! Repository implementations
//!
//! One repository per aggregate. The sales and product repositories own the
//! compound transactions that pair a stock movement with its ledger entry.

pub mod company;
pub mod user;
pub mod product;
pub mod sales;
pub mod expense;
pub mod reporting;
