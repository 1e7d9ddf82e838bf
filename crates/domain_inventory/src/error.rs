//! Inventory domain errors

use thiserror::Error;

/// Errors that can occur in the inventory domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// Requested more units than are on hand
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Zero-unit movements are rejected
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}
