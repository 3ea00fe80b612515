//! Error types for ledger data operations.

use thiserror::Error;

/// Errors that can occur while loading or validating ledger data.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A transaction carried a negative amount
    #[error("negative amount {amount} for \"{name}\"")]
    NegativeAmount { name: String, amount: f64 },

    /// A transaction had an empty name
    #[error("transaction with empty name")]
    EmptyName,

    /// The ledger contained no transactions
    #[error("empty ledger")]
    Empty,
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
