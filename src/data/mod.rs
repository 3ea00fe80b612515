//! Ledger data - embedded sample transactions and summaries.

mod error;
mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{parse_ledger, spending_by_category, total_spending, SAMPLE_LEDGER};
