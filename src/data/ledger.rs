//! Sample ledger loading and spending summaries.
//!
//! The prototype has no backend; transactions come from an embedded JSON
//! document, validated on load. Real data sourcing is out of scope.

use super::error::{LedgerError, LedgerResult};
use crate::types::{Category, Transaction};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Mock transaction data for the home screen.
const SAMPLE_LEDGER_JSON: &str = r#"[
    { "name": "Grocery Store",  "category": "Food",          "amount": 45.50 },
    { "name": "Uber Ride",      "category": "Transport",     "amount": 12.25 },
    { "name": "Netflix",        "category": "Entertainment", "amount": 15.00 },
    { "name": "Coffee Shop",    "category": "Food",          "amount": 5.75 },
    { "name": "Gym Membership", "category": "Health",        "amount": 30.00 },
    { "name": "Electric Bill",  "category": "Bills",         "amount": 120.00 }
]"#;

/// Wire form of a transaction: ids are assigned at load time.
#[derive(Deserialize)]
struct RawTransaction {
    name: String,
    category: Category,
    amount: f64,
}

/// Parse and validate a ledger document.
pub fn parse_ledger(json: &str) -> LedgerResult<Vec<Transaction>> {
    let raw: Vec<RawTransaction> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(LedgerError::Empty);
    }
    raw.into_iter()
        .map(|t| {
            if t.name.trim().is_empty() {
                return Err(LedgerError::EmptyName);
            }
            if t.amount < 0.0 {
                return Err(LedgerError::NegativeAmount {
                    name: t.name,
                    amount: t.amount,
                });
            }
            Ok(Transaction::new(t.name, t.category, t.amount))
        })
        .collect()
}

/// The embedded sample ledger, parsed once.
pub static SAMPLE_LEDGER: Lazy<Vec<Transaction>> = Lazy::new(|| {
    parse_ledger(SAMPLE_LEDGER_JSON).unwrap_or_else(|e| {
        tracing::error!(error = %e, "embedded sample ledger failed to parse");
        Vec::new()
    })
});

/// Total spending across all transactions.
pub fn total_spending(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Spending grouped by category, in category display order; categories
/// with no transactions are omitted.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<(Category, f64)> {
    Category::all()
        .into_iter()
        .filter_map(|category| {
            let total: f64 = transactions
                .iter()
                .filter(|t| t.category == category)
                .map(|t| t.amount)
                .sum();
            (total > 0.0).then_some((category, total))
        })
        .collect()
}
