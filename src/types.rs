//! Shared domain types - transactions, categories, theme mode, drawer menu.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spending category for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Health,
    Bills,
    Other,
}

impl Category {
    /// Display label for list rows and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// All categories, in display order.
    pub fn all() -> [Category; 6] {
        [
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Health,
            Category::Bills,
            Category::Other,
        ]
    }
}

/// A single expense entry in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    /// Expense amount in dollars, always non-negative.
    pub amount: f64,
}

impl Transaction {
    pub fn new(name: impl Into<String>, category: Category, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            amount,
        }
    }

    /// Amount formatted for display, e.g. "$45.50".
    pub fn display_amount(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

/// Light/dark theme selection, persisted in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Entries shown inside the sidebar drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Overview,
    Transactions,
    Budgets,
    Settings,
    SignOut,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Overview => "Overview",
            MenuEntry::Transactions => "Transactions",
            MenuEntry::Budgets => "Budgets",
            MenuEntry::Settings => "Settings",
            MenuEntry::SignOut => "Sign Out",
        }
    }

    /// Drawer entries in display order.
    pub fn all() -> [MenuEntry; 5] {
        [
            MenuEntry::Overview,
            MenuEntry::Transactions,
            MenuEntry::Budgets,
            MenuEntry::Settings,
            MenuEntry::SignOut,
        ]
    }
}
