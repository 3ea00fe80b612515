//! Application module - the main BudgetBoard state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The BudgetBoard struct definition and sub-structs
//! - `lifecycle` - Initialization and per-frame upkeep
//! - `menu` - Drawer commands and menu entry actions

mod lifecycle;
mod menu;
mod state;

pub use state::{BudgetBoard, DrawerUi, LedgerState, SettingsState, SystemState};
