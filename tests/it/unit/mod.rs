//! Unit tests for BudgetBoard.

mod animation_tests;
mod gesture_tests;
mod settings_tests;
mod snapshot_tests;
