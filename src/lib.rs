//! BudgetBoard - a desktop prototype of the BudgetAI home screen.
//!
//! A transaction list with an animated, gesture-driven sidebar drawer:
//! edge swipes, fling/distance release heuristics, and an interruptible
//! open/close animation. The drawer interaction model lives in
//! [`drawer`], free of UI types and fully unit-tested; [`input`] adapts
//! gpui mouse events into gesture samples and [`render`] maps the
//! published offset to panel translation and backdrop opacity.

pub mod app;
pub mod constants;
pub mod data;
pub mod drawer;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod theme;
pub mod types;

pub use app::BudgetBoard;
