//! Rendering - pure renderers reacting to published state.
//!
//! Renderers read the drawer controller's `offset`/`overlay_visible` and
//! the app state; they never mutate interaction state directly.
//!
//! ## Modules
//!
//! - `screen` - Home screen: nav bar + list + overlay composition
//! - `list` - Transaction list with greeting header and footer
//! - `drawer` - Drawer panel and backdrop overlay

mod drawer;
mod list;
mod screen;

pub use drawer::render_drawer_overlay;
pub use list::render_transaction_list;
