//! The sidebar drawer interaction model.
//!
//! This module implements the gesture-driven drawer: edge-swipe
//! detection, velocity/distance release heuristics, and an interruptible
//! open/close animation, all behind a controller that is independent of
//! the UI layer.
//!
//! ## Modules
//!
//! - `state` - Drawer state machine enum and helper methods
//! - `animation` - Interruptible, retargetable animation clock
//! - `gesture` - Claim predicate and release heuristic (pure functions)
//! - `controller` - The controller tying commands, gestures, and frames
//!   together and publishing `offset`/`overlay_visible`

mod animation;
mod controller;
mod gesture;
mod state;

pub use animation::{ease_out_cubic, AnimationClock};
pub use controller::DrawerController;
pub use gesture::{claims_gesture, resolve_release};
pub use state::{DrawerState, DrawerTarget};
