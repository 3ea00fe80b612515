//! Mouse input handling for the home screen.
//!
//! Implements the gesture side of the drawer: a pressed pointer is
//! tracked until its movement either satisfies the drawer's claim
//! predicate or is yielded to the transaction list. Claimed gestures
//! feed displacement/velocity samples to the drawer controller.
//!
//! ## Modules
//!
//! - `state` - Pointer tracking state machine
//! - `mouse_down` - Begin tracking a pressed pointer
//! - `drag` - Claim-or-yield decision and drag sample delivery
//! - `mouse_up` - Gesture release

mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::{PointerState, PointerTracking};
