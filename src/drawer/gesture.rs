//! Gesture interpretation - the claim predicate and release heuristic.
//!
//! Both functions are pure: they take displacement/velocity samples
//! relative to gesture start and return a decision. The input layer owns
//! event capture and velocity estimation; this module only interprets.

use super::state::DrawerTarget;
use crate::constants::{EDGE_BAND_WIDTH, FLING_VELOCITY, GESTURE_CLAIM_THRESHOLD, INTENT_DISTANCE};

/// Decide whether a pointer move belongs to the drawer.
///
/// A move is claimed only if horizontal displacement exceeds the claim
/// threshold AND dominates vertical displacement AND either:
/// - the drawer is closed, the gesture started inside the left edge
///   band, and it is moving rightward, or
/// - the drawer is open (any horizontal direction qualifies).
///
/// Unclaimed gestures are left to the underlying scrollable content.
///
/// `dx`/`dy` are cumulative displacement since gesture start; `start_x`
/// is the pointer-down x position in window coordinates.
pub fn claims_gesture(drawer_closed: bool, start_x: f32, dx: f32, dy: f32) -> bool {
    if dx.abs() <= GESTURE_CLAIM_THRESHOLD {
        return false;
    }
    if dx.abs() <= dy.abs() {
        return false;
    }
    if drawer_closed {
        start_x <= EDGE_BAND_WIDTH && dx > 0.0
    } else {
        true
    }
}

/// Decide the settle target when a drag is released.
///
/// Precedence:
/// 1. Fling: velocity magnitude above [`FLING_VELOCITY`] decides by sign
///    alone, regardless of distance.
/// 2. Distance: displacement beyond +-W/3 decides.
/// 3. Fallback: the state held before the gesture, except that a slow
///    partial drag past [`INTENT_DISTANCE`] in the flipping direction is
///    honored as intentional.
///
/// Degenerate input (zero displacement and velocity, or NaN from a
/// malformed event stream) falls through every rule and resolves to the
/// pre-gesture state.
pub fn resolve_release(width: f32, was_open: bool, dx: f32, velocity_x: f32) -> DrawerTarget {
    if velocity_x.abs() > FLING_VELOCITY {
        return if velocity_x > 0.0 {
            DrawerTarget::Open
        } else {
            DrawerTarget::Closed
        };
    }

    let snap_distance = width / 3.0;
    if dx > snap_distance {
        return DrawerTarget::Open;
    }
    if dx < -snap_distance {
        return DrawerTarget::Closed;
    }

    if !was_open && dx > INTENT_DISTANCE {
        return DrawerTarget::Open;
    }
    if was_open && dx < -INTENT_DISTANCE {
        return DrawerTarget::Closed;
    }

    if was_open {
        DrawerTarget::Open
    } else {
        DrawerTarget::Closed
    }
}
