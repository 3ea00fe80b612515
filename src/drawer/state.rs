//! Drawer state machine - unified state for the sidebar drawer.
//!
//! A single tagged enum replaces the scattered boolean flags the obvious
//! implementation would accumulate (`is_open`, `is_dragging`,
//! `is_animating`, an out-of-band "really open" ref). Exactly one variant
//! is active at any instant, making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! ClosedIdle -> Animating(Open)    (open command)
//! OpenIdle   -> Animating(Closed)  (close command, backdrop tap)
//! ClosedIdle -> Dragging           (claimed edge swipe, rightward)
//! OpenIdle   -> Dragging           (claimed horizontal drag, any direction)
//! Dragging   -> Animating(target)  (release; target from the release heuristic)
//! Animating  -> ClosedIdle/OpenIdle (animation reaches its target)
//! Animating  -> Animating(other)   (interrupt; clock retargets from live value)
//! ```

use super::animation::AnimationClock;

/// Where an animation or release is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTarget {
    Open,
    Closed,
}

impl DrawerTarget {
    /// The settled offset for this target given the drawer width.
    pub fn offset(&self, width: f32) -> f32 {
        match self {
            DrawerTarget::Open => 0.0,
            DrawerTarget::Closed => -width,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DrawerTarget::Open)
    }
}

/// Current drawer interaction state.
#[derive(Debug, Clone)]
pub enum DrawerState {
    /// Settled fully off-screen; the backdrop/panel subtree is unmounted.
    ClosedIdle,

    /// Settled fully on-screen.
    OpenIdle,

    /// A claimed pointer gesture is moving the drawer.
    Dragging {
        /// Offset at gesture start; each move recomputes
        /// `clamp(base_offset + dx)` so move handling is O(1).
        base_offset: f32,
    },

    /// A frame-driven interpolation toward `target` is in flight.
    Animating {
        clock: AnimationClock,
        target: DrawerTarget,
    },
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::ClosedIdle
    }
}

impl DrawerState {
    /// True for the two settled states (no gesture or animation in flight).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::ClosedIdle | Self::OpenIdle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// The in-flight animation target, if animating.
    pub fn animating_target(&self) -> Option<DrawerTarget> {
        match self {
            Self::Animating { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Drag base offset, if dragging.
    pub fn drag_base(&self) -> Option<f32> {
        match self {
            Self::Dragging { base_offset } => Some(*base_offset),
            _ => None,
        }
    }
}
