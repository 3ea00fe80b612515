//! The drawer controller - commands and gesture samples in, offset out.
//!
//! Owns the drawer width, the continuous offset, and the state machine.
//! The controller is deliberately free of gpui types: the input layer
//! feeds it displacement/velocity samples and the render layer reads
//! `offset()`/`overlay_visible()` back, calling `tick()` once per frame
//! while an animation is in flight.
//!
//! All mutation happens on the UI thread; per-move work is a clamp and
//! an assignment, with no allocation.

use super::animation::AnimationClock;
use super::gesture::resolve_release;
use super::state::{DrawerState, DrawerTarget};
use std::time::Instant;

pub struct DrawerController {
    width: f32,
    /// Current offset in `[-width, 0]`; renderers never observe a value
    /// outside this range.
    offset: f32,
    state: DrawerState,
    /// Last settled state; authoritative only while no gesture or
    /// animation is in flight, and the fallback the release heuristic
    /// resolves to.
    settled_open: bool,
}

impl DrawerController {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            offset: -width,
            state: DrawerState::ClosedIdle,
            settled_open: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    /// Last settled open/closed state.
    pub fn is_open(&self) -> bool {
        self.settled_open
    }

    /// True whenever the drawer is not settled fully closed. The render
    /// layer unmounts the backdrop/panel subtree when this is false.
    pub fn overlay_visible(&self) -> bool {
        !matches!(self.state, DrawerState::ClosedIdle)
    }

    /// Backdrop opacity as a clamped linear function of the offset:
    /// 0 fully closed, the configured maximum fully open.
    pub fn backdrop_opacity(&self) -> f32 {
        let progress = ((self.offset + self.width) / self.width).clamp(0.0, 1.0);
        crate::constants::BACKDROP_MAX_OPACITY * progress
    }

    pub fn open(&mut self, now: Instant) {
        self.animate_to(DrawerTarget::Open, now);
    }

    pub fn close(&mut self, now: Instant) {
        self.animate_to(DrawerTarget::Closed, now);
    }

    /// Menu-button behavior: close if open or opening, otherwise open.
    pub fn toggle(&mut self, now: Instant) {
        let heading_open = match &self.state {
            DrawerState::OpenIdle => true,
            DrawerState::Animating { target, .. } => target.is_open(),
            DrawerState::Dragging { .. } | DrawerState::ClosedIdle => self.settled_open,
        };
        if heading_open {
            self.close(now);
        } else {
            self.open(now);
        }
    }

    /// A claimed gesture starts moving the drawer. Cancels any in-flight
    /// animation, taking its live value as the drag base so there is no
    /// jump when a user catches a moving drawer.
    pub fn begin_drag(&mut self, now: Instant) {
        if let DrawerState::Animating { clock, .. } = &self.state {
            self.offset = clock.value_at(now).clamp(-self.width, 0.0);
        }
        tracing::debug!(offset = self.offset, "drawer drag claimed");
        self.state = DrawerState::Dragging {
            base_offset: self.offset,
        };
    }

    /// One pointer-move sample: recompute the offset from the drag base.
    /// O(1), no allocation; safe to call at input-pipeline frequency.
    pub fn drag_move(&mut self, cumulative_dx: f32) {
        if let DrawerState::Dragging { base_offset } = self.state {
            self.offset = (base_offset + cumulative_dx).clamp(-self.width, 0.0);
        }
    }

    /// Pointer released: resolve the target and animate toward it.
    ///
    /// A release without a preceding claimed drag is ignored; a release
    /// with zero displacement and velocity resolves to the pre-gesture
    /// state through the heuristic's fallback.
    pub fn release(&mut self, cumulative_dx: f32, velocity_x: f32, now: Instant) {
        if !self.state.is_dragging() {
            return;
        }
        let target = resolve_release(self.width, self.settled_open, cumulative_dx, velocity_x);
        tracing::debug!(
            dx = cumulative_dx,
            velocity = velocity_x,
            ?target,
            "drawer released"
        );
        self.state = DrawerState::Animating {
            clock: AnimationClock::new(self.offset, target.offset(self.width), now),
            target,
        };
    }

    /// Advance the animation, if any. Returns true while another frame
    /// is needed; on completion the offset snaps exactly to the target
    /// and the state settles.
    pub fn tick(&mut self, now: Instant) -> bool {
        let DrawerState::Animating { clock, target } = &self.state else {
            return false;
        };
        if clock.is_finished_at(now) {
            let target = *target;
            self.offset = target.offset(self.width);
            self.settled_open = target.is_open();
            self.state = if self.settled_open {
                DrawerState::OpenIdle
            } else {
                DrawerState::ClosedIdle
            };
            tracing::debug!(open = self.settled_open, "drawer settled");
            false
        } else {
            self.offset = clock.value_at(now).clamp(-self.width, 0.0);
            true
        }
    }

    fn animate_to(&mut self, target: DrawerTarget, now: Instant) {
        match &mut self.state {
            DrawerState::Animating {
                clock,
                target: current,
            } => {
                // Re-entry with the same target is a no-op; a new target
                // retargets the live clock (no restart from the base).
                if *current != target {
                    clock.retarget(now, target.offset(self.width));
                    *current = target;
                }
            }
            DrawerState::ClosedIdle if target == DrawerTarget::Closed => {}
            DrawerState::OpenIdle if target == DrawerTarget::Open => {}
            _ => {
                self.state = DrawerState::Animating {
                    clock: AnimationClock::new(self.offset, target.offset(self.width), now),
                    target,
                };
            }
        }
    }
}
