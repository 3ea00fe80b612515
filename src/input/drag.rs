//! Mouse move handling - gesture claim and drawer dragging.
//!
//! ## Performance Notes
//!
//! Mouse move fires at input-pipeline frequency (potentially well above
//! 60Hz during a drag). Per-event work is kept O(1): a velocity fold, a
//! clamp, and an assignment. Early exit for Idle/Yielded states.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::BudgetBoard;
use crate::constants::GESTURE_CLAIM_THRESHOLD;
use crate::drawer::claims_gesture;
use crate::input::state::PointerState;
use crate::profile_scope;
use gpui::*;
use std::time::Instant;

impl BudgetBoard {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        let now = Instant::now();
        match &mut self.drawer.pointer {
            PointerState::Idle | PointerState::Yielded => {}

            PointerState::Pending(tracking) => {
                tracking.advance(event.position, now);
                let (dx, dy) = tracking.cumulative(event.position);
                let start_x = f32::from(tracking.start.x);
                let drawer_closed = !self.drawer.controller.is_open();

                if claims_gesture(drawer_closed, start_x, dx, dy) {
                    let tracking = tracking.clone();
                    self.drawer.controller.begin_drag(now);
                    self.drawer.controller.drag_move(dx);
                    self.drawer.pointer = PointerState::DrawerGesture(tracking);
                    cx.notify();
                } else if dx.abs() > GESTURE_CLAIM_THRESHOLD
                    || dy.abs() > GESTURE_CLAIM_THRESHOLD
                {
                    // Clear movement that the predicate rejected: the
                    // list keeps this gesture until the pointer lifts.
                    self.drawer.pointer = PointerState::Yielded;
                }
            }

            PointerState::DrawerGesture(tracking) => {
                tracking.advance(event.position, now);
                let (dx, _) = tracking.cumulative(event.position);
                self.drawer.controller.drag_move(dx);
                cx.notify();
            }
        }
    }
}
