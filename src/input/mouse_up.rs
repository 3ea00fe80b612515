//! Mouse up event handling - release claimed gestures.

use crate::app::BudgetBoard;
use crate::input::state::PointerState;
use gpui::*;
use std::time::Instant;

impl BudgetBoard {
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let now = Instant::now();
        if let PointerState::DrawerGesture(tracking) = &self.drawer.pointer {
            let (dx, _) = tracking.cumulative(event.position);
            self.drawer.controller.release(dx, tracking.velocity_x, now);
            cx.notify();
        }
        self.drawer.pointer.reset();
    }
}
