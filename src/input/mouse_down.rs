//! Mouse down event handling - begin tracking a potential drawer gesture.

use crate::app::BudgetBoard;
use crate::input::state::{PointerState, PointerTracking};
use gpui::*;
use std::time::Instant;

impl BudgetBoard {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        // Nothing is decided yet: the gesture stays pending until
        // movement either satisfies the claim predicate or rejects it.
        self.drawer.pointer =
            PointerState::Pending(PointerTracking::new(event.position, Instant::now()));
    }
}
