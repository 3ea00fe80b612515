//! Drawer commands and menu actions.

use super::BudgetBoard;
use crate::input::PointerState;
use crate::types::MenuEntry;
use gpui::*;
use std::time::Instant;

impl BudgetBoard {
    /// Menu-button press: open if closed, close if open or opening.
    pub fn toggle_drawer(&mut self, cx: &mut Context<Self>) {
        self.drawer.controller.toggle(Instant::now());
        cx.notify();
    }

    pub fn close_drawer(&mut self, cx: &mut Context<Self>) {
        self.drawer.controller.close(Instant::now());
        cx.notify();
    }

    /// A drawer menu entry was activated. The prototype has a single
    /// screen, so every entry just logs and closes the drawer; sign-out
    /// is delegated to the (absent) auth provider.
    pub fn select_menu_entry(&mut self, entry: MenuEntry, cx: &mut Context<Self>) {
        match entry {
            MenuEntry::SignOut => tracing::info!("sign out requested"),
            other => tracing::info!(entry = other.label(), "menu entry selected"),
        }
        self.close_drawer(cx);
    }

    /// Backdrop mouse down: remember that the press started on the
    /// backdrop, not on the panel.
    pub fn handle_backdrop_mouse_down(
        &mut self,
        _event: &MouseDownEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        self.drawer.backdrop_pressed = true;
    }

    /// Backdrop mouse up: a tap (press and release on the backdrop with
    /// no claimed drag in between) closes the drawer.
    pub fn handle_backdrop_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let was_tap =
            self.drawer.backdrop_pressed && !matches!(self.drawer.pointer, PointerState::DrawerGesture(_));
        self.drawer.backdrop_pressed = false;
        if was_tap {
            self.close_drawer(cx);
        }
    }
}
