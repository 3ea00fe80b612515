//! Home screen rendering - nav bar, transaction list, drawer overlay.

use super::drawer::render_drawer_overlay;
use super::list::render_transaction_list;
use crate::app::BudgetBoard;
use crate::constants::{NAV_BAR_HEIGHT, PADDING_MD, PADDING_SM};
use crate::theme::{self, Palette};
use crate::types::MenuEntry;
use gpui::*;
use gpui_component::h_flex;
use std::time::Instant;

fn render_nav_bar(palette: Palette, cx: &mut Context<BudgetBoard>) -> Div {
    h_flex()
        .h(px(NAV_BAR_HEIGHT))
        .px(px(PADDING_MD))
        .items_center()
        .gap(px(PADDING_MD))
        .border_b_1()
        .border_color(palette.card)
        // Menu button - opens/closes the drawer
        .child(
            div()
                .id("menu-button")
                .p(px(PADDING_SM))
                .rounded(px(8.0))
                .cursor_pointer()
                .hover(|s| s.bg(palette.card))
                .text_size(px(20.0))
                .text_color(palette.text)
                .child("☰")
                .on_click(cx.listener(|this, _, _, cx| {
                    this.toggle_drawer(cx);
                })),
        )
        .child(
            div()
                .flex_1()
                .text_size(px(18.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(palette.text)
                .child("BudgetAI"),
        )
        .child(
            div()
                .id("sign-out-button")
                .p(px(PADDING_SM))
                .cursor_pointer()
                .text_size(px(14.0))
                .text_color(palette.text_secondary)
                .child("Sign Out")
                .on_click(cx.listener(|this, _, _, cx| {
                    this.select_menu_entry(MenuEntry::SignOut, cx);
                })),
        )
}

impl Render for BudgetBoard {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.system.perf.frame();
        self.check_settings_reload(cx);

        // Advance the drawer animation; keep frames coming while one is
        // in flight so the interpolation stays smooth.
        if self.drawer.controller.tick(Instant::now()) {
            window.request_animation_frame();
        }

        let palette = theme::palette(self.settings.data.theme_mode);
        let overlay = if self.drawer.controller.overlay_visible() {
            Some(render_drawer_overlay(&self.drawer.controller, palette, cx))
        } else {
            None
        };

        div()
            .id("budget-root")
            .relative()
            .flex()
            .flex_col()
            .size_full()
            .bg(palette.background)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(render_nav_bar(palette, cx))
            .child(render_transaction_list(
                &self.ledger.transactions,
                &self.settings.data.display_name,
                palette,
                &self.ledger.list_scroll,
            ))
            .children(overlay)
    }
}
