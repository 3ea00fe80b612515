//! Drawer overlay rendering - backdrop and sliding panel.
//!
//! The whole subtree is only mounted while the controller reports
//! `overlay_visible()`; when the drawer settles closed it disappears
//! from the element tree entirely. The panel's horizontal translation
//! and the backdrop's opacity are both pure functions of the
//! controller's offset.

use crate::app::BudgetBoard;
use crate::constants::{DRAWER_WIDTH, PADDING_LG, PADDING_SM};
use crate::drawer::DrawerController;
use crate::theme::Palette;
use crate::types::MenuEntry;
use gpui::*;
use gpui_component::v_flex;

fn render_menu_entry(
    entry: MenuEntry,
    palette: Palette,
    cx: &mut Context<BudgetBoard>,
) -> Stateful<Div> {
    let color = match entry {
        MenuEntry::SignOut => palette.error,
        _ => palette.text,
    };
    div()
        .id(ElementId::Name(format!("menu-{}", entry.label()).into()))
        .px(px(PADDING_LG))
        .py(px(PADDING_SM + 4.0))
        .rounded(px(8.0))
        .cursor_pointer()
        .hover(|s| s.bg(palette.background))
        .text_size(px(16.0))
        .text_color(color)
        .child(entry.label())
        .on_click(cx.listener(move |this, _, _, cx| {
            this.select_menu_entry(entry, cx);
        }))
}

/// Render the backdrop and the drawer panel.
///
/// Deferred so the overlay paints above the list regardless of tree
/// order; the backdrop tracks press state (flag on mouse down, close on
/// mouse up) so a drag that ends over the backdrop does not count as a
/// dismissing tap.
pub fn render_drawer_overlay(
    controller: &DrawerController,
    palette: Palette,
    cx: &mut Context<BudgetBoard>,
) -> impl IntoElement + use<> {
    let offset = controller.offset();
    let opacity = controller.backdrop_opacity();

    deferred(
        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            // Backdrop: click-to-close, opacity tracks the offset
            .child(
                div()
                    .id("drawer-backdrop")
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .bg(hsla(0.0, 0.0, 0.0, opacity))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(BudgetBoard::handle_backdrop_mouse_down),
                    )
                    .on_mouse_up(
                        MouseButton::Left,
                        cx.listener(BudgetBoard::handle_backdrop_mouse_up),
                    ),
            )
            // Panel: translated by the controller's offset
            .child(
                v_flex()
                    .id("drawer-panel")
                    .absolute()
                    .top_0()
                    .left(px(offset))
                    .w(px(DRAWER_WIDTH))
                    .h_full()
                    .bg(palette.card)
                    .border_r_1()
                    .border_color(palette.background)
                    .pt(px(PADDING_LG * 2.0))
                    .px(px(PADDING_SM))
                    .gap(px(4.0))
                    .child(
                        div()
                            .px(px(PADDING_LG))
                            .pb(px(PADDING_LG))
                            .text_size(px(22.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(palette.primary)
                            .child("BudgetAI"),
                    )
                    .children(
                        MenuEntry::all()
                            .into_iter()
                            .map(|entry| render_menu_entry(entry, palette, cx)),
                    ),
            ),
    )
    .with_priority(1500)
}
