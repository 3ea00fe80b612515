//! Transaction list rendering - greeting header, chart placeholder,
//! transaction rows, footer.

use crate::constants::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, CHART_PLACEHOLDER_HEIGHT, PADDING_LG, PADDING_MD,
};
use crate::data::total_spending;
use crate::theme::Palette;
use crate::types::Transaction;
use gpui::*;
use gpui_component::{h_flex, v_flex};

/// Greeting block and chart placeholder shown above the rows.
fn render_header(display_name: &str, transactions: &[Transaction], palette: Palette) -> Div {
    let total = total_spending(transactions);

    v_flex()
        .px(px(PADDING_LG))
        .pt(px(PADDING_LG))
        .gap(px(PADDING_LG))
        .child(
            v_flex()
                .gap(px(4.0))
                .child(
                    div()
                        .text_size(px(28.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(palette.text)
                        .child(format!("Hello {},", display_name)),
                )
                .child(
                    div()
                        .text_size(px(16.0))
                        .text_color(palette.text_secondary)
                        .child("Here is your spending overview"),
                ),
        )
        // Chart placeholder - visualization is out of scope
        .child(
            v_flex()
                .h(px(CHART_PLACEHOLDER_HEIGHT))
                .rounded(px(BORDER_RADIUS_LG))
                .bg(palette.card)
                .items_center()
                .justify_center()
                .gap(px(8.0))
                .child(
                    div()
                        .text_size(px(14.0))
                        .italic()
                        .text_color(palette.text_secondary)
                        .child("[ Current Spending Chart ]"),
                )
                .child(
                    div()
                        .text_size(px(22.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(palette.primary)
                        .child(format!("${:.2} this month", total)),
                ),
        )
        .child(
            div()
                .text_size(px(20.0))
                .font_weight(FontWeight::BOLD)
                .text_color(palette.text)
                .child("Recent Transactions"),
        )
}

fn render_row(ix: usize, txn: &Transaction, palette: Palette) -> Stateful<Div> {
    h_flex()
        .id(("txn-row", ix))
        .justify_between()
        .items_center()
        .p(px(PADDING_MD))
        .mx(px(PADDING_LG))
        .mb(px(12.0))
        .rounded(px(BORDER_RADIUS_MD))
        .bg(palette.card)
        .child(
            v_flex()
                .gap(px(4.0))
                .child(
                    div()
                        .text_size(px(16.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(palette.text)
                        .child(txn.name.clone()),
                )
                .child(
                    div()
                        .text_size(px(14.0))
                        .text_color(palette.text_secondary)
                        .child(txn.category.label()),
                ),
        )
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::BOLD)
                .text_color(palette.text)
                .child(txn.display_amount()),
        )
}

/// Render the scrollable transaction list with header and footer.
pub fn render_transaction_list(
    transactions: &[Transaction],
    display_name: &str,
    palette: Palette,
    scroll: &ScrollHandle,
) -> Stateful<Div> {
    div()
        .id("txn-list")
        .flex_1()
        .overflow_y_scroll()
        .track_scroll(scroll)
        .child(render_header(display_name, transactions, palette))
        .children(
            transactions
                .iter()
                .enumerate()
                .map(|(ix, txn)| render_row(ix, txn, palette)),
        )
        .child(
            div()
                .p(px(PADDING_LG))
                .mt(px(PADDING_LG))
                .flex()
                .justify_center()
                .text_size(px(14.0))
                .italic()
                .text_color(palette.text_secondary)
                .child("[ Footer Placeholder ]"),
        )
}
