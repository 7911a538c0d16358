//! Plain-text rendering of the widget view for the terminal.

use std::fmt::Write as _;

use upsell_core::Status;
use upsell_widget::WidgetView;

pub(crate) fn render_status(status: &Status) -> String {
    status.to_string()
}

pub(crate) fn render_view(view: &WidgetView<'_>) -> String {
    let mut out = String::new();

    if let Some(status) = view.status {
        let _ = writeln!(out, "{}", render_status(status));
    }

    if view.loading {
        let _ = writeln!(out, "loading {} products...", view.placeholder_count);
        return out;
    }

    for card in &view.cards {
        let marker = if card.in_cart { "in cart" } else { "add to cart" };
        let _ = writeln!(out, "{} ({marker})", card.heading);
        let _ = writeln!(
            out,
            "  selected: {} {} [{}]",
            card.selected.title, card.selected.price, card.selected.id
        );
        if card.has_variant_choice() {
            for option in card.options() {
                let _ = writeln!(out, "  - {} [{}]", option.label, option.value);
            }
        }
    }
    out
}
