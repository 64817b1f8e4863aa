use dioxus::prelude::*;

use crate::clipboard::copy_with_indicator;
use crate::order::OrderSummary;
use crate::state::{CopyField, Section, toggle_section};

/// An identifier row with a copy-to-clipboard button.
///
/// The button shows a check mark while this row's field is the one most
/// recently copied.
#[component]
fn IdRow(
    label: &'static str,
    value: String,
    field: CopyField,
    copied: Signal<Option<CopyField>>,
) -> Element {
    let text = value.clone();

    rsx! {
        div { class: "summary-row",
            span { class: "muted", "{label}" }
            div { class: "id-value",
                span { class: "mono", "{value}" }
                button {
                    class: "copy-button",
                    onclick: move |_| copy_with_indicator(text.clone(), field, copied),
                    if copied() == Some(field) {
                        span { class: "copied-check", "✔" }
                    } else {
                        span { "⧉" }
                    }
                }
            }
        }
    }
}

/// Full order summary card for the desktop layout.
#[component]
pub fn OrderCard(order: OrderSummary, copied: Signal<Option<CopyField>>) -> Element {
    let total = order.total();

    rsx! {
        div { class: "card order-card",
            h2 { class: "card-title dot-primary", "Order Summary" }

            IdRow {
                label: "Order ID",
                value: order.order_id.clone(),
                field: CopyField::OrderId,
                copied,
            }
            IdRow {
                label: "Transaction ID",
                value: order.transaction_id.clone(),
                field: CopyField::TransactionId,
                copied,
            }

            hr { class: "separator" }

            div { class: "summary-row",
                span { "{order.product_name}" }
                span { "${order.breakdown.subtotal:.2}" }
            }
            div { class: "summary-row",
                span { class: "muted", "Tax (10%)" }
                span { "${order.breakdown.tax:.2}" }
            }
            div { class: "summary-row",
                span { class: "muted", "Processing Fee" }
                span { "${order.breakdown.processing_fee:.2}" }
            }
            div { class: "summary-row discount-row",
                span { "Discount Applied" }
                span { "${order.breakdown.discount:.2}" }
            }

            hr { class: "separator" }

            div { class: "summary-row total-row",
                span { "Total Amount" }
                span { class: "total-amount", "${total:.2} {order.currency}" }
            }
        }
    }
}

/// Collapsible order summary for the mobile accordion layout. The header
/// always shows the total; the body carries the identifiers and product.
#[component]
pub fn OrderAccordion(
    order: OrderSummary,
    copied: Signal<Option<CopyField>>,
    mut expanded: Signal<Option<Section>>,
) -> Element {
    let total = order.total();
    let open = expanded() == Some(Section::Order);

    rsx! {
        div { class: "card accordion",
            button {
                class: "accordion-header",
                onclick: move |_| expanded.set(toggle_section(expanded(), Section::Order)),
                span { class: "card-title dot-primary", "Order Summary" }
                span { class: "accordion-meta",
                    span { class: "total-amount", "${total:.2}" }
                    span { class: "chevron", class: if open { "open" }, "⌄" }
                }
            }

            if open {
                div { class: "accordion-body",
                    IdRow {
                        label: "Order ID",
                        value: order.order_id.clone(),
                        field: CopyField::OrderId,
                        copied,
                    }
                    IdRow {
                        label: "Transaction ID",
                        value: order.transaction_id.clone(),
                        field: CopyField::TransactionId,
                        copied,
                    }
                    div { class: "summary-row",
                        span { "{order.product_name}" }
                    }
                }
            }
        }
    }
}
