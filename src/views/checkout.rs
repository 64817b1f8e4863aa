use dioxus::prelude::*;

use crate::customer::{CustomerEditor, CustomerInfo};
use crate::order::OrderSummary;
use crate::state::{CopyField, Language, PaymentMethod, Section};
use crate::theme;
use crate::views::{
    CustomerAccordion, CustomerPanel, MerchantBanner, OrderAccordion, OrderCard, PaymentMethods,
};

const PGX_LOGO: Asset = asset!("/assets/images/pgx-logo.png");

/// Top bar: secure-checkout label, language selector, theme switch.
#[component]
fn TopBar(mut dark_mode: Signal<bool>, mut language: Signal<Language>) -> Element {
    rsx! {
        header { class: "top-bar",
            div { class: "top-bar-brand",
                span { "🛡️" }
                span { class: "top-bar-title", "Secure Checkout" }
            }
            div { class: "top-bar-controls",
                button {
                    class: "language-button",
                    onclick: move |_| language.set(language().toggled()),
                    "🌐 {language().code()} ⌄"
                }
                button {
                    class: "theme-button",
                    onclick: move |_| {
                        let next = !dark_mode();
                        dark_mode.set(next);
                        theme::apply(next);
                    },
                    if dark_mode() { "☀️" } else { "🌙" }
                }
            }
        }
    }
}

#[component]
fn PoweredBy() -> Element {
    rsx! {
        div { class: "powered-by",
            span { class: "muted", "Powered by" }
            img { class: "pgx-logo", src: PGX_LOGO, alt: "PGX" }
        }
    }
}

/// The checkout page shell.
///
/// Owns every piece of ephemeral UI state: theme and language flags, the
/// customer editor, the active payment-method tab, the open mobile accordion
/// section, and the copied-field indicator. Children receive signals as
/// props; there is no shared store.
#[component]
pub fn Checkout() -> Element {
    let dark_mode = use_signal(|| false);
    let language = use_signal(Language::default);
    let editor = use_signal(|| CustomerEditor::new(CustomerInfo::sample()));
    let method = use_signal(PaymentMethod::default);
    let expanded: Signal<Option<Section>> = use_signal(|| None);
    let copied: Signal<Option<CopyField>> = use_signal(|| None);

    let order = OrderSummary::sample();
    let total = order.total();
    let currency = order.currency.clone();

    rsx! {
        div { class: "checkout-page",
            TopBar { dark_mode, language }

            div { class: "checkout-content",
                MerchantBanner {}

                div { class: "desktop-layout",
                    div { class: "layout-column",
                        OrderCard { order: order.clone(), copied }
                        CustomerPanel { editor }
                    }
                    div { class: "layout-column",
                        PaymentMethods { method, total, currency: currency.clone() }
                    }
                }

                div { class: "mobile-layout",
                    OrderAccordion { order: order.clone(), copied, expanded }
                    CustomerAccordion { editor, expanded }
                    PaymentMethods { method, total, currency: currency.clone() }
                }
            }

            div { class: "sticky-pay-bar",
                div { class: "sticky-total-row",
                    span { class: "muted", "Total Amount" }
                    span { class: "total-amount", "${total:.2} {currency}" }
                }
                button { class: "pay-button", "Complete Payment" }
                PoweredBy {}
            }

            footer { class: "desktop-footer",
                PoweredBy {}
            }
        }
    }
}
