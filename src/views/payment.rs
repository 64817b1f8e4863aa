use dioxus::prelude::*;

use crate::state::PaymentMethod;

const BANK_ACCOUNTS: &[&str] = &[
    "Chase Bank - ***4567",
    "Wells Fargo - ***8901",
    "Bank of America - ***2345",
];

const CRYPTO_CURRENCIES: &[&str] = &["Bitcoin (BTC)", "Ethereum (ETH)", "USD Coin (USDC)"];

/// The crypto flow is a non-functional placeholder, so its tab wears a
/// "Sandbox" badge.
fn has_sandbox_badge(method: PaymentMethod) -> bool {
    method == PaymentMethod::Crypto
}

/// Payment-method selector card: three tabs, one form at a time, and the
/// desktop pay button.
///
/// None of the forms submit anywhere and the pay button has no handler; a
/// real deployment wires the gateway in behind this page.
#[component]
pub fn PaymentMethods(mut method: Signal<PaymentMethod>, total: f64, currency: String) -> Element {
    rsx! {
        div { class: "card payment-card",
            h2 { class: "card-title dot-secondary", "Payment Method" }

            div { class: "payment-tabs",
                for tab in PaymentMethod::ALL {
                    button {
                        key: "{tab.label()}",
                        class: "payment-tab",
                        class: if method() == tab { "selected" },
                        onclick: move |_| method.set(tab),
                        span { class: "tab-icon", "{tab.icon()}" }
                        span { class: "tab-label", "{tab.label()}" }
                        if has_sandbox_badge(tab) {
                            span { class: "badge badge-warning sandbox-badge", "Sandbox" }
                        }
                    }
                }
            }

            match method() {
                PaymentMethod::Card => rsx! {
                    CreditCardForm {}
                },
                PaymentMethod::BankTransfer => rsx! {
                    BankTransferForm {}
                },
                PaymentMethod::Crypto => rsx! {
                    CryptoPaymentForm {}
                },
            }

            div { class: "desktop-pay",
                button { class: "pay-button", "Complete Payment - ${total:.2} {currency}" }
                p { class: "muted pay-reassurance",
                    "🛡️ Your payment information is secure and encrypted"
                }
            }
        }
    }
}

#[component]
fn CreditCardForm() -> Element {
    let mut card_number = use_signal(String::new);
    let mut expiry = use_signal(String::new);
    let mut cvv = use_signal(String::new);
    let mut cardholder = use_signal(String::new);

    rsx! {
        div { class: "payment-form",
            div { class: "form-field",
                label { r#for: "card-number", "Card Number" }
                input {
                    r#type: "text",
                    id: "card-number",
                    placeholder: "1234 5678 9012 3456",
                    value: "{card_number}",
                    oninput: move |event| card_number.set(event.value()),
                }
            }
            div { class: "form-grid",
                div { class: "form-field",
                    label { r#for: "card-expiry", "Expiry Date" }
                    input {
                        r#type: "text",
                        id: "card-expiry",
                        placeholder: "MM/YY",
                        value: "{expiry}",
                        oninput: move |event| expiry.set(event.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "card-cvv", "CVV" }
                    input {
                        r#type: "text",
                        id: "card-cvv",
                        placeholder: "123",
                        value: "{cvv}",
                        oninput: move |event| cvv.set(event.value()),
                    }
                }
            }
            div { class: "form-field",
                label { r#for: "card-holder", "Cardholder Name" }
                input {
                    r#type: "text",
                    id: "card-holder",
                    placeholder: "John Smith",
                    value: "{cardholder}",
                    oninput: move |event| cardholder.set(event.value()),
                }
            }
        }
    }
}

#[component]
fn BankTransferForm() -> Element {
    let mut selected_account = use_signal(|| BANK_ACCOUNTS[0].to_string());

    rsx! {
        div { class: "payment-form",
            div { class: "notice notice-info",
                p { class: "notice-title", "ℹ️ Bank Transfer Instructions" }
                p { class: "muted",
                    "You will be redirected to your bank's secure portal to complete the payment."
                }
            }
            div { class: "form-field",
                label { r#for: "bank-account", "Select Bank Account" }
                select {
                    id: "bank-account",
                    onchange: move |event| selected_account.set(event.value()),
                    for account in BANK_ACCOUNTS {
                        option {
                            key: "{account}",
                            value: "{account}",
                            selected: *selected_account.read() == *account,
                            "{account}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CryptoPaymentForm() -> Element {
    let mut selected_currency = use_signal(|| CRYPTO_CURRENCIES[0].to_string());
    let mut wallet_address = use_signal(String::new);

    rsx! {
        div { class: "payment-form",
            div { class: "notice notice-warning",
                p { class: "notice-title", "ℹ️ Sandbox Mode" }
                p { class: "muted",
                    "This is a test environment. No real cryptocurrency will be charged."
                }
            }
            div { class: "form-field",
                label { r#for: "crypto-currency", "Select Cryptocurrency" }
                select {
                    id: "crypto-currency",
                    onchange: move |event| selected_currency.set(event.value()),
                    for currency in CRYPTO_CURRENCIES {
                        option {
                            key: "{currency}",
                            value: "{currency}",
                            selected: *selected_currency.read() == *currency,
                            "{currency}"
                        }
                    }
                }
            }
            div { class: "form-field",
                label { r#for: "wallet-address", "Wallet Address" }
                input {
                    r#type: "text",
                    id: "wallet-address",
                    placeholder: "Enter your wallet address",
                    value: "{wallet_address}",
                    oninput: move |event| wallet_address.set(event.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_accounts_are_masked() {
        assert_eq!(BANK_ACCOUNTS.len(), 3);
        for account in BANK_ACCOUNTS {
            assert!(account.contains("***"));
        }
    }

    #[test]
    fn sandbox_badge_only_applies_to_crypto() {
        let badged: Vec<_> = PaymentMethod::ALL
            .into_iter()
            .filter(|m| has_sandbox_badge(*m))
            .collect();
        assert_eq!(badged, vec![PaymentMethod::Crypto]);
    }
}
