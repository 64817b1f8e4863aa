use std::time::Duration;

use dioxus::prelude::*;

const MERCHANT_NAME: &str = "TechOne Online";
const MERCHANT_URL: &str = "https://techoneonline.com";
const MERCHANT_LOGO: Asset = asset!("/assets/images/techone-logo.png");

/// One entry of the rotating trust banner.
struct TrustMessage {
    text: &'static str,
    subtitle: &'static str,
    accent: &'static str,
}

const TRUST_MESSAGES: &[TrustMessage] = &[
    TrustMessage {
        text: "🔒 Secure checkout with",
        subtitle: "256-bit SSL encryption",
        accent: "accent-blue",
    },
    TrustMessage {
        text: "✨ Complete your premium purchase from",
        subtitle: "Trusted payment partner",
        accent: "accent-purple",
    },
    TrustMessage {
        text: "⚡ Finalize your order from",
        subtitle: "Lightning-fast processing",
        accent: "accent-orange",
    },
    TrustMessage {
        text: "🛡️ Protected transaction with",
        subtitle: "PCI DSS compliant",
        accent: "accent-green",
    },
];

const ROTATION_INTERVAL: Duration = Duration::from_millis(4000);

fn next_message(index: usize) -> usize {
    (index + 1) % TRUST_MESSAGES.len()
}

/// Merchant identity block with the rotating trust message above it.
///
/// The rotation timer lives in a `use_future`; dropping the component drops
/// the future and stops the timer.
#[component]
pub fn MerchantBanner() -> Element {
    let mut current = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            gloo_timers::future::sleep(ROTATION_INTERVAL).await;
            current.set(next_message(current()));
        }
    });

    let message = &TRUST_MESSAGES[current()];

    rsx! {
        div { class: "card banner-card",
            div { class: "security-badges",
                span { class: "badge badge-success", "🛡️ SSL Secured" }
                span { class: "badge badge-info", "✔️ PCI Compliant" }
            }

            div { class: "trust-message {message.accent}",
                h3 { "{message.text}" }
                p { class: "muted", "{message.subtitle}" }
            }

            div { class: "merchant-row",
                img {
                    class: "merchant-logo",
                    src: MERCHANT_LOGO,
                    alt: "{MERCHANT_NAME}",
                }
                div { class: "merchant-identity",
                    div { class: "merchant-name-row",
                        h1 { "{MERCHANT_NAME}" }
                        span {
                            class: "badge badge-success verified-badge",
                            title: "Verified Merchant",
                            "🛡️ Verified"
                        }
                    }
                    a {
                        class: "merchant-link",
                        href: "{MERCHANT_URL}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "techoneonline.com ↗"
                    }
                }
            }

            div { class: "trust-indicators",
                div { class: "trust-indicator",
                    span { class: "indicator-value", "10,000+" }
                    span { class: "muted", "Secure payments" }
                }
                div { class: "trust-indicator",
                    span { class: "indicator-value", "99.9%" }
                    span { class: "muted", "Uptime" }
                }
                div { class: "trust-indicator",
                    span { class: "indicator-value", "24/7" }
                    span { class: "muted", "Support" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around_the_list() {
        let mut index = 0;
        let mut visited = vec![index];
        for _ in 1..TRUST_MESSAGES.len() {
            index = next_message(index);
            visited.push(index);
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(next_message(index), 0);
    }

    #[test]
    fn every_message_has_text_and_subtitle() {
        for message in TRUST_MESSAGES {
            assert!(!message.text.is_empty());
            assert!(!message.subtitle.is_empty());
            assert!(message.accent.starts_with("accent-"));
        }
    }
}
