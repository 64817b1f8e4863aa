//! Web interface components for the hosted checkout page.
//!
//! This module contains the Dioxus components that make up the page:
//! the merchant banner, order summary, customer information panel, and
//! the payment-method selector with its forms.

/// Merchant identity and rotating trust-message banner
mod banner;
pub use banner::MerchantBanner;

/// Page shell holding theme, language, accordion, and copy state
mod checkout;
pub use checkout::Checkout;

/// Customer information panel (read and edit views)
mod customer;
pub use customer::{CustomerAccordion, CustomerPanel};

/// Order summary card and mobile accordion
mod order;
pub use order::{OrderAccordion, OrderCard};

/// Payment-method selector and the per-method forms
mod payment;
pub use payment::PaymentMethods;
