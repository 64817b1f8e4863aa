//! Ephemeral UI state for the checkout page.
//!
//! Everything here is owned by the page shell or one of its direct children
//! through signals, and resets on reload. There is no shared store.

/// Payment-method tab. Exactly one form renders at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Card,
    BankTransfer,
    Crypto,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::Crypto,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank",
            PaymentMethod::Crypto => "Crypto",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PaymentMethod::Card => "💳",
            PaymentMethod::BankTransfer => "🏦",
            PaymentMethod::Crypto => "₿",
        }
    }
}

/// Collapsible sections in the mobile accordion layout. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Order,
    Customer,
}

/// Toggle a section open or closed: tapping the open section closes it,
/// tapping another switches to it.
pub fn toggle_section(current: Option<Section>, tapped: Section) -> Option<Section> {
    if current == Some(tapped) { None } else { Some(tapped) }
}

/// Fields with a copy-to-clipboard affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    OrderId,
    TransactionId,
}

/// Display language for the top-bar selector. Presentational only, the label
/// cycles on click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_card() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Card);
    }

    #[test]
    fn tab_labels_are_distinct() {
        let labels: Vec<_> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Card", "Bank", "Crypto"]);
    }

    #[test]
    fn tapping_open_section_closes_it() {
        assert_eq!(toggle_section(Some(Section::Order), Section::Order), None);
    }

    #[test]
    fn tapping_other_section_switches() {
        assert_eq!(
            toggle_section(Some(Section::Order), Section::Customer),
            Some(Section::Customer)
        );
        assert_eq!(toggle_section(None, Section::Customer), Some(Section::Customer));
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::En.toggled(), Language::Es);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Language::default().code(), "EN");
    }
}
