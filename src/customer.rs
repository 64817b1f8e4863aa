//! Customer record and the view/edit state machine behind the customer panel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerInfo {
    pub fn sample() -> Self {
        Self {
            name: "John Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Tech Street, San Francisco, CA 94105".to_string(),
        }
    }
}

/// Fields of [`CustomerInfo`] addressable from the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
    Address,
}

/// Two copies of the customer record exist while editing: the committed copy
/// shown in the read view and a draft the form mutates. Save promotes the
/// draft, cancel throws it away. Nothing leaves memory; a reload starts over
/// from the committed sample.
///
/// No field is validated. Any string is accepted, including an empty or
/// malformed email.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerEditor {
    committed: CustomerInfo,
    draft: CustomerInfo,
    editing: bool,
}

impl CustomerEditor {
    pub fn new(committed: CustomerInfo) -> Self {
        let draft = committed.clone();
        Self {
            committed,
            draft,
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The committed copy, shown whenever the panel is in the read view.
    pub fn committed(&self) -> &CustomerInfo {
        &self.committed
    }

    /// The draft copy backing the edit form.
    pub fn draft(&self) -> &CustomerInfo {
        &self.draft
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.committed.clone();
        self.editing = true;
    }

    /// Promote the draft to the committed copy and leave edit mode.
    pub fn save(&mut self) {
        self.committed = self.draft.clone();
        self.editing = false;
        log::info!("customer info saved (in memory only)");
    }

    /// Discard the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
        self.editing = false;
    }

    pub fn set_field(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::Name => self.draft.name = value,
            CustomerField::Email => self.draft.email = value,
            CustomerField::Phone => self.draft.phone = value,
            CustomerField::Address => self.draft.address = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_read_view() {
        let editor = CustomerEditor::new(CustomerInfo::sample());
        assert!(!editor.is_editing());
        assert_eq!(editor.committed(), &CustomerInfo::sample());
    }

    #[test]
    fn cancel_discards_draft_edits() {
        let mut editor = CustomerEditor::new(CustomerInfo::sample());
        editor.begin_edit();
        editor.set_field(CustomerField::Name, "Jane Doe".to_string());
        editor.set_field(CustomerField::Email, "not-an-email".to_string());
        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(editor.committed(), &CustomerInfo::sample());
        assert_eq!(editor.draft(), &CustomerInfo::sample());
    }

    #[test]
    fn save_promotes_draft_to_committed() {
        let mut editor = CustomerEditor::new(CustomerInfo::sample());
        editor.begin_edit();
        editor.set_field(CustomerField::Name, "Jane Doe".to_string());
        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(editor.committed().name, "Jane Doe");
        // Untouched fields survive the round trip.
        assert_eq!(editor.committed().email, CustomerInfo::sample().email);
    }

    #[test]
    fn edits_only_touch_the_draft_until_save() {
        let mut editor = CustomerEditor::new(CustomerInfo::sample());
        editor.begin_edit();
        editor.set_field(CustomerField::Phone, "555".to_string());
        assert_eq!(editor.committed().phone, CustomerInfo::sample().phone);
        assert_eq!(editor.draft().phone, "555");
    }

    #[test]
    fn reentering_edit_resets_draft_from_committed() {
        let mut editor = CustomerEditor::new(CustomerInfo::sample());
        editor.begin_edit();
        editor.set_field(CustomerField::Address, "nowhere".to_string());
        editor.cancel();
        editor.begin_edit();
        assert_eq!(editor.draft().address, CustomerInfo::sample().address);
    }

    #[test]
    fn customer_survives_a_serde_round_trip() {
        let info = CustomerInfo::sample();
        let json = serde_json::to_string(&info).unwrap();
        let parsed: CustomerInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn empty_strings_are_accepted() {
        let mut editor = CustomerEditor::new(CustomerInfo::sample());
        editor.begin_edit();
        editor.set_field(CustomerField::Name, String::new());
        editor.save();
        assert_eq!(editor.committed().name, "");
    }
}
