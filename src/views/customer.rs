use dioxus::prelude::*;

use crate::customer::{CustomerEditor, CustomerField};
use crate::state::{Section, toggle_section};

/// Read-only listing of the committed customer record.
#[component]
fn CustomerReadView(editor: Signal<CustomerEditor>) -> Element {
    let editor = editor.read();
    let info = editor.committed();

    rsx! {
        div { class: "customer-fields",
            div {
                span { class: "muted", "Name:" }
                span { class: "field-value", "{info.name}" }
            }
            div {
                span { class: "muted", "Email:" }
                span { class: "field-value", "{info.email}" }
            }
            div {
                span { class: "muted", "Phone:" }
                span { class: "field-value", "{info.phone}" }
            }
            div {
                span { class: "muted", "Address:" }
                span { class: "field-value", "{info.address}" }
            }
        }
    }
}

/// One labeled text input bound to a draft field. Accepts any string, no
/// validation.
#[component]
fn DraftInput(
    label: &'static str,
    input_id: &'static str,
    field: CustomerField,
    mut editor: Signal<CustomerEditor>,
) -> Element {
    let value = {
        let editor = editor.read();
        let draft = editor.draft();
        match field {
            CustomerField::Name => draft.name.clone(),
            CustomerField::Email => draft.email.clone(),
            CustomerField::Phone => draft.phone.clone(),
            CustomerField::Address => draft.address.clone(),
        }
    };

    rsx! {
        div { class: "form-field",
            label { r#for: "{input_id}", "{label}" }
            input {
                r#type: "text",
                id: "{input_id}",
                value: "{value}",
                oninput: move |event| {
                    editor.write().set_field(field, event.value());
                },
            }
        }
    }
}

/// Customer information card for the desktop layout.
///
/// The Edit button swaps in the draft-backed form; Save promotes the draft
/// and Cancel discards it. Nothing is written anywhere but memory.
#[component]
pub fn CustomerPanel(mut editor: Signal<CustomerEditor>) -> Element {
    let editing = editor.read().is_editing();

    rsx! {
        div { class: "card customer-card",
            div { class: "card-header",
                h2 { class: "card-title dot-accent", "Customer Information" }
                button {
                    class: "outline-button",
                    onclick: move |_| {
                        let mut editor = editor.write();
                        if editor.is_editing() {
                            editor.save();
                        } else {
                            editor.begin_edit();
                        }
                    },
                    if editing { "💾 Save" } else { "✏️ Edit" }
                }
            }

            if editing {
                div { class: "customer-form",
                    DraftInput {
                        label: "Full Name",
                        input_id: "edit-name",
                        field: CustomerField::Name,
                        editor,
                    }
                    DraftInput {
                        label: "Email Address",
                        input_id: "edit-email",
                        field: CustomerField::Email,
                        editor,
                    }
                    DraftInput {
                        label: "Phone Number",
                        input_id: "edit-phone",
                        field: CustomerField::Phone,
                        editor,
                    }
                    DraftInput {
                        label: "Address",
                        input_id: "edit-address",
                        field: CustomerField::Address,
                        editor,
                    }
                    button {
                        class: "outline-button",
                        onclick: move |_| editor.write().cancel(),
                        "✖ Cancel"
                    }
                }
            } else {
                CustomerReadView { editor }
            }
        }
    }
}

/// Collapsible read-only customer section for the mobile accordion layout.
#[component]
pub fn CustomerAccordion(
    editor: Signal<CustomerEditor>,
    mut expanded: Signal<Option<Section>>,
) -> Element {
    let open = expanded() == Some(Section::Customer);

    rsx! {
        div { class: "card accordion",
            button {
                class: "accordion-header",
                onclick: move |_| expanded.set(toggle_section(expanded(), Section::Customer)),
                span { class: "card-title dot-accent", "Customer Information" }
                span { class: "chevron", class: if open { "open" }, "⌄" }
            }

            if open {
                div { class: "accordion-body",
                    CustomerReadView { editor }
                }
            }
        }
    }
}
