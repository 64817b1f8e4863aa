//! Copy-to-clipboard affordance with a transient "copied" indicator.

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::CopyField;

/// How long the check-mark indicator stays up after a copy.
const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Write `text` to the system clipboard and flag `field` as copied.
///
/// The clipboard write is best-effort: the returned promise is dropped and
/// failures are not surfaced. A timer clears the indicator after
/// [`COPIED_RESET`], but only if it still belongs to `field`, so copying a
/// second field does not get its indicator clipped by the first field's timer.
pub fn copy_with_indicator(text: String, field: CopyField, mut copied: Signal<Option<CopyField>>) {
    write_clipboard(&text);
    copied.set(Some(field));
    spawn(async move {
        gloo_timers::future::sleep(COPIED_RESET).await;
        if should_clear(*copied.read(), field) {
            copied.set(None);
        }
    });
}

/// Whether an expiring timer for `field` may clear the current indicator.
///
/// Only the field that owns the indicator clears it; a timer left over from
/// an earlier copy must not clip the indicator of a later one.
fn should_clear(current: Option<CopyField>, field: CopyField) -> bool {
    current == Some(field)
}

fn write_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_clears_its_own_field() {
        assert!(should_clear(Some(CopyField::OrderId), CopyField::OrderId));
    }

    #[test]
    fn stale_timer_leaves_another_fields_indicator_alone() {
        assert!(!should_clear(
            Some(CopyField::TransactionId),
            CopyField::OrderId
        ));
    }

    #[test]
    fn already_cleared_indicator_stays_cleared() {
        assert!(!should_clear(None, CopyField::OrderId));
    }
}
