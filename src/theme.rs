//! Dark mode toggle.
//!
//! Applies or removes the `dark` class on the `<html>` element. The flag is
//! not persisted; a reload starts back in light mode. Requires a browser
//! environment, no-op elsewhere so host-side tests still build.

/// Apply or remove the `dark` class on the document root.
pub fn apply(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if dark {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}
