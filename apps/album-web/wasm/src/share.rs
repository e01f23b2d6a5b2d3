//! "Copy share link" helper

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlInputElement, Window};

/// Enough to cover any share URL in the input
const SELECTION_END: u32 = 99_999;

/// Selects the share link text and writes it to the clipboard.
/// Success is confirmed with an alert; failures are only logged.
pub fn copy_share_link(
    window: &Window,
    input: &HtmlInputElement,
    success_message: &str,
    failure_message: &str,
) {
    input.select();
    if let Err(e) = input.set_selection_range(0, SELECTION_END) {
        tracing::debug!("set_selection_range failed: {:?}", e);
    }

    let Some(clipboard) = clipboard_of(window.navigator().as_ref()) else {
        tracing::error!("{} clipboard unavailable", failure_message);
        return;
    };

    let text = input.value();
    let promise = clipboard.write_text(&text);

    let window = window.clone();
    let success_message = success_message.to_string();
    let failure_message = failure_message.to_string();

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                tracing::info!(len = text.len(), "share link copied");
                if let Err(e) = window.alert_with_message(&success_message) {
                    tracing::warn!("alert failed: {:?}", e);
                }
            }
            Err(err) => {
                tracing::error!("{} {:?}", failure_message, err);
            }
        }
    });
}

/// `navigator.clipboard`, absent outside secure contexts
fn clipboard_of(navigator: &JsValue) -> Option<Clipboard> {
    let value = Reflect::get(navigator, &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into::<Clipboard>())
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_copy_selects_input_text() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let input = document
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        input.set_value("https://example.com/albums/share/abc");
        document.body().unwrap().append_child(&input).unwrap();

        // Clipboard access may be denied in headless runs; the selection
        // happens before the write either way.
        copy_share_link(&window, &input, "ok", "failed:");
        assert_eq!(input.selection_start().unwrap(), Some(0));

        input.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_clipboard_is_none() {
        let navigator = js_sys::Object::new();
        assert!(clipboard_of(&navigator).is_none());

        Reflect::set(&navigator, &JsValue::from_str("clipboard"), &JsValue::NULL).unwrap();
        assert!(clipboard_of(&navigator).is_none());
    }

    #[wasm_bindgen_test]
    fn test_present_clipboard_is_returned() {
        let navigator = js_sys::Object::new();
        Reflect::set(
            &navigator,
            &JsValue::from_str("clipboard"),
            &js_sys::Object::new(),
        )
        .unwrap();
        assert!(clipboard_of(&navigator).is_some());
    }
}
