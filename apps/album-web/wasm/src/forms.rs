//! Upload and delete form helpers

use crate::error::AlbumError;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, Window};

/// Submits the form owning `input`. Inputs outside a form do nothing.
pub fn submit_owning_form(input: &HtmlInputElement) -> Result<(), AlbumError> {
    match input.form() {
        Some(form) => form
            .submit()
            .map_err(|e| AlbumError::dom("form.submit", e)),
        None => {
            tracing::debug!("file input has no owning form");
            Ok(())
        }
    }
}

/// Asks for confirmation and submits the delete form when accepted.
/// Returns whether the form was submitted.
pub fn confirm_and_submit(
    window: &Window,
    document: &Document,
    form_id: &str,
    message: &str,
) -> Result<bool, AlbumError> {
    let confirmed = window
        .confirm_with_message(message)
        .map_err(|e| AlbumError::dom("confirm", e))?;
    if !confirmed {
        tracing::debug!("album deletion cancelled");
        return Ok(false);
    }

    let form = crate::dom::by_id::<HtmlFormElement>(document, form_id)
        .ok_or_else(|| AlbumError::Dom(format!("form #{} not found", form_id)))?;
    form.submit().map_err(|e| AlbumError::dom("form.submit", e))?;
    tracing::info!(form_id, "album deletion submitted");
    Ok(true)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_input_without_form_is_noop() {
        let document = web_sys::window().unwrap().document().unwrap();
        let input = document
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        assert!(submit_owning_form(&input).is_ok());
    }
}
