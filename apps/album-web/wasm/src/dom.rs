//! Thin wrappers over the web-sys calls the page glue repeats

use crate::error::AlbumError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

pub fn window() -> Result<Window, AlbumError> {
    web_sys::window().ok_or(AlbumError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, AlbumError> {
    window.document().ok_or(AlbumError::NoDocument)
}

/// First element matching `selector`, `None` when absent or the selector is invalid
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(_) => {
            tracing::warn!(selector, "invalid selector");
            None
        }
    }
}

/// Element by id, cast to `T`. Elements of another type count as absent.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Image elements matching `selector`, in document order. Non-image
/// matches are skipped.
pub fn collect_images(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlImageElement>, AlbumError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| AlbumError::dom("query_selector_all", e))?;

    let mut images = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(image) = nodes
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        {
            images.push(image);
        }
    }
    Ok(images)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), AlbumError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| AlbumError::dom(property, e))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_collect_images_in_document_order() {
        let window = window().unwrap();
        let document = document(&window).unwrap();
        let container = document.create_element("div").unwrap();
        container.set_id("collect-test");
        container.set_inner_html(
            r#"<img class="collect-img" src="/one.jpg"><span class="collect-img"></span><img class="collect-img" src="/two.jpg">"#,
        );
        document.body().unwrap().append_child(&container).unwrap();

        let images = collect_images(&document, ".collect-img").unwrap();
        assert_eq!(images.len(), 2);
        assert!(images[0].src().ends_with("/one.jpg"));
        assert!(images[1].src().ends_with("/two.jpg"));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_by_id_rejects_wrong_type() {
        let window = window().unwrap();
        let document = document(&window).unwrap();
        let div = document.create_element("div").unwrap();
        div.set_id("not-an-input");
        document.body().unwrap().append_child(&div).unwrap();

        assert!(by_id::<web_sys::HtmlInputElement>(&document, "not-an-input").is_none());
        assert!(by_id::<HtmlElement>(&document, "not-an-input").is_some());

        div.remove();
    }
}
