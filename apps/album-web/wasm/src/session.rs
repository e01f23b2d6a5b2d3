//! Stateful lightbox session for pages that render the overlay themselves
//!
//! Holds navigation state in Rust; JavaScript only forwards events and
//! draws whatever display comes back.

use lightbox_core::{Command, Direction, Display, ImageSet, LightboxNavigator};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct LightboxSession {
    navigator: LightboxNavigator,
}

#[wasm_bindgen]
impl LightboxSession {
    /// Create a closed session over the given image URLs
    #[wasm_bindgen(constructor)]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            navigator: LightboxNavigator::new(ImageSet::new(images)),
        }
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.navigator.is_open()
    }

    #[wasm_bindgen(getter)]
    pub fn total(&self) -> usize {
        self.navigator.len()
    }

    /// Index of the last viewed image, undefined for an empty gallery
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current_index()
    }

    /// Open on `index`; out-of-range indices are ignored
    /// Returns {reference, position, total} or null
    #[wasm_bindgen]
    pub fn open(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.navigator.open(index);
        display_to_js(self.navigator.current_display())
    }

    /// Step by `offset` (-1 previous, +1 next) while open
    #[wasm_bindgen]
    pub fn advance(&mut self, offset: i32) -> Result<JsValue, JsValue> {
        self.advance_internal(offset);
        display_to_js(self.navigator.current_display())
    }

    #[wasm_bindgen]
    pub fn next(&mut self) -> Result<JsValue, JsValue> {
        self.advance(1)
    }

    #[wasm_bindgen]
    pub fn previous(&mut self) -> Result<JsValue, JsValue> {
        self.advance(-1)
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        self.navigator.close();
        display_to_js(self.navigator.current_display())
    }

    /// Apply a keyboard shortcut. Returns true when the key was handled.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.handle_key_internal(key)
    }

    #[wasm_bindgen(js_name = currentDisplay)]
    pub fn current_display(&self) -> Result<JsValue, JsValue> {
        display_to_js(self.navigator.current_display())
    }

    /// "position / total", or undefined for an empty gallery
    #[wasm_bindgen(js_name = counterLabel)]
    pub fn counter_label(&self) -> Option<String> {
        self.navigator
            .current_display()
            .map(|display| display.counter_label())
    }
}

impl LightboxSession {
    fn advance_internal(&mut self, offset: i32) {
        if let Some(direction) = Direction::from_offset(offset) {
            self.navigator.advance(direction);
        }
    }

    fn handle_key_internal(&mut self, key: &str) -> bool {
        if !self.navigator.is_open() {
            return false;
        }
        match Command::from_key(key) {
            Some(command) => {
                self.navigator.dispatch(command);
                true
            }
            None => false,
        }
    }
}

pub(crate) fn display_to_js(display: Option<Display>) -> Result<JsValue, JsValue> {
    match display {
        Some(display) => serde_wasm_bindgen::to_value(&display)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e))),
        None => Ok(JsValue::NULL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(images: &[&str]) -> LightboxSession {
        LightboxSession::new(images.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = session(&["a.jpg", "b.jpg"]);
        assert!(!session.is_open());
        assert_eq!(session.total(), 2);
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn test_empty_session() {
        let session = session(&[]);
        assert_eq!(session.total(), 0);
        assert_eq!(session.current_index(), None);
        assert_eq!(session.counter_label(), None);
    }

    #[test]
    fn test_advance_offsets() {
        let mut session = session(&["a.jpg", "b.jpg", "c.jpg"]);
        session.navigator.open(0);

        session.advance_internal(-1);
        assert_eq!(session.counter_label().as_deref(), Some("3 / 3"));

        session.advance_internal(0);
        assert_eq!(session.counter_label().as_deref(), Some("3 / 3"));

        session.advance_internal(1);
        assert_eq!(session.counter_label().as_deref(), Some("1 / 3"));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut session = session(&["a.jpg", "b.jpg"]);
        assert!(!session.handle_key_internal("ArrowRight"));
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn test_keys_while_open() {
        let mut session = session(&["a.jpg", "b.jpg"]);
        session.navigator.open(0);

        assert!(session.handle_key_internal("ArrowRight"));
        assert_eq!(session.current_index(), Some(1));

        assert!(!session.handle_key_internal("Tab"));
        assert!(session.is_open());

        assert!(session.handle_key_internal("Escape"));
        assert!(!session.is_open());
        assert_eq!(session.counter_label().as_deref(), Some("2 / 2"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: arbitrary key presses and offsets keep the index in range
        #[test]
        fn input_sequences_stay_in_range(
            n in 1usize..12,
            open_at in 0usize..12,
            inputs in prop::collection::vec((0usize..5, -3i32..4), 0..64)
        ) {
            const KEYS: [&str; 4] = ["ArrowLeft", "ArrowRight", "Escape", "x"];
            let images = (0..n).map(|i| format!("{}.jpg", i)).collect();
            let mut session = LightboxSession::new(images);
            session.navigator.open(open_at);
            for (kind, offset) in inputs {
                match KEYS.get(kind) {
                    Some(key) => {
                        session.handle_key_internal(key);
                    }
                    None => session.advance_internal(offset),
                }
                prop_assert!(session.current_index().unwrap() < n);
            }
        }
    }
}
