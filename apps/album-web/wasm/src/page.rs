//! Album detail page wiring
//!
//! `AlbumPage` scans the thumbnails once, owns the lightbox navigator and
//! keeps every event listener it registers. Dropping the page (or calling
//! `unmount`) detaches them all.
//!
//! Each helper is independent: a missing element disables that helper
//! without affecting the others.

use crate::config::AlbumPageConfig;
use crate::dom;
use crate::error::AlbumError;
use crate::forms;
use crate::render::LightboxView;
use crate::session::display_to_js;
use crate::share;
use gloo_events::{EventListener, EventListenerOptions};
use lightbox_core::{Command, Direction, ImageSet, LightboxNavigator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent, Window};

type SharedNavigator = Rc<RefCell<LightboxNavigator>>;

#[wasm_bindgen]
pub struct AlbumPage {
    navigator: SharedNavigator,
    view: Option<Rc<LightboxView>>,
    listeners: Vec<EventListener>,
}

impl AlbumPage {
    pub fn mount(config: &AlbumPageConfig) -> Result<Self, AlbumError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;

        let thumbnails = dom::collect_images(&document, &config.photo_selector)
            .unwrap_or_else(|e| {
                tracing::warn!(selector = %config.photo_selector, "no gallery: {}", e);
                Vec::new()
            });
        let images: ImageSet = thumbnails.iter().map(|img| img.src()).collect();
        let navigator = Rc::new(RefCell::new(LightboxNavigator::new(images)));

        let mut page = Self {
            navigator,
            view: None,
            listeners: Vec::new(),
        };

        page.wire_share_link(&window, &document, config);
        page.wire_file_upload(&document, config);
        page.wire_delete(&window, &document, config);
        page.wire_lightbox(&document, config, &thumbnails)?;

        tracing::info!(
            images = page.navigator.borrow().len(),
            listeners = page.listeners.len(),
            lightbox = page.view.is_some(),
            "album page mounted"
        );
        Ok(page)
    }

    fn wire_share_link(&mut self, window: &Window, document: &Document, config: &AlbumPageConfig) {
        let Some(button) = dom::query(document, &config.copy_button_selector) else {
            return;
        };

        let window = window.clone();
        let document = document.clone();
        let share_link_id = config.share_link_id.clone();
        let success = config.copy_success_message.clone();
        let failure = config.copy_failure_message.clone();

        self.listeners
            .push(EventListener::new(&button, "click", move |_event| {
                match dom::by_id::<HtmlInputElement>(&document, &share_link_id) {
                    Some(input) => share::copy_share_link(&window, &input, &success, &failure),
                    None => tracing::warn!(id = %share_link_id, "share link input not found"),
                }
            }));
    }

    fn wire_file_upload(&mut self, document: &Document, config: &AlbumPageConfig) {
        let Some(input) = dom::by_id::<HtmlInputElement>(document, &config.file_input_id) else {
            return;
        };

        let target = input.clone();
        self.listeners
            .push(EventListener::new(&input, "change", move |_event| {
                if let Err(e) = forms::submit_owning_form(&target) {
                    tracing::warn!("upload submit failed: {}", e);
                }
            }));
    }

    fn wire_delete(&mut self, window: &Window, document: &Document, config: &AlbumPageConfig) {
        let Some(button) = document.get_element_by_id(&config.delete_button_id) else {
            return;
        };

        let window = window.clone();
        let document = document.clone();
        let form_id = config.delete_form_id.clone();
        let message = config.delete_confirm_message.clone();

        self.listeners.push(EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                if let Err(e) = forms::confirm_and_submit(&window, &document, &form_id, &message) {
                    tracing::warn!("album deletion failed: {}", e);
                }
            },
        ));
    }

    fn wire_lightbox(
        &mut self,
        document: &Document,
        config: &AlbumPageConfig,
        thumbnails: &[HtmlImageElement],
    ) -> Result<(), AlbumError> {
        let Some(overlay) = dom::by_id::<HtmlElement>(document, &config.lightbox_id) else {
            tracing::debug!(id = %config.lightbox_id, "no lightbox on page");
            return Ok(());
        };
        let Some(image) = dom::by_id::<HtmlImageElement>(document, &config.lightbox_image_id)
        else {
            tracing::warn!(id = %config.lightbox_image_id, "lightbox image element missing");
            return Ok(());
        };
        let counter = document.get_element_by_id(&config.counter_id);
        let view = Rc::new(LightboxView::new(overlay, image, counter, document.body()));

        for (index, thumbnail) in thumbnails.iter().enumerate() {
            dom::set_style(thumbnail, "cursor", "pointer")?;
            self.on_click(&view, thumbnail, Command::Open { index });
        }

        let buttons = [
            (&config.close_selector, Command::Close),
            (
                &config.prev_selector,
                Command::Advance {
                    direction: Direction::Previous,
                },
            ),
            (
                &config.next_selector,
                Command::Advance {
                    direction: Direction::Next,
                },
            ),
        ];
        for (selector, command) in buttons {
            if let Some(button) = dom::query(document, selector) {
                self.on_click(&view, &button, command);
            }
        }

        // Clicks on the dimmed backdrop close; clicks on its children do not
        let backdrop: JsValue = view.overlay().clone().into();
        let navigator = Rc::clone(&self.navigator);
        let backdrop_view = Rc::clone(&view);
        self.listeners
            .push(EventListener::new(view.overlay(), "click", move |event| {
                let target = event.target().map(JsValue::from);
                if target.as_ref() == Some(&backdrop) {
                    apply(&navigator, &backdrop_view, Command::Close);
                }
            }));

        let navigator = Rc::clone(&self.navigator);
        let key_view = Rc::clone(&view);
        self.listeners
            .push(EventListener::new(document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if !navigator.borrow().is_open() {
                    return;
                }
                if let Some(command) = Command::from_key(&event.key()) {
                    apply(&navigator, &key_view, command);
                }
            }));

        self.view = Some(view);
        Ok(())
    }

    fn on_click(&mut self, view: &Rc<LightboxView>, target: &web_sys::EventTarget, command: Command) {
        let navigator = Rc::clone(&self.navigator);
        let view = Rc::clone(view);
        self.listeners.push(EventListener::new(target, "click", move |_event| {
            apply(&navigator, &view, command);
        }));
    }

    fn dispatch(&self, command: Command) {
        match &self.view {
            Some(view) => apply(&self.navigator, view, command),
            None => {
                self.navigator.borrow_mut().dispatch(command);
            }
        }
    }
}

/// Runs one command and renders its outcome. Render failures are logged,
/// never thrown into the page.
fn apply(navigator: &SharedNavigator, view: &LightboxView, command: Command) {
    let transition = navigator.borrow_mut().dispatch(command);
    if let Err(e) = view.render(&transition) {
        tracing::warn!(?command, "lightbox render failed: {}", e);
    }
}

#[wasm_bindgen]
impl AlbumPage {
    #[wasm_bindgen(getter, js_name = imageCount)]
    pub fn image_count(&self) -> usize {
        self.navigator.borrow().len()
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.navigator.borrow().is_open()
    }

    /// Open the lightbox on `index` as if its thumbnail was clicked
    #[wasm_bindgen(js_name = openAt)]
    pub fn open_at(&self, index: usize) {
        self.dispatch(Command::Open { index });
    }

    #[wasm_bindgen(js_name = closeLightbox)]
    pub fn close_lightbox(&self) {
        self.dispatch(Command::Close);
    }

    #[wasm_bindgen(js_name = currentDisplay)]
    pub fn current_display(&self) -> Result<JsValue, JsValue> {
        display_to_js(self.navigator.borrow().current_display())
    }

    /// Detach every listener registered by `mountAlbumPage`
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        let count = self.listeners.len();
        self.listeners.clear();
        tracing::debug!(count, "album page listeners removed");
    }
}
