//! Album page configuration
//!
//! Every selector, element id and user-facing message the page glue
//! relies on. Defaults match the album detail template; a page can
//! override any subset by passing a plain JS object to `mountAlbumPage`.

use crate::error::AlbumError;
use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AlbumPageConfig {
    /// Thumbnails whose `src` make up the gallery, in document order
    pub photo_selector: String,
    pub lightbox_id: String,
    pub lightbox_image_id: String,
    pub counter_id: String,
    pub close_selector: String,
    pub prev_selector: String,
    pub next_selector: String,
    pub copy_button_selector: String,
    /// Input holding the share URL
    pub share_link_id: String,
    /// File input that submits its form as soon as files are picked
    pub file_input_id: String,
    pub delete_button_id: String,
    pub delete_form_id: String,
    pub copy_success_message: String,
    pub copy_failure_message: String,
    pub delete_confirm_message: String,
}

impl Default for AlbumPageConfig {
    fn default() -> Self {
        Self {
            photo_selector: ".photo-img".to_string(),
            lightbox_id: "lightbox".to_string(),
            lightbox_image_id: "lightbox-img".to_string(),
            counter_id: "lightbox-counter".to_string(),
            close_selector: ".lightbox-close".to_string(),
            prev_selector: ".lightbox-prev".to_string(),
            next_selector: ".lightbox-next".to_string(),
            copy_button_selector: ".btn-copy".to_string(),
            share_link_id: "shareLink".to_string(),
            file_input_id: "file-upload".to_string(),
            delete_button_id: "btn-delete-album".to_string(),
            delete_form_id: "delete-album-form".to_string(),
            copy_success_message: "Ссылка скопирована в буфер обмена!".to_string(),
            copy_failure_message: "Ошибка копирования:".to_string(),
            delete_confirm_message:
                "Вы уверены, что хотите удалить этот альбом? Это действие нельзя отменить."
                    .to_string(),
        }
    }
}

impl AlbumPageConfig {
    /// Reads a config from a JS object. `undefined` and `null` give the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, AlbumError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| AlbumError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, AlbumError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AlbumError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the thumbnail selector
    pub fn with_photo_selector(mut self, selector: &str) -> Self {
        self.photo_selector = selector.to_string();
        self
    }

    /// Set the overlay, image and counter element ids
    pub fn with_lightbox_ids(mut self, lightbox: &str, image: &str, counter: &str) -> Self {
        self.lightbox_id = lightbox.to_string();
        self.lightbox_image_id = image.to_string();
        self.counter_id = counter.to_string();
        self
    }

    /// Set the messages shown by the share and delete helpers
    pub fn with_messages(mut self, copy_success: &str, delete_confirm: &str) -> Self {
        self.copy_success_message = copy_success.to_string();
        self.delete_confirm_message = delete_confirm.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), AlbumError> {
        let required = [
            ("photoSelector", &self.photo_selector),
            ("lightboxId", &self.lightbox_id),
            ("lightboxImageId", &self.lightbox_image_id),
            ("counterId", &self.counter_id),
            ("closeSelector", &self.close_selector),
            ("prevSelector", &self.prev_selector),
            ("nextSelector", &self.next_selector),
            ("copyButtonSelector", &self.copy_button_selector),
            ("shareLinkId", &self.share_link_id),
            ("fileInputId", &self.file_input_id),
            ("deleteButtonId", &self.delete_button_id),
            ("deleteFormId", &self.delete_form_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AlbumError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}
