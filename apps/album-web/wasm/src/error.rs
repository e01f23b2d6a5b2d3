use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document object available")]
    NoDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid page config: {0}")]
    InvalidConfig(String),
}

impl AlbumError {
    /// Wraps an exception thrown by a web-sys call
    pub fn dom(context: &str, err: JsValue) -> Self {
        let detail = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        AlbumError::Dom(format!("{}: {}", context, detail))
    }
}

impl From<AlbumError> for JsValue {
    fn from(err: AlbumError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
