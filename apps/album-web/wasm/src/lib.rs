//! WASM bindings for the album detail page
//!
//! Navigation state lives in Rust (`lightbox-core`); this crate binds it to
//! the DOM and carries the small page helpers around it.
//!
//! ## Architecture
//!
//! - `AlbumPage` scans thumbnails, wires every listener and renders the
//!   lightbox from navigator transitions
//! - `LightboxSession` exposes the navigator alone for pages that draw the
//!   overlay themselves
//! - Share-link copy, upload auto-submit and delete confirmation are
//!   independent helpers mounted alongside the lightbox
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { initLogging, mountAlbumPage, LightboxSession } from './pkg/album_web_wasm.js';
//!
//! await init();
//! initLogging("debug"); // optional, before mounting
//!
//! // Full page wiring with template defaults
//! const page = mountAlbumPage();
//!
//! // Or override selectors
//! const page = mountAlbumPage({ photoSelector: ".thumb", lightboxId: "viewer" });
//!
//! // Navigator only
//! const session = new LightboxSession(urls);
//! const display = session.open(2); // { reference, position, total }
//! session.next();
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod forms;
pub mod logging;
pub mod page;
pub mod render;
pub mod session;
pub mod share;

use wasm_bindgen::prelude::*;

pub use config::AlbumPageConfig;
pub use error::AlbumError;
pub use page::AlbumPage;
pub use session::LightboxSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Install console logging at the given level ("error" .. "trace").
/// Only the first installation takes effect.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let level = logging::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    logging::init(level);
    Ok(())
}

/// Wire the album page. `config` may be omitted to use template defaults.
#[wasm_bindgen(js_name = mountAlbumPage)]
pub fn mount_album_page(config: JsValue) -> Result<AlbumPage, JsValue> {
    logging::init(tracing::Level::INFO);
    let config = AlbumPageConfig::from_js(config)?;
    Ok(AlbumPage::mount(&config)?)
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
