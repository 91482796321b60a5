//! ==============================================================================
//! config.rs - runtime configuration
//! ==============================================================================
//!
//! purpose:
//!     where the client posts submissions and which base the short links
//!     are built on. both have compiled-in defaults; the hosting page can
//!     override them by setting globals on `window` before the wasm module
//!     loads:
//!
//! ```text
//! window.linky_endpoint = "https://staging.linky.page/v1/links";
//! window.web_base = "https://stg.lnky.to/";
//! ```
//!
//! ==============================================================================

use wasm_bindgen::JsValue;

/// default shorten endpoint
pub const DEFAULT_SUBMIT_ENDPOINT: &str = "https://api.linky.page/v1/links";

/// default base the server-assigned suffix is appended to
pub const DEFAULT_WEB_BASE: &str = "https://lnky.to/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub submit_endpoint: String,
    pub web_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submit_endpoint: DEFAULT_SUBMIT_ENDPOINT.to_string(),
            web_base: DEFAULT_WEB_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// build the config from the defaults plus any overrides the hosting
    /// page left on `window`. absent or non-string globals are ignored.
    pub fn from_window() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = window_string("linky_endpoint") {
            config.submit_endpoint = endpoint;
        }
        if let Some(base) = window_string("web_base") {
            config.web_base = base;
        }
        config
    }
}

fn window_string(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(key))
        .ok()?
        .as_string()
}
