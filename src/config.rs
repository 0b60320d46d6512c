//! API base URL configuration.
//!
//! DESIGN
//! ======
//! The base URL is an explicit value owned by whoever mounts the app (the
//! `App` root provides it as context, the CLI builds it from flags) instead
//! of a process-wide global. No validation happens here; a malformed URL
//! only surfaces when a request is attempted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when no override is supplied.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Name of the `window` property the host page may set before mount.
#[cfg(feature = "csr")]
const OVERRIDE_GLOBAL: &str = "API_BASE_URL";

/// Connection settings for the check backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Build a config from an optional externally supplied base URL.
    pub fn from_override(base_url: Option<String>) -> Self {
        base_url.map_or_else(Self::default, |base_url| Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the base URL for every request issued after this call.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Full URL for an endpoint path. The path is appended verbatim.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

/// Read the base URL override from `window.API_BASE_URL`.
///
/// Returns `None` outside the browser or when the global is unset or not a
/// string.
pub fn read_override() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(OVERRIDE_GLOBAL)).ok()?;
        value.as_string()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
