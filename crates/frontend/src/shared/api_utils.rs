//! API utilities for frontend-backend communication
//!
//! Resolves where the order lookup service lives.

/// Compile-time override of the lookup service base URL, e.g.
/// `ORDER_API_BASE=http://localhost:8080 trunk build`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("ORDER_API_BASE");

/// Get the base URL for API requests
///
/// The page is served by the lookup service itself, so by default requests
/// go to the page origin.
///
/// # Returns
/// - `ORDER_API_BASE` if it was set at build time (trailing `/` stripped)
/// - Page origin like "http://localhost:8080" otherwise
/// - Empty string if window is not available (relative URLs)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Current `window.location.search`, empty if unavailable
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Settings of the HTTP lookup client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
}

impl LookupConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the build environment and the current page
    pub fn from_env() -> Self {
        Self::new(api_base())
    }
}
