//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Open a URL in a new browsing context.
///
/// Returns `true` if the browser accepted the request.
pub fn open_in_new_tab(url: &str) -> bool {
    window()
        .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
        .flatten()
        .is_some()
}

/// Reload the page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
