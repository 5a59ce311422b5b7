//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{History, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the session history of `window`.
#[inline]
pub fn history(window: &Window) -> Option<History> {
    window.history().ok()
}

// =============================================================================
// Browser Location
// =============================================================================

/// Current `location.pathname`, or `/` if unavailable.
pub fn location_pathname(window: &Window) -> String {
    window
        .location()
        .pathname()
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Current `location.hash`, including the leading `#` when present.
pub fn location_hash(window: &Window) -> String {
    window.location().hash().unwrap_or_default()
}
