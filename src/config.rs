//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::history::HistoryMode;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navigation bar.
pub const APP_NAME: &str = "navkit";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Routing Configuration
// =============================================================================

/// URL layout used by the browser history port.
///
/// `Hash` keeps every route under `index.html`, so the app can be served
/// from a static host without rewrite rules.
pub const HISTORY_MODE: HistoryMode = HistoryMode::Hash;

/// Path used when no browser history is available.
pub const FALLBACK_PATH: &str = "/";

/// Route paths.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const MOVIES: &str = "/movies";
    /// Movie detail, `:id` is the movie id.
    pub const MOVIE: &str = "/movies/:id";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";

    /// Concrete path for a movie detail page.
    pub fn movie(id: u32) -> String {
        format!("{}/{}", MOVIES, id)
    }
}
