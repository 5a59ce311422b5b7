//! Client-side router for Leptos single-page applications.
//!
//! Routing logic lives in [`navkit_core`]; this crate adds:
//! - [`BrowserHistory`] - `window.history` as a history port (path or hash URLs)
//! - [`components`] - `Router`, `Link` and `Redirect` components plus navigator context
//! - [`App`] - A demo application wired through the router

pub mod app;
pub mod components;
pub mod config;
pub mod history;
pub mod pages;
pub mod utils;

pub use app::App;
pub use history::{BrowserHistory, HistoryMode};
