//! Browser and URL helpers.
//!
//! Provides:
//! - [`dom`] - Window, history and location access
//! - [`hash_to_path`], [`path_to_hash`] - Hash-mode path encoding

pub mod dom;
mod url;

pub use url::{hash_to_path, path_to_hash};
