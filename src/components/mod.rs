//! Leptos bindings for the router.
//!
//! - [`Router`] - Renders the view for the current path
//! - [`Link`] - Anchor with client-side navigation
//! - [`Redirect`] - Replace the current entry once mounted
//! - [`provide_navigator`], [`use_navigator`] - Navigator context

mod context;
mod link;
mod router;

pub use context::{NavigatorContext, provide_navigator, use_navigator, use_navigator_context};
pub use link::{Link, Redirect};
pub use router::Router;
