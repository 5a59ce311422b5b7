//! Framework-independent client-side routing.
//!
//! This crate provides:
//! - [`Route`], [`RouteTable`] - Static path table with a not-found view
//! - [`PathPattern`], [`Params`] - Optional `:param` segment matching
//! - [`HistoryPort`], [`MemoryHistory`] - Session-history facade and in-memory port
//! - [`NavigationBus`], [`Subscription`] - Navigation event fan-out
//! - [`Navigator`] - History bridge: mutate history, then notify the bus
//! - [`Router`], [`RouterState`] - Headless router that tracks the current path
//! - [`Link`] - Headless link activation logic
//!
//! Rendering is left to the host framework: views are plain values of a
//! caller-chosen type, usually an enum over the application's pages.

#[macro_use]
pub mod logging;

mod bus;
pub mod error;
mod history;
mod link;
mod navigator;
mod pattern;
mod route;
mod router;

pub use bus::{NavigationBus, NavigationEvent, NavigationKind, Subscription};
pub use error::PatternError;
pub use history::{HistoryEntry, HistoryPort, MemoryHistory, PopListener};
pub use link::{Activation, ActivationEvent, Link};
pub use navigator::Navigator;
pub use pattern::{Params, PathPattern};
pub use route::{Resolution, Route, RouteTable};
pub use router::{Router, RouterState};

#[doc(hidden)]
pub mod __private {
    #[cfg(target_arch = "wasm32")]
    pub use web_sys;
}
