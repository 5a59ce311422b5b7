//! Navigator context.
//!
//! The [`Navigator`] (and the bus it owns) is created once at the
//! application root and shared with every router and link below it.

use leptos::prelude::*;
use navkit_core::Navigator;

/// Context handle for the application's [`Navigator`].
///
/// The navigator is single-threaded (`Rc` inside), so it is kept in local
/// arena storage; the handle itself is `Copy + Send + Sync`.
#[derive(Clone, Copy)]
pub struct NavigatorContext(StoredValue<Navigator, LocalStorage>);

impl NavigatorContext {
    pub fn navigator(&self) -> Navigator {
        self.0.get_value()
    }

    /// Run `f` against the navigator without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&Navigator) -> R) -> R {
        self.0.with_value(f)
    }
}

/// Provide `navigator` to all descendants.
pub fn provide_navigator(navigator: Navigator) {
    provide_context(NavigatorContext(StoredValue::new_local(navigator)));
}

/// Get the navigator context.
///
/// # Panics
///
/// Panics if called outside a component tree that called
/// [`provide_navigator`].
pub fn use_navigator_context() -> NavigatorContext {
    use_context::<NavigatorContext>().expect("NavigatorContext must be provided")
}

/// Get the application's navigator, e.g. to navigate after a form submit.
pub fn use_navigator() -> Navigator {
    use_navigator_context().navigator()
}
