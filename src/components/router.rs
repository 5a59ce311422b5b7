//! Router component.
//!
//! Mounts a headless [`navkit_core::Router`] on the navigator's bus and
//! renders the view for the current path.
//!
//! # Architecture
//!
//! - **Bus is the source of truth**: the component never reads the URL itself
//! - **Mount = subscribe, cleanup = unsubscribe**: no listener outlives the component
//! - **Identical paths are skipped**: re-navigating to the current path does not re-render

use leptos::prelude::*;
use navkit_core::{RouteTable, RouterState};

use super::context::use_navigator_context;

/// Render the view of the route matching the current path.
///
/// `render` receives the full [`RouterState`] (view, path and any `:param`
/// bindings) and is expected to `match` on the view exhaustively.
///
/// ```ignore
/// view! {
///     <Router routes=table render=|state: RouterState<Page>| match state.view() {
///         Page::Home => view! { <HomePage /> }.into_any(),
///         Page::NotFound => view! { <NotFoundPage /> }.into_any(),
///     } />
/// }
/// ```
#[component]
pub fn Router<V, F>(routes: RouteTable<V>, render: F) -> impl IntoView
where
    V: Clone + Send + Sync + 'static,
    F: Fn(RouterState<V>) -> AnyView + Send + Sync + 'static,
{
    let ctx = use_navigator_context();
    let state = RwSignal::new(None::<RouterState<V>>);

    let router = ctx.with(|navigator| {
        navkit_core::Router::mount_with(routes, navigator.bus(), move |next| {
            state.set(Some(next.clone()));
        })
    });
    let router = StoredValue::new_local(router);

    on_cleanup(move || {
        let _ = router.try_with_value(|router| router.unmount());
    });

    move || state.get().map(&render)
}
