//! Client-side navigation links.

use leptos::prelude::*;
use navkit_core::ActivationEvent;
use web_sys::MouseEvent;

use super::context::use_navigator_context;

/// Adapts a DOM click to [`ActivationEvent`].
struct Click<'a>(&'a MouseEvent);

impl ActivationEvent for Click<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn is_modified(&self) -> bool {
        let ev = self.0;
        ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key()
    }
}

/// Anchor that navigates without a page load.
///
/// Extra attributes pass through to the `<a>` element with Leptos attribute
/// spreading, e.g. `<Link to="/about" attr:class="nav">"About"</Link>`.
/// Modified clicks and `target="_blank"` are left to the browser.
#[component]
pub fn Link(
    /// Destination path.
    #[prop(into)]
    to: String,
    /// Replace the active history entry instead of pushing.
    #[prop(optional)]
    replace: bool,
    /// Browsing context (`_blank`, ...).
    #[prop(optional, into)]
    target: Option<String>,
    /// Runs on every activation with the click event, before navigation.
    #[prop(optional)]
    on_activate: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_navigator_context();

    let mut link = navkit_core::Link::new(to).replace(replace);
    if let Some(target) = &target {
        link = link.target(target.clone());
    }
    let href = ctx.with(|navigator| link.href(navigator));
    let link = StoredValue::new(link);

    let on_click = move |ev: MouseEvent| {
        let handler = |click: &Click| {
            if let Some(callback) = on_activate.as_ref() {
                callback.run(click.0.clone());
            }
        };
        link.with_value(|link| {
            ctx.with(|navigator| link.activate(&Click(&ev), navigator, Some(&handler)));
        });
    };

    view! {
        <a href=href target=target on:click=on_click>
            {children()}
        </a>
    }
}

/// Navigates to `to` (replacing the active entry) once mounted.
///
/// Used to bounce from pages that are not reachable in the current state.
#[component]
pub fn Redirect(
    /// Destination path.
    #[prop(into)]
    to: String,
) -> impl IntoView {
    let ctx = use_navigator_context();

    // Deferred to an effect so the redirect does not run mid-render.
    Effect::new(move |_| {
        ctx.with(|navigator| navigator.replace(&to));
    });
}
