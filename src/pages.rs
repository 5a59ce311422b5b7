//! Demo pages.
//!
//! [`Page`] is the router's view type: one variant per screen, rendered by
//! an exhaustive `match` in [`render_page`].

use leptos::prelude::*;
use navkit_core::RouterState;

use crate::app::AppContext;
use crate::components::{Link, Redirect, use_navigator};
use crate::config::paths;

/// Every screen the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Movies,
    Movie,
    Login,
    Dashboard,
    NotFound,
}

/// Sample catalogue: (id, title, year).
const MOVIES: &[(u32, &str, u16)] = &[
    (550, "Fight Club", 1999),
    (603, "The Matrix", 1999),
    (13, "Forrest Gump", 1994),
    (680, "Pulp Fiction", 1994),
];

/// Look up a movie by its path parameter.
fn find_movie(id: &str) -> Option<(u32, &'static str, u16)> {
    let id: u32 = id.parse().ok()?;
    MOVIES.iter().copied().find(|(movie_id, _, _)| *movie_id == id)
}

/// Render the view selected by the router.
pub fn render_page(state: RouterState<Page>) -> AnyView {
    match state.view() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Movies => view! { <MoviesPage /> }.into_any(),
        Page::Movie => {
            let id = state
                .params()
                .and_then(|p| p.get("id"))
                .unwrap_or_default()
                .to_string();
            view! { <MoviePage id=id /> }.into_any()
        }
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage path=state.path.clone() /> }.into_any(),
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section>
            <h1>"Home"</h1>
            <p>"Pick a page from the navigation bar."</p>
        </section>
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <section>
            <h1>"About"</h1>
            <p>"Client-side routing over the History API, without page reloads."</p>
        </section>
    }
}

#[component]
fn MoviesPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Movies"</h1>
            <ul>
                {MOVIES
                    .iter()
                    .map(|(id, title, year)| {
                        view! {
                            <li>
                                <Link to=paths::movie(*id)>{*title}</Link>
                                {format!(" ({})", year)}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
fn MoviePage(id: String) -> impl IntoView {
    match find_movie(&id) {
        Some((_, title, year)) => view! {
            <section>
                <h1>{title}</h1>
                <p>{format!("Released {}", year)}</p>
                <Link to=paths::MOVIES>"Back to movies"</Link>
            </section>
        }
        .into_any(),
        None => view! {
            <section>
                <h1>"Unknown movie"</h1>
                <p>{format!("No movie with id '{}'.", id)}</p>
                <Link to=paths::MOVIES replace=true>"Back to movies"</Link>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = StoredValue::new_local(use_navigator());

    let sign_in = move |_| {
        ctx.user.set(Some("guest".to_string()));
        // Replace so "back" does not return to the login form.
        navigator.with_value(|nav| nav.navigate(paths::DASHBOARD, true));
    };

    view! {
        <section>
            <h1>"Sign in"</h1>
            <button on:click=sign_in>"Continue as guest"</button>
        </section>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = StoredValue::new_local(use_navigator());

    // Leave the page before clearing the user, otherwise the guard below
    // redirects to the login page first.
    let sign_out = move |_| {
        navigator.with_value(|nav| nav.push(paths::HOME));
        ctx.user.set(None);
    };

    move || match ctx.user.get() {
        Some(name) => view! {
            <section>
                <h1>"Dashboard"</h1>
                <p>{format!("Signed in as {}.", name)}</p>
                <button on:click=sign_out>"Sign out"</button>
            </section>
        }
        .into_any(),
        None => view! { <Redirect to=paths::LOGIN /> }.into_any(),
    }
}

#[component]
fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <section>
            <h1>"Not found"</h1>
            <p>{format!("Nothing lives at '{}'.", path)}</p>
            <Link to=paths::HOME>"Go home"</Link>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_movie() {
        assert_eq!(find_movie("603"), Some((603, "The Matrix", 1999)));
        assert_eq!(find_movie("1"), None);
        assert_eq!(find_movie("abc"), None);
        assert_eq!(find_movie(""), None);
    }

    #[test]
    fn test_movie_ids_are_unique() {
        for (i, (a, _, _)) in MOVIES.iter().enumerate() {
            assert!(MOVIES[i + 1..].iter().all(|(b, _, _)| a != b));
        }
    }
}
