//! Root application module.
//!
//! Contains the main App component, AppContext definition, the route
//! table, and application-level setup logic following Leptos conventions.

use std::rc::Rc;

use leptos::prelude::*;
use navkit_core::{HistoryPort, MemoryHistory, Navigator, PatternError, RouteTable, info_log};

use crate::components::{Link, Router, provide_navigator};
use crate::config::{APP_NAME, FALLBACK_PATH, HISTORY_MODE, paths};
use crate::history::BrowserHistory;
use crate::pages::{Page, render_page};

// ============================================================================
// Routes
// ============================================================================

/// The application's route table.
pub fn routes() -> Result<RouteTable<Page>, PatternError> {
    RouteTable::new(Page::NotFound)
        .route(paths::HOME, Page::Home)
        .route(paths::ABOUT, Page::About)
        .route(paths::MOVIES, Page::Movies)
        .route(paths::LOGIN, Page::Login)
        .route(paths::DASHBOARD, Page::Dashboard)
        .param_route(paths::MOVIE, Page::Movie)
}

/// History port for the current environment: the browser's session
/// history when a window exists, an in-memory stack otherwise.
fn history_port() -> Rc<dyn HistoryPort> {
    match BrowserHistory::new(HISTORY_MODE) {
        Some(history) => Rc::new(history),
        None => {
            info_log!("no window; using in-memory history");
            Rc::new(MemoryHistory::new(FALLBACK_PATH))
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. Navigation state is not part of it; it
/// lives in the navigator context.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user name, if any.
    pub user: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation bar.
#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <strong>{APP_NAME}</strong>
            " "
            <Link to=paths::HOME>"Home"</Link>
            " | "
            <Link to=paths::MOVIES>"Movies"</Link>
            " | "
            <Link to=paths::ABOUT>"About"</Link>
            " | "
            <Link to=paths::DASHBOARD>"Dashboard"</Link>
        </nav>
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates the navigator over the browser history and provides it
/// - Creates and provides the global AppContext
/// - Wraps routing in an ErrorBoundary (an invalid route table lands there)
#[component]
pub fn App() -> impl IntoView {
    provide_navigator(Navigator::new(history_port()));
    provide_context(AppContext::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; font-family: monospace;">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <NavBar />
            <main>
                {routes().map(|table| view! { <Router routes=table render=render_page /> })}
            </main>
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_resolve() {
        let table = routes().unwrap();
        assert_eq!(table.resolve("/").view(), &Page::Home);
        assert_eq!(table.resolve("/about").view(), &Page::About);
        assert_eq!(table.resolve("/movies").view(), &Page::Movies);
        assert_eq!(table.resolve("/login").view(), &Page::Login);
        assert_eq!(table.resolve("/dashboard").view(), &Page::Dashboard);
        assert_eq!(table.resolve("/nowhere").view(), &Page::NotFound);
    }

    #[test]
    fn test_movie_route_binds_id() {
        let table = routes().unwrap();
        let resolution = table.resolve(&paths::movie(603));
        assert_eq!(resolution.view(), &Page::Movie);
        assert_eq!(resolution.params().and_then(|p| p.get("id")), Some("603"));
        assert_eq!(table.resolve("/movies/").view(), &Page::NotFound);
    }

    #[test]
    fn test_navigation_over_memory_history() {
        let history = Rc::new(MemoryHistory::new("/"));
        let navigator = Navigator::new(history.clone());
        let router = navkit_core::Router::mount(routes().unwrap(), navigator.bus());

        navigator.push(&paths::movie(550));
        assert_eq!(router.view(), Page::Movie);
        navigator.replace(paths::LOGIN);
        assert_eq!(router.view(), Page::Login);
        assert_eq!(history.length(), 2);
        navigator.back();
        assert_eq!(router.view(), Page::Home);
    }
}
