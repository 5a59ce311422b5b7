//! Static route table.

use crate::error::PatternError;
use crate::pattern::{Params, PathPattern};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Matcher {
    /// Verbatim string comparison.
    Exact(String),
    /// Segment-by-segment `:param` matching.
    Pattern(PathPattern),
}

/// A single `(path, view)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    matcher: Matcher,
    view: V,
}

impl<V> Route<V> {
    /// Create an exact-match route. The path is compared verbatim.
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            matcher: Matcher::Exact(path.into()),
            view,
        }
    }

    /// Create a route from a `:param` pattern such as `/movies/:id`.
    pub fn with_params(pattern: &str, view: V) -> Result<Self, PatternError> {
        Ok(Self {
            matcher: Matcher::Pattern(PathPattern::parse(pattern)?),
            view,
        })
    }

    /// The path or pattern this route was declared with.
    pub fn path(&self) -> &str {
        match &self.matcher {
            Matcher::Exact(path) => path,
            Matcher::Pattern(pattern) => pattern.as_str(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Match `path` against this route.
    pub fn matches(&self, path: &str) -> Option<Params> {
        match &self.matcher {
            Matcher::Exact(exact) => (exact == path).then(Params::new),
            Matcher::Pattern(pattern) => pattern.matches(path),
        }
    }
}

/// Outcome of resolving a path against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<V> {
    /// The first route whose path matched.
    Matched { view: V, params: Params },
    /// No route matched; carries the table's not-found view.
    NotFound { view: V },
}

impl<V> Resolution<V> {
    /// The view to render, matched or not.
    pub fn view(&self) -> &V {
        match self {
            Self::Matched { view, .. } | Self::NotFound { view } => view,
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Self::Matched { params, .. } => Some(params),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// Ordered route table with a designated not-found view.
///
/// Routes are tried in insertion order and the first match wins. Duplicate
/// paths are not rejected; later duplicates are simply unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    not_found: V,
}

impl<V: Clone> RouteTable<V> {
    pub fn new(not_found: V) -> Self {
        Self {
            routes: Vec::new(),
            not_found,
        }
    }

    /// Append an exact-match route.
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.routes.push(Route::new(path, view));
        self
    }

    /// Append a `:param` route.
    pub fn param_route(mut self, pattern: &str, view: V) -> Result<Self, PatternError> {
        self.routes.push(Route::with_params(pattern, view)?);
        Ok(self)
    }

    /// Append an already-built route.
    pub fn push(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self
    }

    /// Resolve `path` to the view of the first matching route, or the
    /// not-found view.
    pub fn resolve(&self, path: &str) -> Resolution<V> {
        self.routes
            .iter()
            .find_map(|route| {
                route.matches(path).map(|params| Resolution::Matched {
                    view: route.view.clone(),
                    params,
                })
            })
            .unwrap_or_else(|| Resolution::NotFound {
                view: self.not_found.clone(),
            })
    }

    pub fn not_found(&self) -> &V {
        &self.not_found
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        About,
        Movie,
        Missing,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::new(Page::Missing)
            .route("/", Page::Home)
            .route("/about", Page::About)
            .param_route("/movies/:id", Page::Movie)
            .unwrap()
    }

    #[test]
    fn test_resolve_exact() {
        let table = table();
        assert_eq!(table.resolve("/").view(), &Page::Home);
        assert_eq!(table.resolve("/about").view(), &Page::About);
    }

    #[test]
    fn test_resolve_not_found() {
        let table = table();
        let resolution = table.resolve("/missing");
        assert_eq!(
            resolution,
            Resolution::NotFound {
                view: Page::Missing
            }
        );
        assert!(!resolution.is_matched());
        assert!(resolution.params().is_none());
    }

    #[test]
    fn test_exact_match_is_verbatim() {
        let table = table();
        assert_eq!(table.resolve("/about/").view(), &Page::Missing);
        assert_eq!(table.resolve("/About").view(), &Page::Missing);
        assert_eq!(table.resolve("/about?x=1").view(), &Page::Missing);
    }

    #[test]
    fn test_resolve_params() {
        let resolution = table().resolve("/movies/603");
        assert_eq!(resolution.view(), &Page::Movie);
        assert_eq!(resolution.params().and_then(|p| p.get("id")), Some("603"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(Page::Missing)
            .route("/dup", Page::Home)
            .route("/dup", Page::About);
        assert_eq!(table.resolve("/dup").view(), &Page::Home);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_exact_route_shadows_param_route() {
        let table = RouteTable::new(Page::Missing)
            .route("/movies/new", Page::Home)
            .param_route("/movies/:id", Page::Movie)
            .unwrap();
        assert_eq!(table.resolve("/movies/new").view(), &Page::Home);
        assert_eq!(table.resolve("/movies/1").view(), &Page::Movie);
    }

    #[test]
    fn test_invalid_param_route() {
        let result = RouteTable::new(Page::Missing).param_route("/movies/:", Page::Movie);
        assert!(result.is_err());
    }

    #[test]
    fn test_route_path() {
        let table = table();
        let paths: Vec<_> = table.routes().iter().map(Route::path).collect();
        assert_eq!(paths, vec!["/", "/about", "/movies/:id"]);
        assert_eq!(table.not_found(), &Page::Missing);
    }
}
