//! Route table

use serde::Serialize;

use crate::error::RouteError;
use crate::path::{normalize, segments};
use crate::pattern::PathPattern;
use crate::Result;

/// Bound parameters, in the order they appear in the pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Vec<(String, String)>> for Params {
    fn from(params: Vec<(String, String)>) -> Self {
        Self(params)
    }
}

/// Immutable pattern → handler pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<H> {
    pub pattern: PathPattern,
    pub handler: H,
}

/// A path matched against the table, alive for one dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest<H> {
    /// Normalized path as requested
    pub path: String,
    pub segments: Vec<String>,
    pub route: Route<H>,
    pub params: Params,
}

impl<H: Copy> NavigationRequest<H> {
    pub fn handler(&self) -> H {
        self.route.handler
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H: Copy + PartialEq + std::fmt::Debug> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Routes are evaluated in registration order.
    pub fn route(mut self, pattern: &str, handler: H) -> Result<Self> {
        let pattern = PathPattern::parse(pattern)?;
        if self.routes.iter().any(|r| r.pattern == pattern) {
            return Err(RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern already registered".to_string(),
            });
        }
        self.routes.push(Route { pattern, handler });
        Ok(self)
    }

    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Normalize `input` and return the first matching route
    pub fn match_path(&self, input: &str) -> Result<NavigationRequest<H>> {
        let path = normalize(input)?;
        let segments = segments(&path);

        for route in &self.routes {
            if let Some(params) = route.pattern.match_segments(segments.as_slice()) {
                tracing::debug!(
                    path = %path,
                    pattern = %route.pattern,
                    handler = ?route.handler,
                    "Matched route"
                );
                return Ok(NavigationRequest {
                    path,
                    segments,
                    route: route.clone(),
                    params: Params::from(params),
                });
            }
        }

        tracing::debug!(path = %path, "No route matched");
        Err(RouteError::NotFound(path))
    }

    /// Build the path of the first route registered for `handler` that
    /// accepts the given parameters
    pub fn reverse(&self, handler: H, params: &[(&str, &str)]) -> Result<String> {
        let mut last_err = None;
        for route in self.routes.iter().filter(|r| r.handler == handler) {
            match route.pattern.build(params) {
                Ok(path) => return Ok(path),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| RouteError::NotFound(format!("{:?}", handler))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        Item,
        List,
        Nested,
        Generic,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::new()
            .route("", Page::Home)
            .and_then(|t| t.route("items/:kind/:id", Page::Item))
            .and_then(|t| t.route("items/:kind", Page::List))
            .and_then(|t| t.route("prefs/items/:kind", Page::Nested))
            .and_then(|t| t.route("prefs/:name?", Page::Generic))
            .unwrap()
    }

    #[test]
    fn test_root() {
        let request = table().match_path("").unwrap();
        assert_eq!(request.handler(), Page::Home);
        assert!(request.params.is_empty());
        assert!(request.segments.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();

        let nested = table.match_path("prefs/items/articles").unwrap();
        assert_eq!(nested.handler(), Page::Nested);
        assert_eq!(nested.param("kind"), Some("articles"));

        let generic = table.match_path("prefs/items").unwrap();
        assert_eq!(generic.handler(), Page::Generic);
        assert_eq!(generic.param("name"), Some("items"));
    }

    #[test]
    fn test_not_found() {
        match table().match_path("nowhere/at/all") {
            Err(RouteError::NotFound(path)) => assert_eq!(path, "nowhere/at/all"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let result = RouteTable::new()
            .route("items/:kind", Page::List)
            .and_then(|t| t.route("/items/:kind/", Page::Item));
        assert!(matches!(result, Err(RouteError::InvalidPattern { .. })));
    }

    #[test]
    fn test_reverse() {
        let table = table();
        assert_eq!(
            table
                .reverse(Page::Item, &[("kind", "articles"), ("id", "new")])
                .unwrap(),
            "items/articles/new"
        );
        assert_eq!(table.reverse(Page::Generic, &[]).unwrap(), "prefs");
        assert!(table.reverse(Page::Item, &[("kind", "articles")]).is_err());
    }
}
