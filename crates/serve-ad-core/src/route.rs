//! Route patterns and the ordered route table.
//!
//! A [`RouteTable`] is an immutable, ordered list of [`Route`]s. Matching scans
//! the list in declaration order and returns the first route whose pattern
//! structurally matches the requested path.
//!
//! Pattern syntax:
//! - literal segments: `/show_uuid`
//! - named parameters: `/device/:id`
//! - a trailing catch-all: `/files/*rest`
//!
//! Trailing slashes and repeated slashes are not significant.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::location::Location;

/// One segment of a parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Param(String),
    CatchAll(String),
}

/// Parameters captured while matching a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a parameter value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a parameter value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether no parameters were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("must not contain a query or fragment"));
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut seen = HashSet::new();

        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(invalid("catch-all name is empty"));
                }
                if i + 1 != parts.len() {
                    return Err(invalid("catch-all must be the last segment"));
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Literal((*part).to_string())
            };

            if let Segment::Param(name) | Segment::CatchAll(name) = &segment
                && !seen.insert(name.clone())
            {
                return Err(invalid(&format!("parameter '{name}' declared twice")));
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern has no parameters.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Canonical form used for uniqueness checks (`/a/` and `/a` are the same path).
    fn canonical(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Param(_) => out.push(':'),
                Segment::CatchAll(_) => out.push('*'),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// Match a path, returning the captured parameters.
    #[must_use]
    pub fn matches(&self, location: &Location) -> Option<Params> {
        let mut params = Params::new();
        let mut parts = location.segments();

        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => {
                    if parts.next()? != expected.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), parts.next()?);
                }
                Segment::CatchAll(name) => {
                    let rest: Vec<&str> = parts.by_ref().collect();
                    params.insert(name.clone(), rest.join("/"));
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Build a concrete path from parameters.
    pub fn build(&self, route_name: &str, params: &Params) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            let value = match segment {
                Segment::Literal(s) => s.as_str(),
                Segment::Param(name) | Segment::CatchAll(name) => {
                    params.get(name).ok_or_else(|| Error::MissingParam {
                        route: route_name.to_string(),
                        param: name.clone(),
                    })?
                }
            };
            if value.is_empty() {
                continue;
            }
            out.push('/');
            out.push_str(value);
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A binding from a path pattern to a view component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<C> {
    /// Symbolic route name, unique within a table.
    pub name: String,
    /// Path pattern, unique within a table.
    pub pattern: RoutePattern,
    /// Opaque reference to the view rendered for this route.
    pub component: C,
}

impl<C> Route<C> {
    /// Create a route, parsing its pattern.
    pub fn new(path: &str, name: impl Into<String>, component: C) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: RoutePattern::parse(path)?,
            component,
        })
    }

    /// The route's path pattern.
    #[must_use]
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A route selected by [`RouteTable::find`].
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'a, C> {
    /// The matching route.
    pub route: &'a Route<C>,
    /// Parameters captured from the path.
    pub params: Params,
}

/// An immutable, ordered list of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
}

impl<C> RouteTable<C> {
    /// Build a table, rejecting duplicate paths or names.
    pub fn new(routes: Vec<Route<C>>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in &routes {
            if !paths.insert(route.pattern.canonical()) {
                return Err(Error::DuplicatePath(route.path().to_string()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(Error::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// Find the first route matching the location, in declaration order.
    #[must_use]
    pub fn find(&self, location: &Location) -> Option<RouteMatch<'_, C>> {
        let found = self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(location)
                .map(|params| RouteMatch { route, params })
        });
        trace!(
            path = %location.path,
            route = found.as_ref().map(|m| m.route.name.as_str()),
            "Route lookup"
        );
        found
    }

    /// Look up a route by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route<C>> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// The route that `/` resolves to, if any.
    #[must_use]
    pub fn default_route(&self) -> Option<&Route<C>> {
        self.find(&Location::new("/")).map(|m| m.route)
    }

    /// Iterate over the routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<C>> {
        self.routes.iter()
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
