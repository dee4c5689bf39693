//! Client-side router.
//!
//! The [`Router`] combines an immutable [`RouteTable`], the application's
//! [`BasePath`] and a [`FallbackPolicy`]. It resolves locations to routes,
//! generates prefixed links, and drives a [`History`] backend when navigating.
//!
//! Every navigation performs at most one history write and yields exactly one
//! [`Resolution`], including when the fallback policy kicks in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::base_path::BasePath;
use crate::error::{Error, Result};
use crate::history::History;
use crate::location::Location;
use crate::plugin::{Capabilities, Plugin};
use crate::route::{Params, RouteTable};

/// What to do when no route matches a navigation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Keep the requested URL and render the not-found view.
    #[default]
    NotFoundView,
    /// Replace the requested URL with the default (`/`) route.
    RedirectToDefault,
}

impl std::fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFoundView => write!(f, "not-found view"),
            Self::RedirectToDefault => write!(f, "redirect to default"),
        }
    }
}

/// Where a navigation should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// An application-relative location (no base path).
    Path(Location),
    /// A route by name, with the parameters its pattern needs.
    Named {
        /// Route name.
        name: String,
        /// Pattern parameters.
        params: Params,
    },
}

impl NavigationTarget {
    /// Target a route by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: Params::new(),
        }
    }

    /// Add a parameter to a named target. Path targets are returned unchanged.
    #[must_use]
    pub fn with_param(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            Self::Named { name, params } => Self::Named {
                name,
                params: params.with(key, value),
            },
            path @ Self::Path(_) => path,
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(raw: &str) -> Self {
        Self::Path(Location::parse(raw))
    }
}

impl From<String> for NavigationTarget {
    fn from(raw: String) -> Self {
        Self::Path(Location::parse(&raw))
    }
}

impl From<Location> for NavigationTarget {
    fn from(location: Location) -> Self {
        Self::Path(location)
    }
}

/// Whether a navigation writes a new history entry or replaces the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Add a history entry.
    Push,
    /// Overwrite the current history entry.
    Replace,
}

/// A successfully matched route, owned so it can be stored in reactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute<C> {
    /// Route name.
    pub name: String,
    /// The pattern that matched.
    pub pattern: String,
    /// The view bound to the route.
    pub component: C,
    /// Captured parameters.
    pub params: Params,
    /// Application-relative location that was matched.
    pub location: Location,
}

/// Why a location did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No route pattern matched the path.
    NoMatch,
    /// The browser location is not under the base path.
    OutsideBase,
}

/// What an outlet shows for a resolution.
///
/// Two resolutions with the same outlet keep the mounted view; only the
/// query or hash differs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outlet<C> {
    /// A matched route's component.
    Route {
        /// Route name.
        name: String,
        /// The view bound to the route.
        component: C,
    },
    /// The not-found view for a path.
    NotFound(String),
}

/// The result of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<C> {
    /// A route matched.
    Matched(MatchedRoute<C>),
    /// Nothing matched.
    NotFound {
        /// The location that failed to resolve.
        location: Location,
        /// Why.
        reason: NotFoundReason,
    },
}

impl<C> Resolution<C> {
    /// Name of the matched route, if any.
    #[must_use]
    pub fn route_name(&self) -> Option<&str> {
        match self {
            Self::Matched(m) => Some(&m.name),
            Self::NotFound { .. } => None,
        }
    }

    /// The matched route's component, if any.
    #[must_use]
    pub const fn component(&self) -> Option<&C> {
        match self {
            Self::Matched(m) => Some(&m.component),
            Self::NotFound { .. } => None,
        }
    }

    /// Whether nothing matched.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The location this resolution refers to.
    #[must_use]
    pub const fn location(&self) -> &Location {
        match self {
            Self::Matched(m) => &m.location,
            Self::NotFound { location, .. } => location,
        }
    }
}

impl<C: Clone> Resolution<C> {
    /// What the outlet renders for this resolution.
    #[must_use]
    pub fn outlet(&self) -> Outlet<C> {
        match self {
            Self::Matched(m) => Outlet::Route {
                name: m.name.clone(),
                component: m.component.clone(),
            },
            Self::NotFound { location, .. } => Outlet::NotFound(location.path.clone()),
        }
    }
}

/// How a navigation touched the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationKind {
    /// A new entry was pushed.
    Pushed,
    /// The current entry was replaced.
    Replaced,
    /// No route matched and the fallback redirected to the default route.
    Redirected {
        /// The location that did not match.
        from: Location,
    },
    /// The target is already the current location; nothing was written.
    Duplicate,
    /// Resolved from the current history location without writing.
    Synced,
}

/// The outcome of a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<C> {
    /// What the router resolved.
    pub resolution: Resolution<C>,
    /// The URL now shown in the address bar.
    pub href: String,
    /// How history was affected.
    pub kind: NavigationKind,
    changes_view: bool,
}

impl<C> Navigation<C> {
    /// Whether the outlet has to mount a different view.
    ///
    /// False for duplicates and for navigations that stay on the same route
    /// (query or hash changes). Resolutions made without a previous location
    /// (initial load, back/forward) always report a change.
    #[must_use]
    pub const fn changes_view(&self) -> bool {
        self.changes_view
    }
}

/// The application router.
#[derive(Debug)]
pub struct Router<C> {
    table: Arc<RouteTable<C>>,
    base: BasePath,
    fallback: FallbackPolicy,
}

impl<C> Clone for Router<C> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            base: self.base.clone(),
            fallback: self.fallback,
        }
    }
}

impl<C: Clone + PartialEq> Router<C> {
    /// Create a router over a table and base path, with the default fallback policy.
    #[must_use]
    pub fn new(table: RouteTable<C>, base: BasePath) -> Self {
        Self {
            table: Arc::new(table),
            base,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Set the fallback policy.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// The route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    /// The base path.
    #[must_use]
    pub const fn base(&self) -> &BasePath {
        &self.base
    }

    /// Resolve an application-relative location.
    #[must_use]
    pub fn resolve(&self, location: &Location) -> Resolution<C> {
        match self.table.find(location) {
            Some(found) => Resolution::Matched(MatchedRoute {
                name: found.route.name.clone(),
                pattern: found.route.path().to_string(),
                component: found.route.component.clone(),
                params: found.params,
                location: location.clone(),
            }),
            None => Resolution::NotFound {
                location: location.clone(),
                reason: NotFoundReason::NoMatch,
            },
        }
    }

    /// Resolve a full browser URL, which must carry the base path.
    #[must_use]
    pub fn resolve_href(&self, href: &str) -> Resolution<C> {
        let browser = Location::parse(href);
        match self.base.strip(&browser) {
            Ok(location) => self.resolve(&location),
            Err(_) => Resolution::NotFound {
                location: browser,
                reason: NotFoundReason::OutsideBase,
            },
        }
    }

    /// The application-relative location a target points to.
    pub fn location_for(&self, target: &NavigationTarget) -> Result<Location> {
        match target {
            NavigationTarget::Path(location) => Ok(location.clone()),
            NavigationTarget::Named { name, params } => {
                let route = self
                    .table
                    .by_name(name)
                    .ok_or_else(|| Error::UnknownRoute(name.clone()))?;
                Ok(Location::new(route.pattern.build(name, params)?))
            }
        }
    }

    /// The prefixed href for a target, suitable for an `<a href>`.
    pub fn href(&self, target: &NavigationTarget) -> Result<String> {
        Ok(self.base.href(&self.location_for(target)?))
    }

    /// Navigate, pushing a history entry.
    pub fn push(
        &self,
        history: &mut dyn History,
        target: impl Into<NavigationTarget>,
    ) -> Result<Navigation<C>> {
        self.navigate(history, target.into(), NavigationMode::Push)
    }

    /// Navigate, replacing the current history entry.
    pub fn replace(
        &self,
        history: &mut dyn History,
        target: impl Into<NavigationTarget>,
    ) -> Result<Navigation<C>> {
        self.navigate(history, target.into(), NavigationMode::Replace)
    }

    /// Navigate to a target.
    pub fn navigate(
        &self,
        history: &mut dyn History,
        target: NavigationTarget,
        mode: NavigationMode,
    ) -> Result<Navigation<C>> {
        let requested = self.location_for(&target)?;
        let (resolution, redirected_from) = self.apply_fallback(self.resolve(&requested));
        let href = self.base.href(resolution.location());

        let current = self
            .base
            .strip(&Location::parse(&history.location()))
            .ok();
        if current
            .as_ref()
            .is_some_and(|current| current.same_as(resolution.location()))
        {
            debug!(%href, "Navigation to current location ignored");
            return Ok(Navigation {
                resolution,
                href,
                kind: NavigationKind::Duplicate,
                changes_view: false,
            });
        }
        let changes_view = current
            .is_none_or(|current| self.resolve(&current).outlet() != resolution.outlet());

        match mode {
            NavigationMode::Push => history.push(&href)?,
            NavigationMode::Replace => history.replace(&href)?,
        }

        let kind = match (redirected_from, mode) {
            (Some(from), _) => NavigationKind::Redirected { from },
            (None, NavigationMode::Push) => NavigationKind::Pushed,
            (None, NavigationMode::Replace) => NavigationKind::Replaced,
        };
        info!(
            %href,
            route = resolution.route_name().unwrap_or("<not found>"),
            "Navigated"
        );

        Ok(Navigation {
            resolution,
            href,
            kind,
            changes_view,
        })
    }

    /// Resolve a browser URL the address bar already shows.
    ///
    /// Nothing is written. When the fallback policy redirects, the returned
    /// navigation is [`NavigationKind::Redirected`] and its `href` is the URL
    /// that must replace the current entry.
    #[must_use]
    pub fn settle(&self, current: &str) -> Navigation<C> {
        let browser = Location::parse(current);

        let location = match self.base.strip(&browser) {
            Ok(location) => location,
            Err(_) => {
                warn!(href = %current, base = %self.base, "Location outside base path");
                return Navigation {
                    resolution: Resolution::NotFound {
                        location: browser,
                        reason: NotFoundReason::OutsideBase,
                    },
                    href: current.to_string(),
                    kind: NavigationKind::Synced,
                    changes_view: true,
                };
            }
        };

        let (resolution, redirected_from) = self.apply_fallback(self.resolve(&location));
        match redirected_from {
            Some(from) => Navigation {
                href: self.base.href(resolution.location()),
                resolution,
                kind: NavigationKind::Redirected { from },
                changes_view: true,
            },
            None => {
                debug!(href = %current, route = resolution.route_name(), "Settled on location");
                Navigation {
                    resolution,
                    href: current.to_string(),
                    kind: NavigationKind::Synced,
                    changes_view: true,
                }
            }
        }
    }

    /// Resolve the history's current location.
    ///
    /// Used on initial load and after the browser moved through its history
    /// (back/forward). Only a redirect fallback writes to history.
    pub fn sync(&self, history: &mut dyn History) -> Result<Navigation<C>> {
        let navigation = self.settle(&history.location());
        if matches!(navigation.kind, NavigationKind::Redirected { .. }) {
            history.replace(&navigation.href)?;
        }
        Ok(navigation)
    }

    /// Apply the fallback policy to an unmatched resolution.
    ///
    /// Returns the resolution to render and, when redirected, the location
    /// that failed to match.
    fn apply_fallback(&self, resolution: Resolution<C>) -> (Resolution<C>, Option<Location>) {
        let (location, reason) = match resolution {
            Resolution::NotFound { location, reason } => (location, reason),
            matched @ Resolution::Matched(_) => return (matched, None),
        };

        if self.fallback == FallbackPolicy::RedirectToDefault {
            let root = Location::new("/");
            if let Resolution::Matched(default) = self.resolve(&root) {
                warn!(path = %location, to = %default.name, "No route matched, redirecting");
                return (Resolution::Matched(default), Some(location));
            }
        }

        warn!(path = %location, "No route matched");
        (Resolution::NotFound { location, reason }, None)
    }
}

/// Installing the router makes it available to every view as a capability.
impl<C: Clone + Send + Sync + 'static> Plugin for Router<C> {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(&self, capabilities: &mut Capabilities) -> Result<()> {
        info!(
            routes = self.table.len(),
            base = %self.base,
            fallback = %self.fallback,
            "Installing router"
        );
        capabilities.provide(self.clone());
        Ok(())
    }
}
