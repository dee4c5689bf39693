//! Reactive router state.
//!
//! `leptos_router` owns the address bar: history entries, `popstate` and link
//! clicks. [`RouterContext`] feeds its location into the core router, which
//! stays the only route matcher, and exposes the result as a memo.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use serve_ad_core::{
    AppRouter, Location, Navigation, NavigationKind, NavigationTarget, Outlet, View,
};

/// Router state shared with every view.
#[derive(Clone)]
pub struct RouterContext {
    router: AppRouter,
    current: Memo<Navigation<View>>,
}

impl RouterContext {
    /// Track the browser location through the core router.
    ///
    /// Must be created inside a `leptos_router` `<Router>`.
    pub fn new(router: AppRouter) -> Self {
        let location = use_location();
        let current = {
            let router = router.clone();
            Memo::new(move |_| {
                let href = browser_href(
                    &location.pathname.get(),
                    &location.search.get(),
                    &location.hash.get(),
                );
                router.settle(&href)
            })
        };

        Self { router, current }
    }

    /// Rewrite the address bar when the fallback policy redirects.
    ///
    /// The memo already resolved to the default route, so the replaced entry
    /// settles on the same outlet and nothing renders twice.
    pub fn redirect_unmatched(&self) {
        let navigate = use_navigate();
        let current = self.current;
        Effect::new(move |_| {
            current.with(|nav| {
                if let NavigationKind::Redirected { from } = &nav.kind {
                    leptos::logging::warn!("No route for {}, redirecting to {}", from, nav.href);
                    navigate(
                        &nav.href,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
            });
        });
    }

    /// What the outlet shows (reactive).
    pub fn outlet(&self) -> Outlet<View> {
        self.current.with(|nav| nav.resolution.outlet())
    }

    /// Whether `target` is the location currently shown (reactive).
    pub fn is_current(&self, target: &Location) -> bool {
        self.current.with(|nav| nav.resolution.location().same_as(target))
    }

    /// The router.
    pub const fn router(&self) -> &AppRouter {
        &self.router
    }

    /// The prefixed href for a target. Unknown targets fall back to the base path.
    pub fn href(&self, target: &NavigationTarget) -> String {
        self.router.href(target).unwrap_or_else(|e| {
            leptos::logging::warn!("Cannot build link: {}", e);
            self.router.base().to_string()
        })
    }
}

/// Hook to access the router context.
///
/// # Panics
/// Panics if called outside of the application root.
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

/// Join the parts of a browser location into one URL.
///
/// The query and hash may arrive with or without their leading `?` / `#`.
pub fn browser_href(pathname: &str, search: &str, hash: &str) -> String {
    let mut href = pathname.to_string();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        href.push('?');
        href.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        href.push('#');
        href.push_str(hash);
    }
    href
}
