//! Router-aware link.
//!
//! Renders a `leptos_router` `<A>` whose href carries the base path, so the
//! router intercepts the click and marks the active link with `aria-current`.

use leptos::prelude::*;
use leptos_router::components::A;
use serve_ad_core::{Location, NavigationTarget};

use crate::routing::use_router;

/// A link to an application route.
#[component]
pub fn Link(
    /// Application-relative path, e.g. `/show_uuid`.
    #[prop(into)]
    to: String,
    /// Extra CSS class.
    #[prop(optional, into)]
    class: Option<String>,
    /// Link content.
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = Location::parse(&to);
    let href = router.href(&NavigationTarget::from(target.clone()));

    // A link to the page already shown replaces the entry instead of stacking a duplicate.
    let is_current = move || router.is_current(&target);

    view! {
        <A
            href=href
            attr:class=format!("link {}", class.unwrap_or_default())
            prop:replace=is_current
        >
            {children()}
        </A>
    }
}
