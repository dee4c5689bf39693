//! Page layout: header with route navigation and the main content area.

use leptos::prelude::*;
use serve_ad_core::View;

use super::link::Link;

/// Navigation bar with one link per routed view.
#[component]

pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar" aria-label="Main navigation">
            {View::ALL
                .into_iter()
                .map(|page| view! { <Link to=page.path() class="nav-item">{page.title()}</Link> })
                .collect_view()}
        </nav>
    }
}

/// The application shell around the routed view.
#[component]

pub fn Layout(
    /// Main content (the router outlet).
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <header class="app-header">
                <div class="logo">
                    <span class="logo-text">"Serve Ad"</span>
                </div>
                <NavBar />
            </header>
            <main class="layout-main">{children()}</main>
        </div>
    }
}
