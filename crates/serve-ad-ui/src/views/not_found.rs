//! Not-found view.

use leptos::prelude::*;

use crate::components::Link;

/// Rendered when no route matches the requested path.
#[component]

pub fn NotFound(
    /// The path that did not match.
    #[prop(into)]
    path: String,
) -> impl IntoView {
    view! {
        <section class="page page-not-found" data-testid="view-not-found">
            <h1 class="page-title">"Page not found"</h1>
            <p class="page-subtitle">
                "Nothing lives at " <code>{path}</code> "."
            </p>
            <Link to="/">"Back to start"</Link>
        </section>
    }
}
