//! Landing page.

use leptos::prelude::*;
use serve_ad_core::View;

use crate::components::Link;

/// The default route.
#[component]

pub fn Origin() -> impl IntoView {
    view! {
        <section class="page page-origin" data-testid="view-origin">
            <h1 class="page-title">"Serve Ad"</h1>
            <p class="page-subtitle">"Choose where to go next."</p>
            <ul class="card-grid">
                {View::ALL
                    .into_iter()
                    .filter(|page| *page != View::Origin)
                    .map(|page| {
                        view! {
                            <li class="card">
                                <Link to=page.path()>{page.title()}</Link>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
