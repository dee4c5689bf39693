//! Device UUID page.

use leptos::prelude::*;

/// Shows the identifier of this device.
#[component]

pub fn ShowUuid() -> impl IntoView {
    view! {
        <section class="page page-show-uuid" data-testid="view-show-uuid">
            <h1 class="page-title">"Device UUID"</h1>
            <p class="page-subtitle">"The identifier this screen is registered under."</p>
        </section>
    }
}
