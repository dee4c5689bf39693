//! Device registration page.

use leptos::prelude::*;

/// Device registration view.
#[component]

pub fn RegisterDevice() -> impl IntoView {
    view! {
        <section class="page page-register-device" data-testid="view-register-device">
            <h1 class="page-title">"Register device"</h1>
            <p class="page-subtitle">"Register this screen to start receiving content."</p>
        </section>
    }
}
