//! Routed views.
//!
//! The views are placeholders that prove each route mounts; their content is
//! owned by the pages themselves.

mod full_calendar;
mod not_found;
mod origin;
mod register_device;
mod show_uuid;

use leptos::prelude::*;
use serve_ad_core::View;

pub use full_calendar::FullCalendar;
pub use not_found::NotFound;
pub use origin::Origin;
pub use register_device::RegisterDevice;
pub use show_uuid::ShowUuid;

/// Render the component bound to a route.
pub fn render_view(page: View) -> AnyView {
    match page {
        View::Origin => view! { <Origin /> }.into_any(),
        View::RegisterDevice => view! { <RegisterDevice /> }.into_any(),
        View::ShowUuid => view! { <ShowUuid /> }.into_any(),
        View::FullCalendar => view! { <FullCalendar /> }.into_any(),
    }
}
