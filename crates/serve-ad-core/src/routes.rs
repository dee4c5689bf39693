//! The application's route table.

use std::fmt;

use crate::config::AppConfig;
use crate::error::Result;
use crate::route::{Route, RouteTable};
use crate::router::Router;

/// The router type used by the application.
pub type AppRouter = Router<View>;

/// Views the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page, the default route.
    Origin,
    /// Device registration page.
    RegisterDevice,
    /// UUID display page.
    ShowUuid,
    /// Playlist / calendar page.
    FullCalendar,
}

impl View {
    /// Every view, in route declaration order.
    pub const ALL: [Self; 4] = [
        Self::Origin,
        Self::RegisterDevice,
        Self::ShowUuid,
        Self::FullCalendar,
    ];

    /// The path the view is served at, relative to the base path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Origin => "/",
            Self::RegisterDevice => "/register_device",
            Self::ShowUuid => "/show_uuid",
            Self::FullCalendar => "/video_playlist",
        }
    }

    /// The symbolic route name.
    #[must_use]
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::RegisterDevice => "RegisterDevice",
            Self::ShowUuid => "ShowUUID",
            Self::FullCalendar => "FullCalendar",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Origin => "Home",
            Self::RegisterDevice => "Register device",
            Self::ShowUuid => "Device UUID",
            Self::FullCalendar => "Video playlist",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Build the static route table.
pub fn route_table() -> Result<RouteTable<View>> {
    let routes = View::ALL
        .iter()
        .map(|view| Route::new(view.path(), view.route_name(), *view))
        .collect::<Result<Vec<_>>>()?;
    RouteTable::new(routes)
}

/// Build the application router from configuration.
pub fn app_router(config: &AppConfig) -> Result<AppRouter> {
    Ok(Router::new(route_table()?, config.base_path.clone()).with_fallback(config.not_found))
}
