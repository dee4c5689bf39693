//! `Serve Ad` Core Library
//!
//! Platform-neutral logic of the `Serve Ad` front end:
//! - Ordered route table with first-match resolution
//! - Base path handling for the `/serve_ad/` mount prefix
//! - History-driven navigation with a configurable not-found policy
//! - Plugin registration and a typed capability registry
//! - The video player plugin
//! - Application bootstrap (create, register plugins, mount once)
//!
//! Everything here compiles natively, so routing and bootstrap behavior are
//! tested without a browser. The UI crate supplies the browser [`MountHost`]
//! and feeds the address bar into [`Router::settle`].
//!
//! ```rust,ignore
//! use serve_ad_core::{AppConfig, MemoryHistory, app_router};
//!
//! let router = app_router(&AppConfig::default())?;
//! let mut history = MemoryHistory::new("/serve_ad/");
//! let nav = router.push(&mut history, "/show_uuid")?;
//! assert_eq!(nav.href, "/serve_ad/show_uuid");
//! ```

pub mod app;
pub mod base_path;
pub mod config;
pub mod error;
pub mod history;
pub mod location;
pub mod player;
pub mod plugin;
pub mod route;
pub mod router;
pub mod routes;

pub use app::{AppContext, AppState, Application, MountHost, bootstrap};
pub use base_path::{BasePath, DEFAULT_BASE_PATH};
pub use config::{AppConfig, DEFAULT_MOUNT_SELECTOR, DEFAULT_ROOT_COMPONENT};
pub use error::{Error, Result};
pub use history::{History, MemoryHistory};
pub use location::Location;
pub use player::{DEFAULT_PLAYBACK_RATES, PlayerOptions, Preload, VideoPlayerPlugin, VideoSource};
pub use plugin::{Capabilities, Plugin};
pub use route::{Params, Route, RouteMatch, RoutePattern, RouteTable};
pub use router::{
    FallbackPolicy, MatchedRoute, Navigation, NavigationKind, NavigationMode, NavigationTarget,
    NotFoundReason, Outlet, Resolution, Router,
};
pub use routes::{AppRouter, View, app_router, route_table};
