//! `Serve Ad` UI - Leptos-based front end.
//!
//! This crate mounts the application shell: the router outlet, the four
//! routed views and the global video player, on top of `serve-ad-core`.
//! `leptos_router` drives the browser history; `serve-ad-core` matches routes.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// expect_context is the documented way to read required context
#![allow(clippy::expect_used)]

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod routing;
pub mod theme;
pub mod views;

pub use app::App;
pub use routing::{RouterContext, use_router};
