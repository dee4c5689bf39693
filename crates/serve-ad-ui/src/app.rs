//! Main application component.

use leptos::prelude::*;
use leptos_router::components::Router;
use serve_ad_core::{AppContext, AppRouter, Outlet, PlayerOptions};

use crate::components::Layout;
use crate::routing::{RouterContext, use_router};
use crate::theme::generate_css_variables;
use crate::views::{NotFound, render_view};

/// Root component, rendered into the mount anchor.
///
/// Capabilities installed by plugins are provided as reactive context here,
/// which is how every view reaches the router and the player options.
#[component]

pub fn App(
    /// What the bootstrap handed to the host.
    context: AppContext,
) -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();
    let AppContext {
        root_component,
        capabilities,
    } = context;

    let router = match capabilities.require::<AppRouter>() {
        Ok(router) => router.clone(),
        Err(e) => {
            leptos::logging::error!("Cannot start router: {}", e);
            return view! { <StartupError message=e.to_string() /> }.into_any();
        }
    };

    if let Some(options) = capabilities.get::<PlayerOptions>() {
        provide_context(options.clone());
    }
    provide_context(capabilities);

    let base = router.base().prefix().to_string();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <div class="app-root" data-root-component=root_component>
            <Router base=base>
                <RoutedShell router=router />
            </Router>
        </div>
    }
    .into_any()
}

/// Layout and outlet, inside the browser router.
#[component]
fn RoutedShell(router: AppRouter) -> impl IntoView {
    let router_ctx = RouterContext::new(router);
    router_ctx.redirect_unmatched();
    provide_context(router_ctx);

    view! {
        <Layout>
            <RouterView />
        </Layout>
    }
}

/// Outlet rendering the view of the current route.
///
/// Only a change of route remounts the view; query or hash changes keep it.
#[component]
pub fn RouterView() -> impl IntoView {
    let router = use_router();
    let outlet = Memo::new(move |_| router.outlet());

    move || match outlet.get() {
        Outlet::Route { component, .. } => render_view(component),
        Outlet::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    }
}

/// Shown instead of the application when start-up went wrong.
#[component]
pub fn StartupError(
    /// Error message.
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="startup-error" role="alert" data-testid="startup-error">
            <h1>"Serve Ad failed to start"</h1>
            <pre>{message}</pre>
        </div>
    }
}
