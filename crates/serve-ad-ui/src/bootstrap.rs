//! Browser start-up.
//!
//! Loads the embedded configuration, then runs the core bootstrap against
//! the page document: the route table and the video player are registered
//! as plugins and the [`App`] is mounted into the configured anchor.

use leptos::prelude::*;
use serve_ad_core::{AppConfig, AppContext, Application, Error, MountHost, Result, bootstrap};
use wasm_bindgen::JsCast;

use crate::app::App;

/// Configuration compiled into the front end.
const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

/// Parse the embedded configuration.
pub fn load_config() -> Result<AppConfig> {
    AppConfig::from_json(EMBEDDED_CONFIG)
}

/// The host page.
pub struct DocumentHost {
    document: web_sys::Document,
}

impl DocumentHost {
    /// Bind to the current document.
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::MissingAnchor("document not available".to_string()))?;
        Ok(Self { document })
    }
}

impl MountHost for DocumentHost {
    type Anchor = web_sys::HtmlElement;

    fn find_anchor(&self, selector: &str) -> Option<web_sys::HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    }

    fn render(&mut self, anchor: web_sys::HtmlElement, context: AppContext) -> Result<()> {
        leptos::logging::log!("Mounting {} into anchor", context.root_component);
        // The application lives as long as the page.
        leptos::mount::mount_to(anchor, move || view! { <App context=context /> }).forget();
        Ok(())
    }
}

/// Create, configure and mount the application.
pub fn start() -> Result<Application> {
    let config = load_config()?;
    let mut host = DocumentHost::new()?;
    bootstrap(&config, &mut host)
}

/// Make a start-up failure visible on the page.
pub fn report_startup_failure(error: &Error) {
    leptos::logging::error!("Serve Ad failed to start: {}", error);

    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        body.set_text_content(Some(&format!("Serve Ad failed to start: {error}")));
    }
}
