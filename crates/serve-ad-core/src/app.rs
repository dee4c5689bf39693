//! Application bootstrap.
//!
//! An [`Application`] goes through a fixed sequence: it is created with a
//! root component, plugins are registered, then it is mounted onto a host
//! anchor exactly once. Registering a plugin after mounting, or mounting a
//! second time, is an error.

use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::player::VideoPlayerPlugin;
use crate::plugin::{Capabilities, Plugin};
use crate::routes::app_router;

/// A page that can host the application.
///
/// The UI crate implements this over the browser document.
#[cfg_attr(test, mockall::automock(type Anchor = u32;))]
pub trait MountHost {
    /// Handle to the element the application renders into.
    type Anchor;

    /// Find the element matching `selector`.
    fn find_anchor(&self, selector: &str) -> Option<Self::Anchor>;

    /// Render the application into `anchor`.
    fn render(&mut self, anchor: Self::Anchor, context: AppContext) -> Result<()>;
}

/// What the host receives when the application is mounted.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Name of the top-level component.
    pub root_component: String,
    /// Capabilities installed by plugins.
    pub capabilities: Capabilities,
}

/// Lifecycle state of an [`Application`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Created; plugins may be registered.
    Configuring,
    /// Rendered into the page.
    Mounted {
        /// Selector of the anchor it was mounted on.
        selector: String,
    },
}

/// The root application instance.
#[derive(Debug)]
pub struct Application {
    root_component: String,
    capabilities: Capabilities,
    plugins: Vec<&'static str>,
    state: AppState,
}

impl Application {
    /// Create an application around a top-level component.
    #[must_use]
    pub fn create(root_component: impl Into<String>) -> Self {
        let root_component = root_component.into();
        debug!(root = %root_component, "Application created");
        Self {
            root_component,
            capabilities: Capabilities::new(),
            plugins: Vec::new(),
            state: AppState::Configuring,
        }
    }

    /// Register a plugin.
    ///
    /// A plugin whose name is already registered is skipped. Installation is
    /// all-or-nothing: if the plugin fails, no capability it provided is kept.
    pub fn use_plugin<P: Plugin + ?Sized>(&mut self, plugin: &P) -> Result<&mut Self> {
        let name = plugin.name();
        if self.is_mounted() {
            return Err(Error::PluginAfterMount(name.to_string()));
        }
        if self.plugins.contains(&name) {
            warn!(plugin = name, "Plugin already registered, skipping");
            return Ok(self);
        }

        let mut staged = self.capabilities.clone();
        plugin.install(&mut staged)?;
        self.capabilities = staged;
        self.plugins.push(name);
        info!(plugin = name, "Plugin registered");
        Ok(self)
    }

    /// Mount the application onto the host element matching `selector`.
    pub fn mount<H: MountHost>(&mut self, host: &mut H, selector: &str) -> Result<()> {
        if let AppState::Mounted { selector: existing } = &self.state {
            return Err(Error::AlreadyMounted(existing.clone()));
        }

        let anchor = host
            .find_anchor(selector)
            .ok_or_else(|| Error::MissingAnchor(selector.to_string()))?;
        host.render(anchor, self.context())?;

        self.state = AppState::Mounted {
            selector: selector.to_string(),
        };
        info!(root = %self.root_component, selector, plugins = ?self.plugins, "Application mounted");
        Ok(())
    }

    /// The context handed to the host at mount time.
    #[must_use]
    pub fn context(&self) -> AppContext {
        AppContext {
            root_component: self.root_component.clone(),
            capabilities: self.capabilities.clone(),
        }
    }

    /// Installed capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Names of registered plugins, in registration order.
    #[must_use]
    pub fn plugins(&self) -> &[&'static str] {
        &self.plugins
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether the application has been mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        matches!(self.state, AppState::Mounted { .. })
    }
}

/// Create, configure and mount the application.
///
/// Builds the route table first, registers it as the navigation plugin,
/// registers the video player, then mounts on the configured anchor.
pub fn bootstrap<H: MountHost>(config: &AppConfig, host: &mut H) -> Result<Application> {
    config.validate()?;
    let router = app_router(config)?;

    let mut app = Application::create(config.root_component.clone());
    app.use_plugin(&router)?
        .use_plugin(&VideoPlayerPlugin::new(config.player.clone()))?;

    if let Err(e) = app.mount(host, &config.mount_selector) {
        error!(error = %e, "Application start-up aborted");
        return Err(e);
    }
    Ok(app)
}
