//! Application configuration.
//!
//! The configuration is compiled into the front end (the UI crate embeds a
//! JSON document), so there are no runtime files or environment variables.
//! Every field has a default, and a partial document only overrides what it
//! names.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base_path::BasePath;
use crate::error::{Error, Result};
use crate::player::PlayerOptions;
use crate::router::FallbackPolicy;

/// Default selector of the element the application mounts into.
pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

/// Default name of the top-level component.
pub const DEFAULT_ROOT_COMPONENT: &str = "App";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix every route is served under.
    pub base_path: BasePath,
    /// CSS selector of the mount anchor.
    pub mount_selector: String,
    /// Name of the top-level component, used in diagnostics.
    pub root_component: String,
    /// What happens when no route matches.
    pub not_found: FallbackPolicy,
    /// Default options of the global video player.
    pub player: PlayerOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: BasePath::default(),
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            root_component: DEFAULT_ROOT_COMPONENT.to_string(),
            not_found: FallbackPolicy::default(),
            player: PlayerOptions::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            base = %config.base_path,
            selector = %config.mount_selector,
            not_found = %config.not_found,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        let selector = self.mount_selector.trim();
        if selector.is_empty() {
            return Err(Error::Configuration(
                "mount_selector must not be empty".to_string(),
            ));
        }
        if selector != self.mount_selector {
            return Err(Error::Configuration(format!(
                "mount_selector '{}' has surrounding whitespace",
                self.mount_selector
            )));
        }
        if self.root_component.trim().is_empty() {
            return Err(Error::Configuration(
                "root_component must not be empty".to_string(),
            ));
        }
        self.player.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_path.as_string(), "/serve_ad/");
        assert_eq!(config.mount_selector, "#app");
        assert_eq!(config.not_found, FallbackPolicy::NotFoundView);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            not_found: FallbackPolicy::RedirectToDefault,
            ..Default::default()
        };

        let json = config.to_json().expect("Should serialize");
        let deserialized = AppConfig::from_json(&json).expect("Should deserialize");

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_json(r#"{"base_path": "/kiosk"}"#).expect("valid");
        assert_eq!(config.base_path.as_string(), "/kiosk/");
        assert_eq!(config.mount_selector, DEFAULT_MOUNT_SELECTOR);
        assert_eq!(AppConfig::from_json("{}").expect("valid"), AppConfig::default());
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            AppConfig::from_json(r#"{"mount_selector": ""}"#),
            Err(Error::Configuration(_))
        ));
        assert!(AppConfig::from_json(r#"{"mount_selector": " #app"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"base_path": "/a b/"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"player": {"playback_rates": []}}"#).is_err());
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(Error::Serialization(_))
        ));
    }
}
