//! Error types for Serve Ad core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, mounting or navigating the application.
#[derive(Debug, Error)]
pub enum Error {
    /// A route pattern could not be parsed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two routes declare the same path.
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two routes declare the same name.
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Navigation by name referenced a route that does not exist.
    #[error("Unknown route name: {0}")]
    UnknownRoute(String),

    /// A named navigation did not supply every parameter of the pattern.
    #[error("Missing parameter '{param}' for route '{route}'")]
    MissingParam {
        /// Route name.
        route: String,
        /// Name of the missing parameter.
        param: String,
    },

    /// A browser location does not live under the configured base path.
    #[error("Path '{path}' is outside base '{base}'")]
    OutsideBase {
        /// Requested path.
        path: String,
        /// Configured base path.
        base: String,
    },

    /// The configured base path is malformed.
    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),

    /// The host page has no element matching the mount selector.
    #[error("Mount anchor not found: {0}")]
    MissingAnchor(String),

    /// The application has already been mounted.
    #[error("Application already mounted on {0}")]
    AlreadyMounted(String),

    /// A plugin was registered on an application that is already mounted.
    #[error("Cannot register plugin '{0}' after the application is mounted")]
    PluginAfterMount(String),

    /// A capability was requested that no plugin provided.
    #[error("Capability not registered: {0}")]
    MissingCapability(&'static str),

    /// The history backend rejected an operation.
    #[error("History error: {0}")]
    History(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingAnchor("#app".to_string());
        assert_eq!(err.to_string(), "Mount anchor not found: #app");
    }

    #[test]
    fn test_outside_base_display() {
        let err = Error::OutsideBase {
            path: "/show_uuid".to_string(),
            base: "/serve_ad/".to_string(),
        };
        assert!(err.to_string().contains("/show_uuid"));
        assert!(err.to_string().contains("/serve_ad/"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").expect_err("Should fail");
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
