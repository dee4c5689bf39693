//! Plugins and the capability registry.
//!
//! A [`Plugin`] installs one or more typed capabilities into the
//! application's [`Capabilities`]. The registry is handed to the view tree
//! once at mount time, so every view can reach a capability without
//! importing or configuring it itself.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};

/// A facility that can be registered application-wide.
pub trait Plugin {
    /// Unique plugin name, used to detect repeated registration.
    fn name(&self) -> &'static str;

    /// Install the plugin's capabilities.
    fn install(&self, capabilities: &mut Capabilities) -> Result<()>;
}

#[derive(Clone)]
struct Entry {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// Typed registry of capabilities, one value per type.
///
/// Cloning is cheap; values are shared.
#[derive(Clone, Default)]
pub struct Capabilities {
    entries: HashMap<TypeId, Entry>,
}

impl Capabilities {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability, replacing any previous value of the same type.
    ///
    /// Returns `true` if a value was replaced.
    pub fn provide<T: Any + Send + Sync>(&mut self, value: T) -> bool {
        let type_name = type_name::<T>();
        debug!(capability = type_name, "Providing capability");
        self.entries
            .insert(
                TypeId::of::<T>(),
                Entry {
                    type_name,
                    value: Arc::new(value),
                },
            )
            .is_some()
    }

    /// Look up a capability.
    #[must_use]
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_ref::<T>())
    }

    /// Look up a capability that must be present.
    pub fn require<T: Any + Send + Sync>(&self) -> Result<&T> {
        self.get::<T>()
            .ok_or_else(|| Error::MissingCapability(type_name::<T>()))
    }

    /// Whether a capability of type `T` is registered.
    #[must_use]
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("Capabilities")
            .field("types", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Greeting(&'static str);

    struct GreetingPlugin;

    impl Plugin for GreetingPlugin {
        fn name(&self) -> &'static str {
            "greeting"
        }

        fn install(&self, capabilities: &mut Capabilities) -> Result<()> {
            capabilities.provide(Greeting("hello"));
            Ok(())
        }
    }

    #[test]
    fn test_provide_and_get() {
        let mut caps = Capabilities::new();
        assert!(caps.is_empty());
        assert!(!caps.provide(Greeting("hi")));
        assert_eq!(caps.get::<Greeting>(), Some(&Greeting("hi")));
        assert!(caps.contains::<Greeting>());
        assert_eq!(caps.len(), 1);
    }

    #[test]
    fn test_provide_replaces() {
        let mut caps = Capabilities::new();
        caps.provide(Greeting("a"));
        assert!(caps.provide(Greeting("b")));
        assert_eq!(caps.require::<Greeting>().expect("present").0, "b");
    }

    #[test]
    fn test_require_missing() {
        let caps = Capabilities::new();
        let err = caps.require::<Greeting>().expect_err("missing");
        assert!(matches!(err, Error::MissingCapability(name) if name.ends_with("Greeting")));
    }

    #[test]
    fn test_plugin_install_and_shared_clone() {
        let mut caps = Capabilities::new();
        GreetingPlugin.install(&mut caps).expect("install");
        let cloned = caps.clone();
        assert_eq!(cloned.get::<Greeting>(), caps.get::<Greeting>());
        assert!(format!("{caps:?}").contains("Greeting"));
    }
}
