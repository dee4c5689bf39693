//! Base path handling.
//!
//! Every route lives under a fixed prefix (`/serve_ad/` by default). The
//! [`BasePath`] strips that prefix from browser locations before matching and
//! prepends it to every generated link.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::location::Location;

/// Default mount prefix of the application.
pub const DEFAULT_BASE_PATH: &str = "/serve_ad/";

/// A validated, normalized base path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BasePath {
    /// Prefix without trailing slash; empty for the site root.
    prefix: String,
}

impl BasePath {
    /// Validate and normalize a base path.
    ///
    /// `/serve_ad`, `/serve_ad/` and `serve_ad` all normalize to `/serve_ad/`.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidBasePath("base path is empty".to_string()));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| matches!(c, '?' | '#') || c.is_whitespace())
        {
            return Err(Error::InvalidBasePath(format!(
                "'{raw}' contains forbidden character '{c}'"
            )));
        }
        if trimmed.contains("//") {
            return Err(Error::InvalidBasePath(format!(
                "'{raw}' contains an empty segment"
            )));
        }

        let prefix = trimmed.trim_matches('/');
        let prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("/{prefix}")
        };

        Ok(Self { prefix })
    }

    /// The site root (`/`).
    #[must_use]
    pub const fn root() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    /// The base path in its canonical form, with leading and trailing slash.
    #[must_use]
    pub fn as_string(&self) -> String {
        format!("{}/", self.prefix)
    }

    /// The prefix without trailing slash (`/serve_ad`), empty for the site root.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Convert a browser location into an application location.
    ///
    /// Fails with [`Error::OutsideBase`] when the location is not under the prefix.
    pub fn strip(&self, browser: &Location) -> Result<Location> {
        if self.prefix.is_empty() {
            return Ok(browser.clone());
        }

        let path = browser.path.as_str();
        let rest = if path == self.prefix {
            Some("/")
        } else {
            path.strip_prefix(self.prefix.as_str())
                .filter(|rest| rest.starts_with('/'))
        };

        match rest {
            Some(rest) => Ok(browser.with_path(rest)),
            None => Err(Error::OutsideBase {
                path: path.to_string(),
                base: self.as_string(),
            }),
        }
    }

    /// Convert an application location into the href the browser should show.
    #[must_use]
    pub fn href(&self, app: &Location) -> String {
        let prefixed = app.with_path(format!("{}{}", self.prefix, app.path));
        prefixed.to_string()
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_BASE_PATH.trim_end_matches('/').to_string(),
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.prefix)
    }
}

impl TryFrom<String> for BasePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<BasePath> for String {
    fn from(value: BasePath) -> Self {
        value.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BasePath {
        BasePath::new(DEFAULT_BASE_PATH).expect("valid base")
    }

    #[test]
    fn test_normalization() {
        for raw in ["/serve_ad", "/serve_ad/", "serve_ad", " /serve_ad/ "] {
            assert_eq!(BasePath::new(raw).expect("valid").as_string(), "/serve_ad/");
        }
        assert_eq!(BasePath::new("/").expect("valid"), BasePath::root());
        assert_eq!(BasePath::default(), base());
        assert_eq!(base().prefix(), "/serve_ad");
        assert_eq!(BasePath::root().prefix(), "");
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(BasePath::new("").is_err());
        assert!(BasePath::new("/serve ad/").is_err());
        assert!(BasePath::new("/serve_ad?x").is_err());
        assert!(BasePath::new("/a//b/").is_err());
    }

    #[test]
    fn test_strip() {
        let base = base();
        let stripped = base
            .strip(&Location::parse("/serve_ad/show_uuid?x=1"))
            .expect("inside base");
        assert_eq!(stripped.to_string(), "/show_uuid?x=1");

        assert_eq!(base.strip(&Location::new("/serve_ad")).expect("root").path, "/");
        assert_eq!(base.strip(&Location::new("/serve_ad/")).expect("root").path, "/");
    }

    #[test]
    fn test_strip_outside_base() {
        let base = base();
        assert!(matches!(
            base.strip(&Location::new("/show_uuid")),
            Err(Error::OutsideBase { .. })
        ));
        assert!(base.strip(&Location::new("/serve_adx/show_uuid")).is_err());
    }

    #[test]
    fn test_href() {
        let base = base();
        assert_eq!(base.href(&Location::new("/")), "/serve_ad/");
        assert_eq!(base.href(&Location::new("/show_uuid")), "/serve_ad/show_uuid");
        assert_eq!(
            base.href(&Location::parse("/video_playlist#today")),
            "/serve_ad/video_playlist#today"
        );
        assert_eq!(BasePath::root().href(&Location::new("/a")), "/a");
    }

    #[test]
    fn test_serde_roundtrip_normalizes() {
        let parsed: BasePath = serde_json::from_str("\"/serve_ad\"").expect("Should deserialize");
        assert_eq!(serde_json::to_string(&parsed).expect("Should serialize"), "\"/serve_ad/\"");
        assert!(serde_json::from_str::<BasePath>("\"\"").is_err());
    }
}
