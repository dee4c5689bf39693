//! Parsed URL locations (path, query, hash).

/// A location as seen by the router: a path plus optional query and hash.
///
/// The query and hash are stored without their leading `?` / `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Absolute path, always starting with `/`.
    pub path: String,
    /// Query string without the leading `?`.
    pub query: Option<String>,
    /// Fragment without the leading `#`.
    pub hash: Option<String>,
}

impl Location {
    /// Create a location with only a path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            query: None,
            hash: None,
        }
    }

    /// Parse a raw URL string such as `/show_uuid?x=1#top`.
    ///
    /// Anything before the path (scheme, host) is not expected here; callers
    /// pass `pathname + search + hash` from the browser.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        Self {
            path: normalize_path(path),
            query,
            hash,
        }
    }

    /// Replace the path, keeping query and hash.
    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            query: self.query.clone(),
            hash: self.hash.clone(),
        }
    }

    /// Path segments, ignoring empty ones produced by repeated or trailing slashes.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Whether two locations point at the same place.
    ///
    /// Paths compare segment by segment, so `/a/`, `//a` and `/a` are equal.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.segments().eq(other.segments()) && self.query == other.query && self.hash == other.hash
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{hash}")?;
        }
        Ok(())
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
