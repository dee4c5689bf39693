//! History backends.
//!
//! The router never talks to the browser directly. Programmatic navigation
//! drives a [`History`] implementation; [`MemoryHistory`] keeps browser stack
//! semantics in memory for tests and non-browser hosts. In the browser the
//! address bar is owned by the UI's router, which only asks
//! [`Router::settle`](crate::Router::settle) what it shows.

use tracing::debug;

use crate::error::Result;

/// A navigation history stack addressed by full URLs (base path included).
#[cfg_attr(test, mockall::automock)]
pub trait History {
    /// The current URL (path, query and hash).
    fn location(&self) -> String;

    /// Push a new entry, discarding any forward entries.
    fn push(&mut self, url: &str) -> Result<()>;

    /// Replace the current entry.
    fn replace(&mut self, url: &str) -> Result<()>;

    /// Move `delta` entries through the stack. Out-of-range moves are ignored.
    fn go(&mut self, delta: i32) -> Result<()>;

    /// Go back one entry.
    fn back(&mut self) -> Result<()> {
        self.go(-1)
    }

    /// Go forward one entry.
    fn forward(&mut self) -> Result<()> {
        self.go(1)
    }
}

/// In-memory history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, url: &str) -> Result<()> {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        debug!(url, depth = self.entries.len(), "History push");
        Ok(())
    }

    fn replace(&mut self, url: &str) -> Result<()> {
        self.entries[self.index] = url.to_string();
        debug!(url, "History replace");
        Ok(())
    }

    fn go(&mut self, delta: i32) -> Result<()> {
        let target = i64::try_from(self.index).unwrap_or(i64::MAX) + i64::from(delta);
        match usize::try_from(target) {
            Ok(target) if target < self.entries.len() => {
                self.index = target;
                debug!(delta, index = target, "History go");
            }
            _ => debug!(delta, "History go out of range, ignored"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back_forward() {
        let mut history = MemoryHistory::new("/serve_ad/");
        history.push("/serve_ad/show_uuid").expect("push");
        history.push("/serve_ad/register_device").expect("push");
        assert_eq!(history.len(), 3);

        history.back().expect("back");
        assert_eq!(history.location(), "/serve_ad/show_uuid");
        history.forward().expect("forward");
        assert_eq!(history.location(), "/serve_ad/register_device");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/a");
        history.push("/b").expect("push");
        history.push("/c").expect("push");
        history.go(-2).expect("go");
        history.push("/d").expect("push");
        assert_eq!(history.entries(), ["/a", "/d"]);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut history = MemoryHistory::new("/a");
        history.replace("/b").expect("replace");
        assert_eq!(history.len(), 1);
        assert_eq!(history.location(), "/b");
    }

    #[test]
    fn test_go_out_of_range_is_ignored() {
        let mut history = MemoryHistory::new("/a");
        history.go(-1).expect("go");
        history.go(5).expect("go");
        assert_eq!(history.location(), "/a");
        assert!(!history.is_empty());
    }
}
