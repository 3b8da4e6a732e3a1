//! Roll option sets.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A flat set of roll option tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollOptions(FxHashSet<String>);

impl RollOptions {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, option: impl Into<String>) -> bool {
        self.0.insert(option.into())
    }

    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.contains(option)
    }

    /// Union another set into this one.
    pub fn merge(&mut self, other: &RollOptions) {
        self.0.extend(other.0.iter().cloned());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tags in lexical order, for display and stable logging.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut options: Vec<_> = self.iter().collect();
        options.sort_unstable();
        options
    }
}

impl<S: Into<String>> FromIterator<S> for RollOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for RollOptions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut options = RollOptions::new();
        assert!(options.insert("self:aiming"));
        assert!(!options.insert("self:aiming"));
        assert!(options.contains("self:aiming"));
        assert!(!options.contains("self:prone"));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = RollOptions::from_iter(["a", "b"]);
        let b = RollOptions::from_iter(["b", "c"]);
        a.merge(&b);
        assert_eq!(a.sorted(), vec!["a", "b", "c"]);
    }
}
