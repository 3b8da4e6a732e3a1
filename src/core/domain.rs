//! Hierarchical check domains.
//!
//! A domain names the kind of test a modifier applies to, e.g.
//! `characteristic:bs` or `skill:stealth:sneak`. Segments are separated by
//! `:` (or `.` for content that uses dotted keys).
//!
//! Domains with three or more segments inherit from their immediate parent:
//! `skill:stealth:sneak` also collects modifiers registered under
//! `skill:stealth`. Inheritance stops after one level and never flows
//! downward.

use serde::{Deserialize, Serialize};

const SEPARATORS: [char; 2] = [':', '.'];

/// Minimum segment count for a domain to inherit from its parent.
const INHERITING_DEPTH: usize = 3;

/// A hierarchical domain key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Create a domain from its string form.
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into())
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments (`skill:stealth:sneak` has three).
    #[must_use]
    pub fn depth(&self) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        self.0.matches(SEPARATORS).count() + 1
    }

    /// The domain this one inherits modifiers from, if any.
    ///
    /// ```
    /// use d100_engine::core::Domain;
    ///
    /// let sneak = Domain::new("skill:stealth:sneak");
    /// assert_eq!(sneak.parent(), Some(Domain::new("skill:stealth")));
    /// assert_eq!(Domain::new("skill:stealth").parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Domain> {
        if self.depth() < INHERITING_DEPTH {
            return None;
        }
        self.0
            .rfind(SEPARATORS)
            .map(|idx| Domain(self.0[..idx].to_string()))
    }

    /// This domain followed by its parent, if it has one.
    pub fn lineage(&self) -> impl Iterator<Item = Domain> {
        std::iter::once(self.clone()).chain(self.parent())
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Domain {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Domain {
    fn from(s: String) -> Self {
        Self(s)
    }
}
