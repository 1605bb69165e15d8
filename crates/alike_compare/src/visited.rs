//! Identity-keyed record of the objects a walk has entered.
//!
//! One set is created per top-level comparison and owned by that walk.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

/// How long a visited entry lives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisitedScope {
    /// Entries stay for the rest of the comparison. A node reached a second
    /// time through a different path is treated as equal without descending.
    #[default]
    Call,
    /// Entries are dropped when the subtree that created them returns, so
    /// only ancestors short-circuit. Every path through a shared node is
    /// compared in full.
    Path,
}

impl VisitedScope {
    pub fn as_str(self) -> &'static str {
        match self {
            VisitedScope::Call => "call",
            VisitedScope::Path => "path",
        }
    }
}

impl fmt::Display for VisitedScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scope name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown visited scope `{0}`, expected `call` or `path`")]
pub struct ParseScopeError(pub String);

impl FromStr for VisitedScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(VisitedScope::Call),
            "path" => Ok(VisitedScope::Path),
            _ => Err(ParseScopeError(s.to_owned())),
        }
    }
}

/// Set of entered identities.
#[derive(Debug)]
pub struct VisitedSet {
    entered: FxHashSet<usize>,
    scope: VisitedScope,
}

impl VisitedSet {
    pub fn new(scope: VisitedScope) -> Self {
        VisitedSet {
            entered: FxHashSet::default(),
            scope,
        }
    }

    /// Record `id` as entered.
    ///
    /// Returns `false` if it was already present; the caller stops descending.
    #[inline]
    pub fn enter(&mut self, id: usize) -> bool {
        self.entered.insert(id)
    }

    /// Mark the subtree under `id` as finished.
    ///
    /// Only path-scoped sets forget the entry.
    #[inline]
    pub fn leave(&mut self, id: usize) {
        if self.scope == VisitedScope::Path {
            self.entered.remove(&id);
        }
    }

    pub fn scope(&self) -> VisitedScope {
        self.scope
    }

    pub fn len(&self) -> usize {
        self.entered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }
}
