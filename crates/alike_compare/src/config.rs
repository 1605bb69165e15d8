//! Comparison settings.

use std::env;
use std::sync::Arc;

use crate::VisitedScope;

/// Nesting ceiling used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Environment variable overriding [`CompareConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "ALIKE_MAX_DEPTH";

/// Environment variable overriding [`CompareConfig::visited_scope`]
/// (`call` or `path`).
pub const VISITED_SCOPE_ENV: &str = "ALIKE_VISITED_SCOPE";

/// Settings for one [`Comparator`](crate::Comparator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    /// Number of nested steps after which the comparison stops with
    /// [`CompareError::DepthLimitExceeded`](crate::CompareError::DepthLimitExceeded).
    pub max_depth: usize,
    pub visited_scope: VisitedScope,
    /// Label rendered before every divergence path, e.g. `Model`.
    pub root: Option<Arc<str>>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            visited_scope: VisitedScope::default(),
            root: None,
        }
    }
}

impl CompareConfig {
    /// Load settings from `ALIKE_MAX_DEPTH` and `ALIKE_VISITED_SCOPE`.
    ///
    /// Unset variables keep their defaults. Unparseable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        let mut config = CompareConfig::default();
        if let Ok(raw) = env::var(MAX_DEPTH_ENV) {
            match raw.trim().parse() {
                Ok(depth) => config.max_depth = depth,
                Err(err) => tracing::warn!(
                    var = MAX_DEPTH_ENV,
                    value = %raw,
                    error = %err,
                    "ignoring invalid max depth"
                ),
            }
        }
        if let Ok(raw) = env::var(VISITED_SCOPE_ENV) {
            match raw.parse() {
                Ok(scope) => config.visited_scope = scope,
                Err(err) => tracing::warn!(
                    var = VISITED_SCOPE_ENV,
                    error = %err,
                    "ignoring invalid visited scope"
                ),
            }
        }
        config
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_visited_scope(mut self, scope: VisitedScope) -> Self {
        self.visited_scope = scope;
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<Arc<str>>) -> Self {
        self.root = Some(root.into());
        self
    }
}
