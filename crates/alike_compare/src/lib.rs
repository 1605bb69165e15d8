//! Structural deep-equality for arbitrary value graphs.
//!
//! Decides whether an actual value is "the same" as an expected one across
//! primitives, strings, lists, maps, nested records, cyclic graphs, and types
//! with their own equality or ordering contracts. Comparison never loops on
//! cycles, never overflows the stack, and reports the first divergence:
//!
//! ```text
//! let expected = anonymous! { name: "ada", roles: vec!["admin"] };
//! match alike_compare::diff(&expected, &user.describe())? {
//!     ComparisonResult::Equal => {}
//!     ComparisonResult::NotEqual(d) => println!("{d}"), // Difference occurs at 'roles[0]'.
//! }
//! ```
//!
//! # Components
//!
//! - [`classify`]: Type Classifier
//! - [`VisitedSet`]: cycle detection by reference identity
//! - `collection`: lists and maps
//! - `composite`: records, member by member
//! - [`Comparator`]: the Graph Comparator orchestrating the walk
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=alike_compare=debug` (one event per comparison) or
//! `RUST_LOG=alike_compare=trace` (cycle breaks and divergences).

mod classify;
mod collection;
mod composite;
mod config;
mod error;
mod graph;
mod path;
mod result;
mod stack;
mod visited;

use std::sync::Once;

pub use alike_value::{anonymous, Describe, Value};
pub use classify::{classify, Category};
pub use config::{CompareConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV, VISITED_SCOPE_ENV};
pub use error::CompareError;
pub use graph::Comparator;
pub use path::{DivergencePath, Segment};
pub use result::{ComparisonResult, Divergence, MismatchKind};
pub use visited::{ParseScopeError, VisitedScope, VisitedSet};

static TRACING_INIT: Once = Once::new();

/// Check whether `actual` is structurally the same as `expected`, using the
/// default configuration.
///
/// A graph deeper than [`DEFAULT_MAX_DEPTH`] counts as not equal.
pub fn are_equal(expected: &Value, actual: &Value) -> bool {
    Comparator::default().are_equal(expected, actual)
}

/// Compare using the default configuration and report the first divergence.
pub fn diff(expected: &Value, actual: &Value) -> Result<ComparisonResult, CompareError> {
    Comparator::default().diff(expected, actual)
}

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Assert that two values are structurally alike.
///
/// Both sides may be anything implementing [`Describe`], including [`Value`].
/// On failure, panics with the divergence path, kind, and both values.
///
/// ```text
/// assert_alike!(anonymous! { id: 1 }, order.describe());
/// assert_alike!(expected, actual, "order {} after refresh", order_id);
/// ```
#[macro_export]
macro_rules! assert_alike {
    (@check $expected:expr, $actual:expr, $($arg:tt)+) => {
        match $crate::Comparator::default().diff_described(&$expected, &$actual) {
            ::std::result::Result::Ok($crate::ComparisonResult::Equal) => {}
            ::std::result::Result::Ok($crate::ComparisonResult::NotEqual(divergence)) => {
                ::std::panic!(
                    "{}\n{}",
                    ::std::format_args!($($arg)+),
                    divergence.describe()
                )
            }
            ::std::result::Result::Err(err) => {
                ::std::panic!("{}\n{}", ::std::format_args!($($arg)+), err)
            }
        }
    };
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assert_alike!(@check $expected, $actual, "structural equality assertion failed")
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::assert_alike!(@check $expected, $actual, $($arg)+)
    };
}
