//! Comparison errors.
//!
//! A mismatch is never an error; it is a [`ComparisonResult::NotEqual`].
//! The only way a comparison fails is by running out of depth.
//!
//! [`ComparisonResult::NotEqual`]: crate::ComparisonResult::NotEqual

use crate::DivergencePath;

/// Error that aborts a comparison before an answer is reached.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// The graph nests deeper than the configured ceiling.
    #[error("comparison exceeded the depth limit of {limit} at '{path}'")]
    DepthLimitExceeded { limit: usize, path: DivergencePath },
}
