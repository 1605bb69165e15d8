//! Graph Comparator: the recursive walk over two value graphs.
//!
//! Each step applies the first matching rule, from null handling through
//! cycle breaking, type checks, and contracts to member-wise comparison. The
//! first divergence stops the walk and is propagated up with `?`.

use std::cmp::Ordering;

use alike_value::{Describe, TypeInfo, Value};

use crate::classify::{classify, Category};
use crate::path::{Segment, Segments};
use crate::stack::ensure_sufficient_stack;
use crate::{
    collection, composite, CompareConfig, CompareError, ComparisonResult, Divergence,
    DivergencePath, MismatchKind, VisitedSet,
};

/// Structural equality engine.
///
/// A comparator holds only configuration; each call builds its own visited
/// set, so one comparator can serve many threads.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    pub fn new(config: CompareConfig) -> Self {
        Comparator { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two graphs and report the first divergence.
    ///
    /// Errors only when the graph nests deeper than the configured ceiling.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(max_depth = self.config.max_depth, scope = %self.config.visited_scope)
    )]
    pub fn diff(&self, expected: &Value, actual: &Value) -> Result<ComparisonResult, CompareError> {
        let mut walk = Walk::new(&self.config);
        let outcome = walk.compare(expected, actual);
        let visited = walk.visited.len();
        match outcome {
            Ok(()) => {
                tracing::debug!(visited, "values are alike");
                Ok(ComparisonResult::Equal)
            }
            Err(Stop::Diverged(divergence)) => {
                tracing::debug!(
                    visited,
                    path = %divergence.path,
                    kind = %divergence.kind,
                    "values differ"
                );
                Ok(ComparisonResult::NotEqual(*divergence))
            }
            Err(Stop::TooDeep(err)) => {
                tracing::warn!(visited, error = %err, "comparison aborted");
                Err(err)
            }
        }
    }

    /// Check whether two graphs are alike. Too-deep graphs count as different.
    pub fn are_equal(&self, expected: &Value, actual: &Value) -> bool {
        self.diff(expected, actual)
            .is_ok_and(|result| result.is_equal())
    }

    /// Compare the [`Describe`] renderings of two Rust values.
    pub fn diff_described<E, A>(
        &self,
        expected: &E,
        actual: &A,
    ) -> Result<ComparisonResult, CompareError>
    where
        E: Describe + ?Sized,
        A: Describe + ?Sized,
    {
        self.diff(&expected.describe(), &actual.describe())
    }
}

/// Why the walk stopped early.
pub(crate) enum Stop {
    Diverged(Box<Divergence>),
    TooDeep(CompareError),
}

pub(crate) type Step = Result<(), Stop>;

/// State of one top-level comparison.
pub(crate) struct Walk<'c> {
    config: &'c CompareConfig,
    pub(crate) visited: VisitedSet,
    path: Segments,
    depth: usize,
}

impl<'c> Walk<'c> {
    pub(crate) fn new(config: &'c CompareConfig) -> Self {
        Walk {
            config,
            visited: VisitedSet::new(config.visited_scope),
            path: Segments::new(),
            depth: 0,
        }
    }

    /// Compare one pair of values, counting a level of depth.
    pub(crate) fn compare(&mut self, expected: &Value, actual: &Value) -> Step {
        if self.depth >= self.config.max_depth {
            return Err(Stop::TooDeep(CompareError::DepthLimitExceeded {
                limit: self.config.max_depth,
                path: self.current_path(),
            }));
        }
        self.depth += 1;
        let step = ensure_sufficient_stack(|| self.compare_node(expected, actual));
        self.depth -= 1;
        step
    }

    /// Run `f` with `segment` appended to the current path.
    pub(crate) fn with_segment<R>(&mut self, segment: Segment, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Stop the walk with a divergence at the current path.
    pub(crate) fn diverge(&self, expected: &Value, actual: &Value, kind: MismatchKind) -> Step {
        tracing::trace!(depth = self.depth, kind = %kind, "divergence");
        Err(Stop::Diverged(Box::new(Divergence {
            path: self.current_path(),
            expected: expected.clone(),
            actual: actual.clone(),
            kind,
        })))
    }

    pub(crate) fn type_mismatch(&self, expected: &Value, actual: &Value) -> Step {
        let kind = MismatchKind::TypeMismatch {
            expected: expected.type_name().to_owned(),
            actual: actual.type_name().to_owned(),
        };
        self.diverge(expected, actual, kind)
    }

    fn current_path(&self) -> DivergencePath {
        DivergencePath::new(self.config.root.clone(), self.path.clone())
    }

    fn compare_node(&mut self, expected: &Value, actual: &Value) -> Step {
        match (expected.is_null(), actual.is_null()) {
            (true, true) => return Ok(()),
            (true, false) | (false, true) => {
                return self.diverge(expected, actual, MismatchKind::NullMismatch);
            }
            (false, false) => {}
        }

        let Some(id) = expected.identity() else {
            return self.compare_typed(expected, actual);
        };
        if !self.visited.enter(id) {
            tracing::trace!(
                depth = self.depth,
                scope = %self.visited.scope(),
                "already visited, treating as equal"
            );
            return Ok(());
        }
        let step = self.compare_typed(expected, actual);
        self.visited.leave(id);
        step
    }

    fn compare_typed(&mut self, expected: &Value, actual: &Value) -> Step {
        let (Some(expected_ty), Some(actual_ty)) = (expected.type_info(), actual.type_info()) else {
            return self.diverge(expected, actual, MismatchKind::NullMismatch);
        };

        if expected_ty.is_top() != actual_ty.is_top() {
            return self.diverge(expected, actual, MismatchKind::TopTypeMismatch);
        }

        let category = classify(expected);
        if category == Category::Enumerable {
            return collection::compare(self, expected, actual);
        }

        // An anonymous shape only matches by members, so its actual must have some.
        let compatible = if expected_ty.is_anonymous() {
            actual.as_object().is_some()
        } else {
            expected_ty.is_assignable_from(actual_ty) || actual_ty.is_assignable_from(expected_ty)
        };
        if !compatible {
            return self.type_mismatch(expected, actual);
        }

        match category {
            Category::String => {
                if expected.as_str() == actual.as_str() {
                    Ok(())
                } else {
                    self.diverge(expected, actual, MismatchKind::ValueMismatch)
                }
            }
            Category::Primitive => {
                if expected.canonical_form() == actual.canonical_form() {
                    Ok(())
                } else {
                    self.diverge(expected, actual, MismatchKind::ValueMismatch)
                }
            }
            _ if expected_ty.is_top() => composite::compare(self, expected, actual),
            Category::CustomEquality => match expected_ty.equality() {
                Some(eq) if !eq(expected, actual) => {
                    self.diverge(expected, actual, MismatchKind::CustomEquality)
                }
                _ => Ok(()),
            },
            Category::Comparable => {
                match compare_ordering(expected_ty, actual_ty, expected, actual) {
                    Some(Ordering::Equal) => Ok(()),
                    other => self.diverge(expected, actual, MismatchKind::Ordering(other)),
                }
            }
            _ => composite::compare(self, expected, actual),
        }
    }
}

/// Ask the expected type's ordering first, then the actual type's.
///
/// The second answer is reversed so the result always reads as
/// `expected.cmp(actual)`.
fn compare_ordering(
    expected_ty: &TypeInfo,
    actual_ty: &TypeInfo,
    expected: &Value,
    actual: &Value,
) -> Option<Ordering> {
    let forward = expected_ty.ordering().and_then(|ord| ord(expected, actual));
    if forward.is_some() {
        return forward;
    }
    if !actual_ty.flags().allows_contracts() {
        return None;
    }
    actual_ty
        .ordering()
        .and_then(|ord| ord(actual, expected))
        .map(Ordering::reverse)
}
