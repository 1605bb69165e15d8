//! Outcome of a comparison.

use std::cmp::Ordering;
use std::fmt;

use alike_value::Value;

use crate::DivergencePath;

/// Answer to "is `actual` the same as `expected`?".
#[derive(Clone, Debug, PartialEq)]
pub enum ComparisonResult {
    Equal,
    NotEqual(Divergence),
}

impl ComparisonResult {
    #[inline]
    pub fn is_equal(&self) -> bool {
        matches!(self, ComparisonResult::Equal)
    }

    /// The first divergence found, if the values differ.
    pub fn divergence(&self) -> Option<&Divergence> {
        match self {
            ComparisonResult::Equal => None,
            ComparisonResult::NotEqual(d) => Some(d),
        }
    }

    pub fn into_divergence(self) -> Option<Divergence> {
        match self {
            ComparisonResult::Equal => None,
            ComparisonResult::NotEqual(d) => Some(d),
        }
    }
}

/// The first place where the two graphs disagree.
#[derive(Clone, Debug, PartialEq)]
pub struct Divergence {
    pub path: DivergencePath,
    /// Value on the expected side at `path`.
    pub expected: Value,
    /// Value on the actual side at `path`.
    pub actual: Value,
    pub kind: MismatchKind,
}

impl Divergence {
    /// Multi-line report with the kind and both values.
    pub fn describe(&self) -> String {
        format!(
            "{self}\n  kind:     {}\n  expected: {}\n  actual:   {}",
            self.kind, self.expected, self.actual
        )
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "Difference occurs at the root.")
        } else {
            write!(f, "Difference occurs at '{}'.", self.path)
        }
    }
}

/// Why two values at the same path differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MismatchKind {
    /// Exactly one side is null.
    NullMismatch,
    /// Exactly one side is the bare top type.
    TopTypeMismatch,
    /// Neither type is assignable to the other.
    TypeMismatch { expected: String, actual: String },
    /// Expected a collection, found something else.
    NotEnumerable,
    LengthMismatch { expected: usize, actual: usize },
    /// Strings or primitives with different content.
    ValueMismatch,
    /// The type's equality contract said no.
    CustomEquality,
    /// The ordering contract did not report `Equal`.
    Ordering(Option<Ordering>),
    /// A map compared against a plain list.
    EntryMismatch,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::NullMismatch => write!(f, "one side is null"),
            MismatchKind::TopTypeMismatch => write!(f, "only one side is a bare object"),
            MismatchKind::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected `{expected}`, found `{actual}`")
            }
            MismatchKind::NotEnumerable => write!(f, "expected a collection"),
            MismatchKind::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, found {actual}")
            }
            MismatchKind::ValueMismatch => write!(f, "values differ"),
            MismatchKind::CustomEquality => write!(f, "equality contract rejected the values"),
            MismatchKind::Ordering(Some(ordering)) => {
                write!(f, "ordering contract reported {ordering:?}")
            }
            MismatchKind::Ordering(None) => write!(f, "ordering contract found the values incomparable"),
            MismatchKind::EntryMismatch => write!(f, "map compared with a list"),
        }
    }
}
