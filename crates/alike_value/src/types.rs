//! Per-type metadata: member layout, contracts, and assignability.
//!
//! A [`TypeInfo`] is built once per type and shared behind an `Arc`. It is
//! the static replacement for runtime member reflection: the ordered member
//! list, the equality and ordering contracts, and the base chain all live here.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{TypeFlags, TypeIdx, TypeRegistry, Value, ValueError};

/// Equality contract declared directly on a type.
///
/// Called as `equality(expected, actual)`; the answer is authoritative.
pub type EqualityFn = fn(&Value, &Value) -> bool;

/// Ordering contract of a type.
///
/// Called as `ordering(this, other)`. `None` means the two values are not
/// comparable.
pub type OrderingFn = fn(&Value, &Value) -> Option<Ordering>;

// MemberLayout

/// Ordered member names with O(1) name lookup.
#[derive(Clone, Debug, Default)]
pub struct MemberLayout {
    names: Vec<Box<str>>,
    indices: FxHashMap<Box<str>, usize>,
}

impl MemberLayout {
    /// Build a layout, reporting the first repeated name.
    pub(crate) fn from_names(names: Vec<Box<str>>) -> Result<Self, Box<str>> {
        let mut indices = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            if indices.insert(name.clone(), i).is_some() {
                return Err(name.clone());
            }
        }
        Ok(MemberLayout { names, indices })
    }

    /// Build a layout keeping only the first occurrence of each name.
    pub(crate) fn dedup(names: impl IntoIterator<Item = Box<str>>) -> Self {
        let mut layout = MemberLayout::default();
        for name in names {
            if !layout.indices.contains_key(&name) {
                layout.indices.insert(name.clone(), layout.names.len());
                layout.names.push(name);
            }
        }
        layout
    }

    /// Get the position of a member by name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Member names in declaration order.
    #[inline]
    pub fn names(&self) -> &[Box<str>] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// TypeInfo

/// Metadata for one runtime type.
pub struct TypeInfo {
    pub(crate) idx: TypeIdx,
    pub(crate) name: Box<str>,
    pub(crate) flags: TypeFlags,
    pub(crate) base: Option<Arc<TypeInfo>>,
    pub(crate) layout: MemberLayout,
    pub(crate) equality: Option<EqualityFn>,
    pub(crate) ordering: Option<OrderingFn>,
}

impl TypeInfo {
    pub(crate) fn builtin(idx: TypeIdx, name: &str, flags: TypeFlags) -> Self {
        TypeInfo {
            idx,
            name: name.into(),
            flags,
            base: None,
            layout: MemberLayout::default(),
            equality: None,
            ordering: None,
        }
    }

    #[inline]
    pub fn idx(&self) -> TypeIdx {
        self.idx
    }

    /// Friendly name for diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// Direct base type, if any.
    #[inline]
    pub fn base(&self) -> Option<&Arc<TypeInfo>> {
        self.base.as_ref()
    }

    #[inline]
    pub fn layout(&self) -> &MemberLayout {
        &self.layout
    }

    /// Member names in declaration order, inherited members first.
    #[inline]
    pub fn members(&self) -> &[Box<str>] {
        self.layout.names()
    }

    /// Equality contract declared on this exact type.
    ///
    /// Never inherited: a derived type without its own contract returns `None`
    /// even if its base declares one.
    #[inline]
    pub fn equality(&self) -> Option<EqualityFn> {
        self.equality
    }

    /// Ordering contract of this type or its nearest ancestor that has one.
    pub fn ordering(&self) -> Option<OrderingFn> {
        self.lineage().find_map(|ty| ty.ordering)
    }

    /// This type followed by its base chain, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &TypeInfo> {
        std::iter::successors(Some(self), |ty| ty.base.as_deref())
    }

    /// Check whether `ancestor` is this type or appears in its base chain.
    pub fn derives_from(&self, ancestor: &TypeInfo) -> bool {
        self.lineage().any(|ty| ty.idx == ancestor.idx)
    }

    /// Check whether a value of type `other` may stand where `self` is expected.
    ///
    /// True for the same type, for subtypes, and across the numeric family
    /// (`int`, `uint`, `byte`, `float`), which convert implicitly.
    pub fn is_assignable_from(&self, other: &TypeInfo) -> bool {
        if self.is_numeric() && other.is_numeric() {
            return true;
        }
        other.derives_from(self)
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.flags.contains(TypeFlags::IS_PRIMITIVE)
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.flags.contains(TypeFlags::IS_NUMERIC)
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.flags.contains(TypeFlags::IS_STRING)
    }

    #[inline]
    pub fn is_enumerable(&self) -> bool {
        self.flags.contains(TypeFlags::IS_ENUMERABLE)
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.flags.contains(TypeFlags::IS_TOP)
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.flags.contains(TypeFlags::IS_ANONYMOUS)
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("idx", &self.idx)
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("base", &self.base.as_ref().map(|b| b.name()))
            .field("members", &self.layout.names())
            .finish_non_exhaustive()
    }
}

// TypeDef

/// Builder for a record type.
///
/// ```text
/// let money = TypeDef::record("Money")
///     .member("amount")
///     .member("currency")
///     .equality(money_eq)
///     .register()?;
/// ```
#[derive(Clone, Debug)]
pub struct TypeDef {
    pub(crate) name: Box<str>,
    pub(crate) members: Vec<Box<str>>,
    pub(crate) base: Option<Arc<TypeInfo>>,
    pub(crate) equality: Option<EqualityFn>,
    pub(crate) ordering: Option<OrderingFn>,
}

impl TypeDef {
    /// Start a nominal record type.
    pub fn record(name: impl Into<Box<str>>) -> Self {
        TypeDef {
            name: name.into(),
            members: Vec::new(),
            base: None,
            equality: None,
            ordering: None,
        }
    }

    /// Append a member after those already declared.
    #[must_use]
    pub fn member(mut self, name: impl Into<Box<str>>) -> Self {
        self.members.push(name.into());
        self
    }

    /// Append several members in order.
    #[must_use]
    pub fn members<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.members.extend(names.into_iter().map(Into::into));
        self
    }

    /// Inherit from `base`: its members come first and it becomes an ancestor
    /// for assignability and ordering lookup.
    #[must_use]
    pub fn base(mut self, base: &Arc<TypeInfo>) -> Self {
        self.base = Some(Arc::clone(base));
        self
    }

    /// Declare an equality contract on this type.
    #[must_use]
    pub fn equality(mut self, f: EqualityFn) -> Self {
        self.equality = Some(f);
        self
    }

    /// Declare an ordering contract on this type.
    #[must_use]
    pub fn ordering(mut self, f: OrderingFn) -> Self {
        self.ordering = Some(f);
        self
    }

    /// Register in the process-wide registry.
    pub fn register(self) -> Result<Arc<TypeInfo>, ValueError> {
        TypeRegistry::global().register(self)
    }

    /// Inherited member names followed by this type's own.
    pub(crate) fn full_member_list(&self) -> Vec<Box<str>> {
        let inherited = self.base.as_ref().map_or(&[][..], |b| b.members());
        inherited
            .iter()
            .cloned()
            .chain(self.members.iter().cloned())
            .collect()
    }

    pub(crate) fn flags(&self) -> TypeFlags {
        let mut flags = TypeFlags::IS_COMPOSITE;
        if self.equality.is_some() {
            flags |= TypeFlags::HAS_EQUALITY;
        }
        let inherits_ordering = self
            .base
            .as_ref()
            .is_some_and(|b| b.flags.contains(TypeFlags::HAS_ORDERING));
        if self.ordering.is_some() || inherits_ordering {
            flags |= TypeFlags::HAS_ORDERING;
        }
        flags
    }
}
