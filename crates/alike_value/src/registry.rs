//! Process-wide type metadata cache.
//!
//! The registry hands out one [`TypeInfo`] per runtime type and never evicts.
//! Its size is bounded by the set of types present in the process.
//!
//! # Thread Safety
//!
//! The type table and the anonymous-shape map sit behind `parking_lot`
//! read-write locks and use a double-checked insert: readers never block each
//! other, and a shape or Rust type is registered at most once even when many
//! threads ask for it simultaneously. Lock order is always
//! `shapes -> types -> described`; no lock is held while user callbacks run.

use std::any::TypeId;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::types::MemberLayout;
use crate::{TypeDef, TypeFlags, TypeIdx, TypeInfo, ValueError};

static GLOBAL_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Built-in types in index order.
const BUILTINS: [(TypeIdx, &str, TypeFlags); TypeIdx::BUILTIN_COUNT as usize] = [
    (TypeIdx::BOOL, "bool", TypeFlags::IS_PRIMITIVE),
    (TypeIdx::CHAR, "char", TypeFlags::IS_PRIMITIVE),
    (
        TypeIdx::BYTE,
        "byte",
        TypeFlags::IS_PRIMITIVE.union(TypeFlags::IS_NUMERIC),
    ),
    (
        TypeIdx::INT,
        "int",
        TypeFlags::IS_PRIMITIVE.union(TypeFlags::IS_NUMERIC),
    ),
    (
        TypeIdx::UINT,
        "uint",
        TypeFlags::IS_PRIMITIVE.union(TypeFlags::IS_NUMERIC),
    ),
    (
        TypeIdx::FLOAT,
        "float",
        TypeFlags::IS_PRIMITIVE.union(TypeFlags::IS_NUMERIC),
    ),
    (TypeIdx::STR, "str", TypeFlags::IS_STRING),
    (TypeIdx::LIST, "list", TypeFlags::IS_ENUMERABLE),
    (TypeIdx::MAP, "map", TypeFlags::IS_ENUMERABLE),
    (
        TypeIdx::OBJECT,
        "object",
        TypeFlags::IS_TOP.union(TypeFlags::IS_COMPOSITE),
    ),
];

/// Concurrent, append-only table of runtime types.
pub struct TypeRegistry {
    builtins: Box<[Arc<TypeInfo>]>,
    /// Registered types, indexed by `idx - FIRST_DYNAMIC`.
    types: RwLock<Vec<Arc<TypeInfo>>>,
    /// Anonymous shapes keyed by member-name list.
    shapes: RwLock<FxHashMap<Vec<Box<str>>, Arc<TypeInfo>>>,
    /// Types populated through [`TypeRegistry::describe_type`].
    described: DashMap<TypeId, Arc<TypeInfo>>,
    /// Shortened `std::any::type_name` renderings.
    names: DashMap<TypeId, Arc<str>>,
}

impl TypeRegistry {
    fn new() -> Self {
        let builtins = BUILTINS
            .iter()
            .map(|&(idx, name, flags)| Arc::new(TypeInfo::builtin(idx, name, flags)))
            .collect();
        TypeRegistry {
            builtins,
            types: RwLock::new(Vec::with_capacity(64)),
            shapes: RwLock::new(FxHashMap::default()),
            described: DashMap::new(),
            names: DashMap::new(),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static TypeRegistry {
        GLOBAL_REGISTRY.get_or_init(TypeRegistry::new)
    }

    /// Get a built-in type. Returns `None` for non-built-in indices.
    #[inline]
    pub fn builtin(&self, idx: TypeIdx) -> Option<&Arc<TypeInfo>> {
        self.builtins.get(idx.raw() as usize)
    }

    /// Look up any type by index.
    pub fn get(&self, idx: TypeIdx) -> Option<Arc<TypeInfo>> {
        if idx.is_builtin() {
            return self.builtin(idx).cloned();
        }
        let slot = idx.raw().checked_sub(TypeIdx::FIRST_DYNAMIC)?;
        self.types.read().get(slot as usize).cloned()
    }

    /// Number of types known to the registry, built-ins included.
    pub fn len(&self) -> usize {
        self.builtins.len() + self.types.read().len()
    }

    /// Always false: the built-ins are present from the start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Register a nominal record type.
    ///
    /// Every call creates a distinct type, even for a name seen before.
    pub fn register(&self, def: TypeDef) -> Result<Arc<TypeInfo>, ValueError> {
        let layout = MemberLayout::from_names(def.full_member_list())
            .map_err(|member| ValueError::duplicate_member(&def.name, &member))?;
        let mut types = self.types.write();
        Ok(Self::push(&mut types, |idx| Self::record_info(idx, def, layout)))
    }

    /// Get the anonymous shape with these members, creating it on first use.
    ///
    /// Repeated names keep their first position. Equal member lists share one
    /// `TypeInfo`.
    pub fn anonymous(&self, members: &[&str]) -> Arc<TypeInfo> {
        let layout = MemberLayout::dedup(members.iter().map(|&m| Box::from(m)));
        let key = layout.names().to_vec();

        // Fast path: shape already known
        if let Some(ty) = self.shapes.read().get(&key) {
            return Arc::clone(ty);
        }

        let mut shapes = self.shapes.write();

        // Double-check after acquiring write lock
        if let Some(ty) = shapes.get(&key) {
            return Arc::clone(ty);
        }

        let name = shape_name(layout.names());
        let ty = Self::push(&mut self.types.write(), |idx| TypeInfo {
            idx,
            name: name.into(),
            flags: TypeFlags::IS_COMPOSITE | TypeFlags::IS_ANONYMOUS,
            base: None,
            layout,
            equality: None,
            ordering: None,
        });
        shapes.insert(key, Arc::clone(&ty));
        ty
    }

    /// Get the type registered for the Rust type `T`, defining it on first use.
    ///
    /// `define` runs without any registry lock held and may itself call back
    /// into the registry. If two threads race on the first population, both may
    /// run `define`, but only one type is registered and both receive it.
    pub fn describe_type<T: ?Sized + 'static>(
        &self,
        define: impl FnOnce() -> TypeDef,
    ) -> Arc<TypeInfo> {
        let key = TypeId::of::<T>();
        if let Some(ty) = self.described.get(&key) {
            return Arc::clone(ty.value());
        }

        let def = define();
        let layout = match MemberLayout::from_names(def.full_member_list()) {
            Ok(layout) => layout,
            Err(member) => {
                tracing::warn!(
                    type_name = %def.name,
                    member = %member,
                    "duplicate member in described type, keeping first occurrence"
                );
                MemberLayout::dedup(def.full_member_list())
            }
        };

        let mut types = self.types.write();

        // Double-check under the table lock so the type is pushed once
        if let Some(ty) = self.described.get(&key) {
            return Arc::clone(ty.value());
        }

        let ty = Self::push(&mut types, |idx| Self::record_info(idx, def, layout));
        self.described.insert(key, Arc::clone(&ty));
        ty
    }

    /// Shortened, cached name of the Rust type `T`.
    pub fn type_name_of<T: ?Sized + 'static>(&self) -> Arc<str> {
        let key = TypeId::of::<T>();
        if let Some(name) = self.names.get(&key) {
            return Arc::clone(name.value());
        }
        let name: Arc<str> = shorten_type_name(std::any::type_name::<T>()).into();
        Arc::clone(self.names.entry(key).or_insert(name).value())
    }

    fn record_info(idx: TypeIdx, def: TypeDef, layout: MemberLayout) -> TypeInfo {
        let flags = def.flags();
        tracing::trace!(idx = idx.raw(), name = %def.name, members = layout.len(), "registered type");
        TypeInfo {
            idx,
            name: def.name,
            flags,
            base: def.base,
            layout,
            equality: def.equality,
            ordering: def.ordering,
        }
    }

    fn push(types: &mut Vec<Arc<TypeInfo>>, build: impl FnOnce(TypeIdx) -> TypeInfo) -> Arc<TypeInfo> {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "type count is bounded by the types present in the process"
        )]
        let raw = TypeIdx::FIRST_DYNAMIC + types.len() as u32;
        let ty = Arc::new(build(TypeIdx::from_raw(raw)));
        types.push(Arc::clone(&ty));
        ty
    }
}

/// Shortened name of the Rust type `T`, e.g. `Vec<User>` for
/// `alloc::vec::Vec<app::model::User>`.
pub fn friendly_type_name<T: ?Sized + 'static>() -> Arc<str> {
    TypeRegistry::global().type_name_of::<T>()
}

/// Strip module paths from every segment of a type name.
pub(crate) fn shorten_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            '<' | '>' | ',' | '(' | ')' | '[' | ']' | ';' | '&' | '*' | ' ' => {
                out.push(c);
                segment_start = out.len();
            }
            _ => out.push(c),
        }
    }
    out
}

fn shape_name(members: &[Box<str>]) -> String {
    if members.is_empty() {
        return "{}".to_owned();
    }
    format!("{{ {} }}", members.join(", "))
}
