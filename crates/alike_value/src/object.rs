//! Composite values with reference identity.
//!
//! An [`ObjectRef`] is a shared handle to a record whose member slots can be
//! reassigned after construction, which is what makes self-referencing graphs
//! (`node.next = node`) constructible.
//!
//! # Cycles
//!
//! Handles are reference counted. A cyclic graph keeps itself alive until one
//! of its objects is [`cleared`](ObjectRef::clear).

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Heap, TypeInfo, Value, ValueError};

/// Backing storage of an object: its type and member slots in layout order.
pub struct ObjectData {
    ty: Arc<TypeInfo>,
    fields: RwLock<Vec<Value>>,
}

/// Shared handle to an object.
#[derive(Clone)]
pub struct ObjectRef(Heap<ObjectData>);

impl ObjectRef {
    /// Create an instance of `ty` with every member set to `Null`.
    pub fn new(ty: &Arc<TypeInfo>) -> Self {
        Self::with_fields(ty, Vec::new())
    }

    /// Create an instance from values in layout order.
    ///
    /// Missing trailing values become `Null`; extra values are dropped.
    pub(crate) fn with_fields(ty: &Arc<TypeInfo>, mut fields: Vec<Value>) -> Self {
        fields.resize(ty.members().len(), Value::Null);
        ObjectRef(Heap::new(ObjectData {
            ty: Arc::clone(ty),
            fields: RwLock::new(fields),
        }))
    }

    #[inline]
    pub fn type_info(&self) -> &Arc<TypeInfo> {
        &self.0.ty
    }

    /// Read a member by name.
    ///
    /// Returns `None` when the type does not declare the member.
    pub fn get(&self, name: &str) -> Option<Value> {
        let index = self.0.ty.layout().index_of(name)?;
        self.get_at(index)
    }

    /// Read a member by layout position.
    pub fn get_at(&self, index: usize) -> Option<Value> {
        self.0.fields.read().get(index).cloned()
    }

    /// Assign a member by name.
    pub fn set(&self, name: &str, value: Value) -> Result<(), ValueError> {
        let index = self
            .0
            .ty
            .layout()
            .index_of(name)
            .ok_or_else(|| ValueError::unknown_member(self.0.ty.name(), name))?;
        if let Some(slot) = self.0.fields.write().get_mut(index) {
            *slot = value;
        }
        Ok(())
    }

    /// Copy of all member values in layout order.
    ///
    /// The read lock is released before this returns.
    pub fn snapshot(&self) -> Vec<Value> {
        self.0.fields.read().clone()
    }

    /// Member names paired with a snapshot of their values.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        let names = self.0.ty.members().iter().map(AsRef::as_ref);
        names.zip(self.snapshot())
    }

    /// Reset every member to `Null`, releasing whatever it referenced.
    pub fn clear(&self) {
        for slot in self.0.fields.write().iter_mut() {
            *slot = Value::Null;
        }
    }

    /// Identity key of this object.
    #[inline]
    pub fn id(&self) -> usize {
        self.0.addr()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({}@{:#x})", self.0.ty.name(), self.id())
    }
}
