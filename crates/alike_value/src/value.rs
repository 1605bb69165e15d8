//! Runtime values compared by the engine.
//!
//! # Heap Enforcement
//!
//! Heap variants hold a [`Heap<T>`], whose constructor is crate-private.
//! External code builds them through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let list = Value::list(vec![Value::int(1), Value::int(2)]);
//! let point = Value::anonymous([("x", Value::int(1)), ("y", Value::int(2))]);
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{Heap, ObjectRef, TypeIdx, TypeInfo, TypeRegistry, ValueError};

/// A value of some runtime type.
///
/// `Clone` is cheap: heap payloads are shared, never copied.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value.
    Null,
    Bool(bool),
    Char(char),
    Byte(u8),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// String. Never treated as a collection.
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    /// Ordered key/value entries, in insertion order.
    Map(Heap<Vec<(Value, Value)>>),
    /// Record with reference identity.
    Object(ObjectRef),
}

impl Value {
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn char(c: char) -> Self {
        Value::Char(c)
    }

    #[inline]
    pub fn byte(b: u8) -> Self {
        Value::Byte(b)
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn uint(n: u64) -> Self {
        Value::UInt(n)
    }

    #[inline]
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map from entries, keeping their order.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create an instance of the anonymous shape with these members.
    ///
    /// A repeated name keeps its first position and its last value.
    pub fn anonymous<N, I>(members: I) -> Self
    where
        N: Into<Box<str>>,
        I: IntoIterator<Item = (N, Value)>,
    {
        let mut names: Vec<Box<str>> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        let mut positions: FxHashMap<Box<str>, usize> = FxHashMap::default();
        for (name, value) in members {
            let name = name.into();
            if let Some(&pos) = positions.get(&name) {
                values[pos] = value;
            } else {
                positions.insert(name.clone(), names.len());
                names.push(name);
                values.push(value);
            }
        }
        let refs: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        let ty = TypeRegistry::global().anonymous(&refs);
        Value::Object(ObjectRef::with_fields(&ty, values))
    }

    /// Create an instance of a registered type, assigning members by name.
    ///
    /// Members not mentioned stay `Null`.
    pub fn record<N, I>(ty: &Arc<TypeInfo>, members: I) -> Result<Self, ValueError>
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, Value)>,
    {
        let object = ObjectRef::new(ty);
        for (name, value) in members {
            object.set(name.as_ref(), value)?;
        }
        Ok(Value::Object(object))
    }

    /// Create an instance from values already in `ty`'s layout order.
    pub fn from_layout(ty: &Arc<TypeInfo>, fields: Vec<Value>) -> Self {
        Value::Object(ObjectRef::with_fields(ty, fields))
    }

    /// Create a bare instance of the top type. It has no members.
    pub fn object() -> Self {
        match TypeRegistry::global().builtin(TypeIdx::OBJECT) {
            Some(ty) => Value::Object(ObjectRef::new(ty)),
            None => Value::Null,
        }
    }

    /// Runtime type of this value. `None` for `Null`.
    pub fn type_info(&self) -> Option<&Arc<TypeInfo>> {
        let idx = match self {
            Value::Null => return None,
            Value::Object(o) => return Some(o.type_info()),
            Value::Bool(_) => TypeIdx::BOOL,
            Value::Char(_) => TypeIdx::CHAR,
            Value::Byte(_) => TypeIdx::BYTE,
            Value::Int(_) => TypeIdx::INT,
            Value::UInt(_) => TypeIdx::UINT,
            Value::Float(_) => TypeIdx::FLOAT,
            Value::Str(_) => TypeIdx::STR,
            Value::List(_) => TypeIdx::LIST,
            Value::Map(_) => TypeIdx::MAP,
        };
        TypeRegistry::global().builtin(idx)
    }

    /// Friendly name of the runtime type, `null` for `Null`.
    pub fn type_name(&self) -> &str {
        self.type_info().map_or("null", |ty| ty.name())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is an inline primitive.
    pub fn is_value_type(&self) -> bool {
        matches!(
            self,
            Value::Bool(_)
                | Value::Char(_)
                | Value::Byte(_)
                | Value::Int(_)
                | Value::UInt(_)
                | Value::Float(_)
        )
    }

    /// Check if this value lives on the heap.
    pub fn is_reference_type(&self) -> bool {
        matches!(
            self,
            Value::Str(_) | Value::List(_) | Value::Map(_) | Value::Object(_)
        )
    }

    /// Identity key for cycle detection.
    ///
    /// Only containers and objects have one. Strings are compared by content
    /// and never take part in cycles.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.addr()),
            Value::Map(entries) => Some(entries.addr()),
            Value::Object(o) => Some(o.id()),
            _ => None,
        }
    }

    /// Textual rendering of a primitive, used for primitive equality.
    ///
    /// Numbers render without type suffixes, so `1`, `1u64` and `1.0` all
    /// produce `"1"`.
    pub fn canonical_form(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Char(c) => Some(c.to_string()),
            Value::Byte(b) => Some(b.to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::UInt(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Read an object member by name. `None` for non-objects and unknown names.
    pub fn member(&self, name: &str) -> Option<Value> {
        self.as_object()?.get(name)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Value::Byte(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// Exact equality: same variant and payload, objects by identity.
///
/// This is not the structural comparison; it exists for assertions on
/// individual values.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Map(a), Value::Map(b)) => **a == **b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Renders objects as `<TypeName>` without descending, so cyclic graphs print.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Byte(b) => write!(f, "0x{b:02x}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}u"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Object(o) => write!(f, "<{}>", o.type_info().name()),
        }
    }
}
