//! Conversion of Rust data into comparable [`Value`]s.
//!
//! Records get their impl from `#[derive(Describe)]`; the impls here cover
//! the standard library types such records are built from.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::{ObjectRef, Value};

/// Render `self` as a [`Value`].
pub trait Describe {
    fn describe(&self) -> Value;
}

/// Build an anonymous composite from `name: expr` pairs.
///
/// Each expression is rendered through [`Describe`]. Anonymous composites
/// match any actual value that exposes equal members, whatever its type.
///
/// ```text
/// let expected = anonymous! { id: 1, name: "ada", tags: vec!["admin"] };
/// ```
#[macro_export]
macro_rules! anonymous {
    () => {
        $crate::Value::anonymous(::std::iter::empty::<(&str, $crate::Value)>())
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        $crate::Value::anonymous([
            $((::std::stringify!($name), $crate::Describe::describe(&$value))),+
        ])
    };
}

impl Describe for Value {
    fn describe(&self) -> Value {
        self.clone()
    }
}

impl Describe for ObjectRef {
    fn describe(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl Describe for bool {
    fn describe(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Describe for char {
    fn describe(&self) -> Value {
        Value::Char(*self)
    }
}

impl Describe for u8 {
    fn describe(&self) -> Value {
        Value::Byte(*self)
    }
}

macro_rules! impl_describe_lossless {
    ($variant:ident($target:ty): $($ty:ty),+) => {
        $(
            impl Describe for $ty {
                fn describe(&self) -> Value {
                    Value::$variant(<$target>::from(*self))
                }
            }
        )+
    };
}

impl_describe_lossless!(Int(i64): i8, i16, i32, i64);
impl_describe_lossless!(UInt(u64): u16, u32, u64);
impl_describe_lossless!(Float(f64): f64);

impl Describe for f32 {
    /// Goes through the shortest decimal text of the `f32`, so `1.1f32`
    /// becomes `1.1` rather than `1.100000023841858`.
    fn describe(&self) -> Value {
        let widened = self.to_string().parse().unwrap_or(f64::from(*self));
        Value::Float(widened)
    }
}

impl Describe for isize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "isize is at most 64 bits on supported targets"
    )]
    fn describe(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl Describe for usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "usize is at most 64 bits on supported targets"
    )]
    fn describe(&self) -> Value {
        Value::UInt(*self as u64)
    }
}

impl Describe for str {
    fn describe(&self) -> Value {
        Value::string(self)
    }
}

impl Describe for String {
    fn describe(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> Value {
        self.as_ref().map_or(Value::Null, Describe::describe)
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> Value {
        Value::list(self.iter().map(Describe::describe).collect())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> Value {
        self.as_slice().describe()
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(&self) -> Value {
        self.as_slice().describe()
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe(&self) -> Value {
        Value::map(
            self.iter()
                .map(|(k, v)| (k.describe(), v.describe()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests;
