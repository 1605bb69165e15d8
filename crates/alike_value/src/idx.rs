//! Type identity handle.
//!
//! Every runtime type the comparator can meet has exactly one `TypeIdx`.
//! Built-in types live at fixed indices; record and anonymous types are
//! numbered from [`TypeIdx::FIRST_DYNAMIC`] as they are registered.

use std::fmt;

/// A 32-bit type identity.
///
/// Identity is index equality. Two records with the same name registered
/// twice are two different types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeIdx(u32);

impl TypeIdx {
    // === Built-in types (indices 0-9) ===

    /// `bool`.
    pub const BOOL: Self = Self(0);
    /// `char` (Unicode scalar value).
    pub const CHAR: Self = Self(1);
    /// `byte` (8-bit unsigned integer).
    pub const BYTE: Self = Self(2);
    /// `int` (64-bit signed integer).
    pub const INT: Self = Self(3);
    /// `uint` (64-bit unsigned integer).
    pub const UINT: Self = Self(4);
    /// `float` (64-bit floating point).
    pub const FLOAT: Self = Self(5);
    /// `str`.
    pub const STR: Self = Self(6);
    /// `list`, an ordered sequence of values.
    pub const LIST: Self = Self(7);
    /// `map`, an ordered sequence of key/value entries.
    pub const MAP: Self = Self(8);
    /// `object`, the universal top type.
    pub const OBJECT: Self = Self(9);

    /// Number of built-in types.
    pub const BUILTIN_COUNT: u32 = 10;

    /// First index handed out to registered types.
    pub const FIRST_DYNAMIC: u32 = 16;

    #[inline]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the fixed built-in indices.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }
}

impl fmt::Debug for TypeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BOOL => write!(f, "TypeIdx::BOOL"),
            Self::CHAR => write!(f, "TypeIdx::CHAR"),
            Self::BYTE => write!(f, "TypeIdx::BYTE"),
            Self::INT => write!(f, "TypeIdx::INT"),
            Self::UINT => write!(f, "TypeIdx::UINT"),
            Self::FLOAT => write!(f, "TypeIdx::FLOAT"),
            Self::STR => write!(f, "TypeIdx::STR"),
            Self::LIST => write!(f, "TypeIdx::LIST"),
            Self::MAP => write!(f, "TypeIdx::MAP"),
            Self::OBJECT => write!(f, "TypeIdx::OBJECT"),
            _ => write!(f, "TypeIdx({})", self.0),
        }
    }
}
