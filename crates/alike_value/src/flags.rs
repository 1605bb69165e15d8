//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is registered, so the classifier
//! answers "what kind of type is this?" without walking the base chain.

use bitflags::bitflags;

bitflags! {
    /// Cached type properties for O(1) classification.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Category flags (bits 0-7) ===

        /// Inline value type compared by canonical text.
        const IS_PRIMITIVE = 1 << 0;
        /// Member of the implicit numeric conversion family.
        const IS_NUMERIC = 1 << 1;
        /// The string type.
        const IS_STRING = 1 << 2;
        /// Iterable container (list or map), never a string.
        const IS_ENUMERABLE = 1 << 3;
        /// The universal top type.
        const IS_TOP = 1 << 4;
        /// Record type compared member by member.
        const IS_COMPOSITE = 1 << 5;
        /// Synthetic shape with no identity semantics of its own.
        const IS_ANONYMOUS = 1 << 6;

        // === Contract flags (bits 8-15) ===

        /// Declares its own equality contract (not inherited).
        const HAS_EQUALITY = 1 << 8;
        /// Has an ordering contract, declared or inherited.
        const HAS_ORDERING = 1 << 9;
    }
}

impl TypeFlags {
    /// Check whether the type may take the equality/ordering shortcuts.
    ///
    /// Anonymous shapes and the top type never do.
    #[inline]
    pub fn allows_contracts(self) -> bool {
        !self.intersects(Self::IS_ANONYMOUS | Self::IS_TOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_and_top_types_never_take_contracts() {
        assert!(TypeFlags::IS_COMPOSITE.allows_contracts());
        assert!(!(TypeFlags::IS_COMPOSITE | TypeFlags::IS_ANONYMOUS).allows_contracts());
        assert!(!TypeFlags::IS_TOP.allows_contracts());
    }
}
