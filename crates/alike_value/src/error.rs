//! Construction-time errors for values and type definitions.
//!
//! The comparator never raises these; they surface while fixtures are built.

/// Error raised while building a type or populating an object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A member name was used that the type does not declare.
    #[error("type `{type_name}` has no member named `{member}`")]
    UnknownMember { type_name: String, member: String },

    /// A type definition names the same member twice (including inherited members).
    #[error("type `{type_name}` declares member `{member}` more than once")]
    DuplicateMember { type_name: String, member: String },
}

impl ValueError {
    pub(crate) fn unknown_member(type_name: &str, member: &str) -> Self {
        ValueError::UnknownMember {
            type_name: type_name.to_owned(),
            member: member.to_owned(),
        }
    }

    pub(crate) fn duplicate_member(type_name: &str, member: &str) -> Self {
        ValueError::DuplicateMember {
            type_name: type_name.to_owned(),
            member: member.to_owned(),
        }
    }
}
