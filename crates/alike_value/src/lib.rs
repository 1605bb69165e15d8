//! Value model and type metadata for the `alike` comparison engine.
//!
//! This crate provides:
//! - [`Value`]: the handle to "some value of some runtime type"
//! - [`ObjectRef`]: records with reference identity and reassignable members
//! - [`TypeInfo`] / [`TypeDef`]: member layout, contracts, and base chain
//! - [`TypeRegistry`]: the process-wide, concurrent type metadata cache
//! - [`Describe`]: conversion of Rust data into values (derivable through
//!   `alike_macros`)

mod describe;
mod error;
mod flags;
mod heap;
mod idx;
mod object;
mod registry;
mod types;
mod value;

pub use describe::Describe;
pub use error::ValueError;
pub use flags::TypeFlags;
pub use heap::Heap;
pub use idx::TypeIdx;
pub use object::{ObjectData, ObjectRef};
pub use registry::{friendly_type_name, TypeRegistry};
pub use types::{EqualityFn, MemberLayout, OrderingFn, TypeDef, TypeInfo};
pub use value::Value;
