//! Procedural macros for the alike comparison engine.
//!
//! # Describe Derive
//!
//! The `Describe` derive macro tells the engine which members of a record
//! take part in comparison, replacing runtime reflection with a layout
//! registered once per type:
//!
//! ```text
//! #[derive(Describe)]
//! #[describe(name = "Money", equality = money_eq)]
//! pub struct Money {
//!     pub amount: i64,
//!     #[describe(rename = "ccy")]
//!     pub currency: String,
//!     #[describe(skip)]
//!     pub cached_display: String,
//! }
//! ```
//!
//! This generates an `alike_value::Describe` implementation that registers
//! the type with `alike_value::TypeRegistry` on first use and renders each
//! non-skipped field through its own `Describe` impl.
//!
//! # Note
//!
//! Generated code references `::alike_value`, so the deriving crate must
//! depend on it directly.

mod describe;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for describing a record to the comparison engine.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[describe(name = "...")]` - Type name in diagnostics. Defaults to the
///   shortened Rust type name.
/// - `#[describe(equality = path)]` - Equality contract,
///   `fn(&Value, &Value) -> bool`. Authoritative when present.
/// - `#[describe(ordering = path)]` - Ordering contract,
///   `fn(&Value, &Value) -> Option<Ordering>`.
///
/// ## Field-level
/// - `#[describe(rename = "...")]` - Member name used for matching.
/// - `#[describe(skip)]` - Leave the field out of comparison.
///
/// Only structs with named fields and no lifetime parameters are supported.
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input)
}
