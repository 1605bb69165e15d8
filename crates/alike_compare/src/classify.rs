//! Type Classifier: which comparison rule applies to a value.

use alike_value::{TypeFlags, Value};

/// Comparison category, in precedence order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Null,
    String,
    Primitive,
    /// List or map.
    Enumerable,
    /// Object whose own type declares an equality contract.
    CustomEquality,
    /// Object whose type or an ancestor has an ordering contract.
    Comparable,
    /// Member-by-member comparison, including anonymous and top-type objects.
    Composite,
}

/// Classify `value`. Total: every value has exactly one category.
pub fn classify(value: &Value) -> Category {
    match value {
        Value::Null => Category::Null,
        Value::Str(_) => Category::String,
        Value::Bool(_)
        | Value::Char(_)
        | Value::Byte(_)
        | Value::Int(_)
        | Value::UInt(_)
        | Value::Float(_) => Category::Primitive,
        Value::List(_) | Value::Map(_) => Category::Enumerable,
        Value::Object(object) => {
            let ty = object.type_info();
            let flags = ty.flags();
            if !flags.allows_contracts() {
                Category::Composite
            } else if flags.contains(TypeFlags::HAS_EQUALITY) {
                Category::CustomEquality
            } else if flags.contains(TypeFlags::HAS_ORDERING) {
                Category::Comparable
            } else {
                Category::Composite
            }
        }
    }
}
