//! Composite Comparator: records, member by member.
//!
//! Members are visited in the expected type's layout order. The actual value
//! is searched by member name, so it may be of any type that exposes the same
//! names; a missing member reads as null.

use alike_value::Value;

use crate::classify::{classify, Category};
use crate::collection;
use crate::graph::{Step, Walk};
use crate::path::Segment;

pub(crate) fn compare(walk: &mut Walk<'_>, expected: &Value, actual: &Value) -> Step {
    let Some(expected_obj) = expected.as_object() else {
        return walk.type_mismatch(expected, actual);
    };
    let actual_obj = actual.as_object();

    for (name, expected_member) in expected_obj.entries() {
        let actual_member = actual_obj
            .and_then(|obj| obj.get(name))
            .unwrap_or(Value::Null);
        walk.with_segment(Segment::member(name), |w| {
            // Collections skip the visited check on themselves.
            if classify(&expected_member) == Category::Enumerable {
                collection::compare(w, &expected_member, &actual_member)
            } else {
                w.compare(&expected_member, &actual_member)
            }
        })?;
    }
    Ok(())
}
