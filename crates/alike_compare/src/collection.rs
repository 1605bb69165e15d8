//! Collection Comparator: lists and maps, element by element.
//!
//! Order matters for both. Map entries compare their key at `[i].key` and
//! their value at `[i].value`.

use alike_value::Value;

use crate::graph::{Step, Walk};
use crate::path::Segment;
use crate::MismatchKind;

pub(crate) fn compare(walk: &mut Walk<'_>, expected: &Value, actual: &Value) -> Step {
    match (expected, actual) {
        (Value::List(e), Value::List(a)) => {
            check_len(walk, expected, actual, e.len(), a.len())?;
            for (i, (e, a)) in e.iter().zip(a.iter()).enumerate() {
                walk.with_segment(Segment::Index(i), |w| w.compare(e, a))?;
            }
            Ok(())
        }
        (Value::Map(e), Value::Map(a)) => {
            check_len(walk, expected, actual, e.len(), a.len())?;
            for (i, ((ek, ev), (ak, av))) in e.iter().zip(a.iter()).enumerate() {
                walk.with_segment(Segment::Index(i), |w| {
                    w.with_segment(Segment::member("key"), |w| w.compare(ek, ak))?;
                    w.with_segment(Segment::member("value"), |w| w.compare(ev, av))
                })?;
            }
            Ok(())
        }
        (Value::List(_), Value::Map(_)) | (Value::Map(_), Value::List(_)) => {
            walk.diverge(expected, actual, MismatchKind::EntryMismatch)
        }
        (_, Value::Null) => walk.diverge(expected, actual, MismatchKind::NullMismatch),
        _ => walk.diverge(expected, actual, MismatchKind::NotEnumerable),
    }
}

fn check_len(
    walk: &Walk<'_>,
    expected: &Value,
    actual: &Value,
    expected_len: usize,
    actual_len: usize,
) -> Step {
    if expected_len == actual_len {
        return Ok(());
    }
    let kind = MismatchKind::LengthMismatch {
        expected: expected_len,
        actual: actual_len,
    };
    walk.diverge(expected, actual, kind)
}
