use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn integers_widen_by_signedness() {
    assert_eq!(7i8.describe(), Value::int(7));
    assert_eq!((-3i32).describe(), Value::int(-3));
    assert_eq!(7isize.describe(), Value::int(7));
    assert_eq!(7u16.describe(), Value::uint(7));
    assert_eq!(7usize.describe(), Value::uint(7));
    assert_eq!(7u8.describe(), Value::byte(7));
}

#[test]
fn f32_keeps_its_printed_form() {
    assert_eq!(1.1f32.describe(), Value::float(1.1));
    assert_eq!(1.1f32.describe().canonical_form().as_deref(), Some("1.1"));
    assert_eq!((-0.0f32).describe().canonical_form().as_deref(), Some("-0"));
    assert_eq!(
        f32::INFINITY.describe().canonical_form().as_deref(),
        Some("inf")
    );
    assert!(f32::NAN.describe().as_float().is_some_and(f64::is_nan));
}

#[test]
fn strings_and_options() {
    assert_eq!("hi".describe(), Value::string("hi"));
    assert_eq!(String::from("hi").describe(), Value::string("hi"));
    assert_eq!(None::<i32>.describe(), Value::Null);
    assert_eq!(Some(2.5f32).describe(), Value::float(2.5));
}

#[test]
fn sequences_become_lists() {
    let expected = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(vec![1, 2].describe(), expected);
    assert_eq!([1, 2].describe(), expected);
    assert_eq!(Box::new([1, 2]).describe(), expected);
}

#[test]
fn btree_maps_keep_key_order() {
    let map: BTreeMap<&str, i64> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(
        map.describe(),
        Value::map(vec![
            (Value::string("a"), Value::int(1)),
            (Value::string("b"), Value::int(2)),
        ])
    );
}

#[test]
fn anonymous_macro_builds_shapes() {
    let v = crate::anonymous! { id: 1, name: "ada", tags: vec!["x"] };
    assert_eq!(v.type_name(), "{ id, name, tags }");
    assert_eq!(v.member("id"), Some(Value::int(1)));
    assert_eq!(
        v.member("tags"),
        Some(Value::list(vec![Value::string("x")]))
    );
}

#[test]
fn anonymous_macro_nests() {
    let v = crate::anonymous! { outer: crate::anonymous! { inner: true } };
    let inner = v.member("outer");
    assert_eq!(
        inner.as_ref().and_then(|i| i.member("inner")),
        Some(Value::bool(true))
    );
    assert_eq!(crate::anonymous! {}.type_name(), "{}");
}
