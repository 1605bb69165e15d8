//! Observable contract of `are_equal` and `diff`.

#![allow(clippy::unwrap_used, reason = "test fixtures")]

use alike_compare::{
    anonymous, are_equal, diff, ComparisonResult, Describe, MismatchKind, Value,
};
use alike_value::{ObjectRef, TypeDef};
use pretty_assertions::assert_eq;

fn ints(items: &[i64]) -> Value {
    Value::list(items.iter().copied().map(Value::int).collect())
}

#[test]
fn reflexive_on_plain_values() {
    let values = [
        Value::Null,
        Value::int(3),
        Value::string("x"),
        ints(&[1, 2, 3]),
        anonymous! { a: 1, b: vec!["c"] },
        Value::object(),
    ];
    for v in &values {
        assert!(are_equal(v, v), "{v} should equal itself");
    }
}

#[test]
fn reflexive_on_self_reference() {
    let ty = TypeDef::record("Node").members(["name", "next"]).register().unwrap();
    let a = ObjectRef::new(&ty);
    a.set("name", Value::string("x")).unwrap();
    a.set("next", Value::Object(a.clone())).unwrap();

    let v = Value::Object(a.clone());
    assert!(are_equal(&v, &v));
    a.clear();
}

#[test]
fn self_reference_against_equal_copy() {
    let ty = TypeDef::record("Node").members(["name", "next"]).register().unwrap();
    let make = || {
        let node = ObjectRef::new(&ty);
        node.set("name", Value::string("x")).unwrap();
        node.set("next", Value::Object(node.clone())).unwrap();
        node
    };
    let (a, b) = (make(), make());
    assert!(are_equal(&Value::Object(a.clone()), &Value::Object(b.clone())));
    a.clear();
    b.clear();
}

#[test]
fn collections() {
    assert!(are_equal(&ints(&[1, 2, 3]), &ints(&[1, 2, 3])));
    assert!(!are_equal(&ints(&[1, 2, 3]), &ints(&[3, 2, 1])));

    let d = diff(&ints(&[1, 2]), &ints(&[1, 2, 3]))
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(
        d.kind,
        MismatchKind::LengthMismatch {
            expected: 2,
            actual: 3,
        }
    );
    assert!(d.path.is_root());
}

#[test]
fn composite_mismatch_path() {
    let expected = anonymous! { user: anonymous! { id: 1, name: "A" } };
    let actual = anonymous! { user: anonymous! { id: 1, name: "B" } };
    let ComparisonResult::NotEqual(d) = diff(&expected, &actual).unwrap() else {
        panic!("expected a divergence");
    };
    assert_eq!(d.path.to_string(), "user.name");
    assert_eq!(d.expected, Value::string("A"));
    assert_eq!(d.actual, Value::string("B"));
    assert_eq!(d.to_string(), "Difference occurs at 'user.name'.");
}

/// Primitives compare by their canonical text, so numeric types mix freely.
#[test]
fn primitive_looseness() {
    assert!(are_equal(&Value::int(1), &Value::float(1.0)));
    assert!(are_equal(&Value::float(1.0), &Value::int(1)));
    assert!(are_equal(&Value::uint(1), &Value::byte(1)));
    assert!(!are_equal(&Value::float(1.5), &Value::int(1)));
}

#[test]
fn primitive_looseness_across_float_widths() {
    assert!(are_equal(&1.1f32.describe(), &1.1f64.describe()));
    assert!(are_equal(&0.1f64.describe(), &0.1f32.describe()));
    assert!(are_equal(&2.5f32.describe(), &2.5f64.describe()));
    assert!(are_equal(&3.0f32.describe(), &3i32.describe()));
    assert!(!are_equal(&1.1f32.describe(), &1.2f64.describe()));
}

#[test]
fn primitive_looseness_at_large_magnitudes() {
    assert!(are_equal(&Value::float(1e18), &Value::int(1_000_000_000_000_000_000)));
    assert!(are_equal(&Value::float(1e19), &Value::uint(10_000_000_000_000_000_000)));
    assert!(are_equal(&1e10f32.describe(), &Value::int(10_000_000_000)));
    assert!(!are_equal(&Value::float(1e20), &Value::int(i64::MAX)));
    // 2^53 + 1 has no exact f64.
    assert!(!are_equal(
        &Value::int(9_007_199_254_740_993),
        &Value::float(9_007_199_254_740_992.0)
    ));
}

#[test]
fn anonymous_expected_rejects_non_objects() {
    for actual in [
        Value::int(5),
        Value::string("x"),
        Value::list(Vec::new()),
        Value::map(Vec::new()),
    ] {
        assert!(!are_equal(&anonymous! {}, &actual), "{{}} vs {actual}");
        assert!(!are_equal(&anonymous! { a: None::<i32> }, &actual));
    }
}

#[test]
fn null_handling() {
    assert!(are_equal(&Value::Null, &Value::Null));
    assert!(!are_equal(&Value::Null, &anonymous! {}));
    assert!(!are_equal(&anonymous! {}, &Value::Null));
}

/// Contracts belong to the expected side; swapping arguments may change the answer.
#[test]
fn custom_equality_direction() {
    fn any_code(_: &Value, _: &Value) -> bool {
        true
    }

    let lenient = TypeDef::record("Lenient")
        .member("code")
        .equality(any_code)
        .register()
        .unwrap();
    let strict = TypeDef::record("Strict").base(&lenient).register().unwrap();

    let a = Value::record(&lenient, [("code", Value::int(1))]).unwrap();
    let b = Value::record(&strict, [("code", Value::int(2))]).unwrap();

    assert!(are_equal(&a, &b));
    assert!(!are_equal(&b, &a));
}
