//! Comparing derived records and asserting with `assert_alike!`.

#![allow(clippy::unwrap_used, reason = "test fixtures")]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use alike_compare::{anonymous, assert_alike, Comparator, Describe, MismatchKind, Value};
use alike_macros::Describe;
use pretty_assertions::assert_eq;

#[derive(Describe)]
struct Address {
    city: String,
    zip: Option<String>,
}

#[derive(Describe)]
struct User {
    id: u64,
    name: String,
    #[describe(rename = "emailAddress")]
    email: String,
    address: Address,
    tags: Vec<String>,
    #[describe(skip)]
    #[allow(dead_code, reason = "excluded from comparison")]
    last_seen: u64,
}

fn user() -> User {
    User {
        id: 1,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        address: Address {
            city: "London".to_owned(),
            zip: None,
        },
        tags: vec!["admin".to_owned(), "ops".to_owned()],
        last_seen: 99,
    }
}

fn amount_eq(a: &Value, b: &Value) -> bool {
    let cents = |v: &Value| v.member("cents").and_then(|c| c.as_int());
    cents(a) == cents(b)
}

#[derive(Describe)]
#[describe(name = "Money", equality = amount_eq)]
struct Money {
    cents: i64,
    label: String,
}

fn by_level(a: &Value, b: &Value) -> Option<Ordering> {
    let level = |v: &Value| v.member("level").and_then(|l| l.as_int());
    Some(level(a)?.cmp(&level(b)?))
}

#[derive(Describe)]
#[describe(ordering = by_level)]
struct Priority {
    level: i32,
    reason: String,
}

#[test]
fn derived_records_compare_member_wise() {
    assert_alike!(user(), user());

    let mut moved = user();
    moved.address.city = "Paris".to_owned();
    let d = Comparator::default()
        .diff_described(&user(), &moved)
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(d.path.to_string(), "address.city");
}

#[test]
fn skipped_fields_are_ignored() {
    let mut later = user();
    later.last_seen = 1_000;
    assert_alike!(user(), later);
}

#[test]
fn renamed_members_match_by_new_name() {
    let expected = anonymous! {
        id: 1,
        emailAddress: "ada@example.com",
    };
    assert_alike!(expected, user());

    let d = Comparator::default()
        .diff_described(&anonymous! { email: "ada@example.com" }, &user())
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(d.path.to_string(), "email");
    assert_eq!(d.kind, MismatchKind::NullMismatch);
}

#[test]
fn anonymous_expectations_against_nested_lists() {
    assert_alike!(
        anonymous! { tags: vec!["admin", "ops"], address: anonymous! { city: "London" } },
        user()
    );

    let d = Comparator::default()
        .diff_described(&anonymous! { tags: vec!["ops", "admin"] }, &user())
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(d.path.to_string(), "tags[0]");
}

#[test]
fn derived_equality_contract() {
    let a = Money {
        cents: 500,
        label: "five".to_owned(),
    };
    let b = Money {
        cents: 500,
        label: "5.00".to_owned(),
    };
    let c = Money {
        cents: 501,
        label: "five".to_owned(),
    };
    assert_alike!(a, b);
    let d = Comparator::default()
        .diff_described(&a, &c)
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(d.kind, MismatchKind::CustomEquality);
    assert!(d.path.is_root());
    assert_eq!(a.describe().type_name(), "Money");
}

#[test]
fn derived_ordering_contract() {
    let low = Priority {
        level: 1,
        reason: "a".to_owned(),
    };
    let also_low = Priority {
        level: 1,
        reason: "b".to_owned(),
    };
    let high = Priority {
        level: 3,
        reason: "a".to_owned(),
    };
    assert_alike!(low, also_low);
    let d = Comparator::default()
        .diff_described(&low, &high)
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(d.kind, MismatchKind::Ordering(Some(Ordering::Less)));
}

#[test]
fn btree_maps_compare_in_key_order() {
    let a: BTreeMap<String, i64> = [("x".to_owned(), 1), ("y".to_owned(), 2)].into();
    let mut b = a.clone();
    b.insert("y".to_owned(), 3);
    let d = Comparator::default()
        .diff_described(&a, &b)
        .unwrap()
        .into_divergence()
        .unwrap();
    assert_eq!(d.path.to_string(), "[1].value");
}

#[test]
#[should_panic(expected = "Difference occurs at 'name'.")]
fn assert_alike_reports_the_path() {
    let mut renamed = user();
    renamed.name = "Grace".to_owned();
    assert_alike!(user(), renamed);
}

#[test]
#[should_panic(expected = "user 1 drifted")]
fn assert_alike_custom_message() {
    let mut renamed = user();
    renamed.id = 2;
    assert_alike!(user(), renamed, "user {} drifted", 1);
}
