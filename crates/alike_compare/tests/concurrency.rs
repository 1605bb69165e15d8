//! One comparator shared across threads.

#![allow(clippy::unwrap_used, reason = "test fixtures")]

use alike_compare::{anonymous, Comparator, Value};
use alike_macros::Describe;
use alike_value::Describe as _;
use rayon::prelude::*;

#[derive(Describe)]
struct Order {
    id: i64,
    lines: Vec<Line>,
}

#[derive(Describe)]
struct Line {
    sku: String,
    qty: u32,
}

fn order(id: i64) -> Order {
    Order {
        id,
        lines: (0..3)
            .map(|i| Line {
                sku: format!("sku-{i}"),
                qty: 1,
            })
            .collect(),
    }
}

#[test]
fn parallel_comparisons_agree() {
    let comparator = Comparator::default();
    let results: Vec<bool> = (0..256)
        .into_par_iter()
        .map(|id| {
            let expected = order(id).describe();
            let actual = if id % 2 == 0 { order(id) } else { order(id + 1) }.describe();
            comparator.are_equal(&expected, &actual)
        })
        .collect();

    for (id, equal) in results.iter().enumerate() {
        assert_eq!(*equal, id % 2 == 0, "order {id}");
    }
}

#[test]
fn shared_expected_value_across_threads() {
    let expected: Value = anonymous! { id: 7, lines: vec![anonymous! { sku: "sku-0" }] };
    let mismatches = (0..128)
        .into_par_iter()
        .filter(|_| {
            let mut actual = order(7);
            actual.lines.truncate(1);
            !Comparator::default().are_equal(&expected, &actual.describe())
        })
        .count();
    assert_eq!(mismatches, 0);
}
