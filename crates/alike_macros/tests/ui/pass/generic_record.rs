//! Generic records register one type per instantiation.

use std::cmp::Ordering;

use alike_macros::Describe;
use alike_value::{Describe as _, Value};

fn by_rank(a: &Value, b: &Value) -> Option<Ordering> {
    let a = a.member("rank")?.as_int()?;
    let b = b.member("rank")?.as_int()?;
    Some(a.cmp(&b))
}

#[derive(Describe)]
#[describe(ordering = by_rank)]
pub struct Entry<T> {
    pub rank: i32,
    pub payload: T,
}

fn main() {
    let a = Entry { rank: 1, payload: "x" }.describe();
    let b = Entry { rank: 1, payload: 2u16 }.describe();
    assert_eq!(a.type_name(), "Entry<&str>");
    assert_eq!(b.type_name(), "Entry<u16>");
    let a_ty = a.type_info().map(|t| t.idx());
    let b_ty = b.type_info().map(|t| t.idx());
    assert_ne!(a_ty, b_ty);
    assert!(a.type_info().is_some_and(|t| t.ordering().is_some()));
}
