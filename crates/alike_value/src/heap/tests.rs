use super::*;

#[test]
fn test_heap_deref() {
    let h = Heap::new(42i64);
    assert_eq!(*h, 42);
}

#[test]
fn test_clones_share_identity() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert!(h1.ptr_eq(&h2));
    assert_eq!(h1.addr(), h2.addr());
    assert_eq!(h1.handle_count(), 2);
}

#[test]
fn test_equal_payloads_have_distinct_identity() {
    let h1 = Heap::new("hello".to_string());
    let h2 = Heap::new("hello".to_string());
    assert_eq!(*h1, *h2);
    assert!(!h1.ptr_eq(&h2));
    assert_ne!(h1.addr(), h2.addr());
}
