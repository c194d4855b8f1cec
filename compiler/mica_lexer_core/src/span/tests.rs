use super::*;

// === Construction ===

#[test]
fn new_stores_bounds() {
    let span = Span::new(10, 20);
    assert_eq!(span.start, 10);
    assert_eq!(span.end, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn default_is_empty() {
    let span = Span::default();
    assert_eq!(span.start, 0);
    assert_eq!(span.end, 0);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

// === Containment ===

#[test]
fn contains_is_half_open() {
    let span = Span::new(10, 20);
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
    assert!(!span.contains(9));
}

#[test]
fn empty_span_contains_nothing() {
    let span = Span::new(5, 5);
    assert!(!span.contains(5));
}

// === Conversion ===

#[test]
fn to_range_matches_bounds() {
    let span = Span::new(10, 20);
    let range = span.to_range();
    assert_eq!(range.start, 10);
    assert_eq!(range.end, 20);
}

#[test]
fn to_range_slices_source() {
    let source = "hello world";
    let span = Span::new(6, 11);
    assert_eq!(&source[span.to_range()], "world");
}

// === Boundaries ===

#[test]
fn u32_max_bounds() {
    let span = Span::new(u32::MAX - 10, u32::MAX);
    assert_eq!(span.len(), 10);
    assert!(span.contains(u32::MAX - 5));
    assert!(!span.contains(u32::MAX));
}

// === Formatting ===

#[test]
fn debug_and_display_show_range() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}

// === Traits ===

#[test]
fn hash_deduplicates_equal_spans() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Span::new(0, 10));
    set.insert(Span::new(0, 10));
    set.insert(Span::new(5, 15));
    assert_eq!(set.len(), 2);
}
