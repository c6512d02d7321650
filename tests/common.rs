//! Integration tests for monkey-common crate.

use monkey_common::{BytePos, Span};

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from_usize(5, 5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_byte_pos_conversions() {
    assert_eq!(BytePos::from(42usize), BytePos(42));
    assert_eq!(usize::from(BytePos(42)), 42);
}

#[test]
fn test_span_text_rejects_split_char() {
    let source = "aé";
    assert_eq!(Span::from_usize(0, 1).text(source), Some("a"));
    assert_eq!(Span::from_usize(1, 2).text(source), None);
}
