use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_to_covers_first_through_last() {
    let first = Span::new(4, 6);
    let last = Span::new(12, 17);
    assert_eq!(first.to(last), Span::new(4, 17));
}

#[test]
fn test_span_to_never_inverts() {
    // A zero-length EOF span before the start must not produce end < start.
    let first = Span::new(8, 10);
    let eof = Span::point(3);
    let joined = first.to(eof);
    assert!(joined.start <= joined.end);
}

#[test]
fn test_span_merge_disjoint() {
    let a = Span::new(0, 10);
    let b = Span::new(20, 30);
    assert_eq!(a.merge(b), Span::new(0, 30));
}

#[test]
fn test_span_try_from_range_success() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span.start, 50);
    assert_eq!(span.end, 100);
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_inverted() {
    #[allow(clippy::reversed_empty_ranges, reason = "exercising the inverted-range error")]
    let result = Span::try_from_range(10..5);
    assert_eq!(result, Err(SpanError::Inverted { start: 10, end: 5 }));
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::EndTooLarge(0x2_0000_0000).to_string();
    assert!(msg.contains("end"));
    assert!(msg.contains("0x200000000"));
}

#[test]
fn test_span_text() {
    let source = "let x = true";
    assert_eq!(Span::new(4, 5).text(source), "x");
    assert_eq!(Span::new(8, 12).text(source), "true");
    assert_eq!(Span::new(40, 50).text(source), "");
}

#[test]
fn test_span_point() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}

#[test]
fn test_span_default() {
    assert_eq!(Span::default(), Span::DUMMY);
}
