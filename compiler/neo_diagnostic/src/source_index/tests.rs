use super::*;
use pretty_assertions::assert_eq;

fn pos(line: u32, column: u32) -> Position {
    Position { line, column }
}

#[test]
fn test_lookup_first_line() {
    let index = SourceIndex::new("t", "true false");
    assert_eq!(index.lookup_position(0), pos(1, 0));
    assert_eq!(index.lookup_position(5), pos(1, 5));
}

#[test]
fn test_lookup_line_starts() {
    let index = SourceIndex::new("t", "line1\nline2\nline3");
    assert_eq!(index.lookup_position(6), pos(2, 0));
    assert_eq!(index.lookup_position(12), pos(3, 0));
    // The newline itself belongs to the line it ends.
    assert_eq!(index.lookup_position(5), pos(1, 5));
}

#[test]
fn test_lookup_end_of_content() {
    let index = SourceIndex::new("t", "ab\ncd");
    assert_eq!(index.lookup_position(5), pos(2, 2));
    assert_eq!(index.lookup_position(500), pos(2, 2));
}

#[test]
fn test_lookup_after_trailing_newline() {
    let index = SourceIndex::new("t", "ab\n");
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.lookup_position(3), pos(2, 0));
}

#[test]
fn test_lookup_empty_source() {
    let index = SourceIndex::new("t", "");
    assert!(index.is_empty());
    assert_eq!(index.lookup_position(0), pos(1, 0));
    assert_eq!(index.line_span(1), Some(Span::new(0, 0)));
}

#[test]
fn test_column_counts_characters() {
    let index = SourceIndex::new("t", "é x");
    // 'é' is two bytes.
    assert_eq!(index.lookup_position(3), pos(1, 2));
}

#[test]
fn test_line_span() {
    let index = SourceIndex::new("t", "let x\n= true\nin x");
    assert_eq!(index.line_span(1), Some(Span::new(0, 5)));
    assert_eq!(index.line_span(2), Some(Span::new(6, 12)));
    assert_eq!(index.line_span(3), Some(Span::new(13, 17)));
    assert_eq!(index.line_span(0), None);
    assert_eq!(index.line_span(4), None);
    assert_eq!(index.line_text(2), Some("= true"));
}

#[test]
fn test_line_text_strips_carriage_return() {
    let index = SourceIndex::new("t", "a\r\nb");
    assert_eq!(index.line_text(1), Some("a"));
}

#[test]
fn test_position_display_is_one_based_column() {
    assert_eq!(pos(3, 0).to_string(), "3:1");
}
