use super::*;
use neo_diagnostic::ErrorCode;
use neo_ir::TokenKind;
use pretty_assertions::assert_eq;
use smallvec::smallvec;

#[test]
fn test_expected_to_diagnostic() {
    let error = ParseError::new(
        ParseErrorKind::Expected(smallvec![Expected::Token(TokenKind::Then)]),
        Span::new(5, 9),
        "else",
    );
    let diag = error.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "expected `then`, found else");
    assert_eq!(diag.primary_span(), Some(Span::new(5, 9)));
}

#[test]
fn test_unclosed_to_diagnostic() {
    let error = ParseError::new(ParseErrorKind::UnclosedDelimiter('('), Span::new(0, 1), "(");
    let diag = error.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1005);
    assert_eq!(diag.message, "unclosed delimiter: `(`");
}

#[test]
fn test_invalid_and_unexpected_to_diagnostic() {
    let invalid = ParseError::new(ParseErrorKind::InvalidToken, Span::new(0, 2), "$$");
    assert_eq!(invalid.to_diagnostic().message, "invalid token: $$");

    let unexpected = ParseError::new(ParseErrorKind::UnexpectedToken, Span::new(5, 10), "false");
    assert_eq!(unexpected.to_diagnostic().code, ErrorCode::E1004);
    assert_eq!(unexpected.to_diagnostic().message, "unexpected token: false");
}
