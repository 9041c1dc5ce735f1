use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source)
        .iter()
        .map(|token| token.span.text(source))
        .collect()
}

#[test]
fn test_keywords_and_names() {
    assert_eq!(
        kinds("true false truetrue"),
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Name,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_keyword_prefix_is_a_name() {
    assert_eq!(
        kinds("iffy lettuce inx elif_ _x"),
        vec![
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_every_literal_token() {
    for kind in TokenKind::LITERALS {
        let text = kind.literal().unwrap_or_default();
        assert_eq!(kinds(text), vec![kind, TokenKind::Eof], "lexing {text:?}");
    }
}

#[test]
fn test_lambda_arrow_is_maximal_munch() {
    assert_eq!(
        kinds("x +> x + y"),
        vec![
            TokenKind::Name,
            TokenKind::LambdaArrow,
            TokenKind::Name,
            TokenKind::Plus,
            TokenKind::Name,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_spans() {
    let tokens = lex("let x = 10");
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(4, 5),
            Span::new(6, 7),
            Span::new(8, 10),
            Span::new(10, 10),
        ]
    );
}

#[test]
fn test_integer_then_name() {
    assert_eq!(texts("123abc"), vec!["123", "abc", ""]);
    assert_eq!(
        kinds("123abc"),
        vec![TokenKind::Integer, TokenKind::Name, TokenKind::Eof]
    );
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    let source = "// leading\n  true // trailing\n\t\r\nfalse//x";
    assert_eq!(
        kinds(source),
        vec![TokenKind::True, TokenKind::False, TokenKind::Eof]
    );
}

#[test]
fn test_slash_is_not_a_comment() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Name,
            TokenKind::Slash,
            TokenKind::Name,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_invalid_run_is_one_token() {
    let source = "true $#@x false";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::True,
            TokenKind::Invalid,
            TokenKind::False,
            TokenKind::Eof
        ]
    );
    assert_eq!(texts(source), vec!["true", "$#@x", "false", ""]);
}

#[test]
fn test_invalid_run_stops_at_comment() {
    assert_eq!(texts("é//c\nx"), vec!["é", "x", ""]);
}

#[test]
fn test_empty_and_blank_sources() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n// only a comment"), vec![TokenKind::Eof]);
    assert_eq!(lex("  ")[0].span, Span::point(2));
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Name);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, Span::point(1));
    }
}
