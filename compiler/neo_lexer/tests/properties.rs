//! Property tests: the lexer terminates, covers the input in order, and is
//! deterministic.

use neo_ir::TokenKind;
use neo_lexer::lex;
use proptest::prelude::*;

/// Source fragments biased toward the language's own alphabet.
fn source_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("let ".to_string()),
        Just("if ".to_string()),
        Just("then".to_string()),
        Just("+>".to_string()),
        Just("//".to_string()),
        Just("\n".to_string()),
        "[a-z0-9(){};:,=+*/ -]{1,4}",
        any::<char>().prop_map(|c| c.to_string()),
    ];
    prop::collection::vec(piece, 0..40).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn lexing_always_makes_progress(source in source_strategy()) {
        let tokens = lex(&source);
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);

        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens[tokens.len() - 1].is_eof());

        let mut previous_end = 0;
        for token in tokens.iter().filter(|t| !t.is_eof()) {
            prop_assert!(!token.span.is_empty(), "empty {:?} token", token.kind);
            prop_assert!(token.span.start >= previous_end);
            prop_assert!(token.span.end <= len);
            previous_end = token.span.end;
        }
    }

    #[test]
    fn lexing_is_deterministic(source in source_strategy()) {
        prop_assert_eq!(lex(&source), lex(&source));
    }

    #[test]
    fn invalid_tokens_contain_no_whitespace(source in source_strategy()) {
        for token in lex(&source).iter().filter(|t| t.kind == TokenKind::Invalid) {
            let text = token.span.text(&source);
            prop_assert!(!text.contains([' ', '\t', '\r', '\n']), "{:?}", text);
        }
    }
}
