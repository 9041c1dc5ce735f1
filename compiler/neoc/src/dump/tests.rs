use super::*;
use neo_diagnostic::DiagnosticEngine;
use pretty_assertions::assert_eq;

fn parsed(source: &str) -> (AstArena, AstId) {
    let tokens = neo_lexer::lex(source);
    let mut arena = AstArena::new();
    let mut diagnostics = DiagnosticEngine::new();
    let root = neo_parse::parse(source, &tokens, &mut arena, &mut diagnostics);
    (arena, root)
}

#[test]
fn test_token_lines() {
    let source = SourceIndex::new("t", "x");
    let tokens = neo_lexer::lex(source.content());
    assert_eq!(
        dump_tokens(&source, &tokens),
        "{\"kind\":\"Name\",\"span\":{\"path\":\"t\",\"begin\":{\"line\":1,\"column\":0},\
         \"end\":{\"line\":1,\"column\":0},\"content\":\"x\"}}\n\
         {\"kind\":\"Eof\",\"span\":{\"path\":\"t\",\"begin\":{\"line\":1,\"column\":1},\
         \"end\":{\"line\":1,\"column\":1},\"content\":\"\"}}\n"
    );
}

#[test]
fn test_token_end_is_last_character() {
    let source = SourceIndex::new("t", "a\nbc");
    let tokens = neo_lexer::lex(source.content());
    let json = token_json(&source, tokens[1]);
    assert!(json.contains("\"begin\":{\"line\":2,\"column\":0}"));
    assert!(json.contains("\"end\":{\"line\":2,\"column\":1}"));
    assert!(json.contains("\"content\":\"bc\""));
}

#[test]
fn test_token_content_is_escaped() {
    let source = SourceIndex::new("t", "\"");
    let tokens = neo_lexer::lex(source.content());
    let json = token_json(&source, tokens[0]);
    assert!(json.starts_with("{\"kind\":\"Invalid\""));
    assert!(json.contains("\"content\":\"\\\"\""));
}

#[test]
fn test_if_node_lists_children() {
    let source = "if c then true else false";
    let (arena, root) = parsed(source);
    assert_eq!(
        node_json(&arena, source, root),
        "{\"id\":5,\"kind\":\"IfThenElse\",\"span\":\"if c then true else false\",\
         \"cond\":2,\"then\":3,\"else\":4}"
    );
}

#[test]
fn test_let_node_lists_parallel_slots() {
    let source = "let x: Bool = true, y = false in x";
    let (arena, root) = parsed(source);
    assert_eq!(
        node_json(&arena, source, root),
        "{\"id\":8,\"kind\":\"Let\",\"span\":\"let x: Bool = true, y = false in x\",\
         \"vars\":[2,5],\"types\":[3,0],\"inits\":[4,6],\"body\":7}"
    );
}

#[test]
fn test_binary_node() {
    let source = "1 + 2";
    let (arena, root) = parsed(source);
    assert_eq!(
        node_json(&arena, source, root),
        "{\"id\":4,\"kind\":\"Binary\",\"span\":\"1 + 2\",\"op\":\"+\",\"lhs\":2,\"rhs\":3}"
    );
}

#[test]
fn test_dump_ast_in_id_order() {
    let source = "{true; false}";
    let (arena, root) = parsed(source);
    let dump = dump_ast(&arena, source, root);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(
        lines,
        vec![
            "{\"id\":2,\"kind\":\"True\",\"span\":\"true\"}",
            "{\"id\":3,\"kind\":\"False\",\"span\":\"false\"}",
            "{\"id\":4,\"kind\":\"Block\",\"span\":\"{true; false}\",\"exprs\":[2,3]}",
        ]
    );
}

#[test]
fn test_reachable_skips_sentinels_and_orphans() {
    let source = "x";
    let (arena, root) = parsed(source);
    assert_eq!(reachable(&arena, root), vec![root]);

    let (arena, root) = parsed("(true");
    assert!(root.is_invalid());
    assert_eq!(reachable(&arena, root), vec![AstId::INVALID]);
}
