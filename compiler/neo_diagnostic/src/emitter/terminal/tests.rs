#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{branch_types_not_equal, variable_not_bound, ErrorCode};
use neo_ir::Span;
use pretty_assertions::assert_eq;

fn render(source: Option<&SourceIndex>, diagnostic: &Diagnostic, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_excerpt_single_line() {
    let source = SourceIndex::new("test", "let x: Bool = true in y");
    let diag = variable_not_bound(Span::new(22, 23), "y");
    let text = render(Some(&source), &diag, ColorMode::Never);
    assert_eq!(
        text,
        "error: the variable is not bound: y\n \
         --> test:1:23\n  \
         |\n\
         1 | let x: Bool = true in y\n  \
         |                       ^ not bound\n\n"
    );
}

#[test]
fn test_excerpt_on_later_line_pads_gutter() {
    let content = "1\n2\n3\n4\n5\n6\n7\n8\n9\nlet y = true in z";
    let source = SourceIndex::new("f.neo", content);
    let offset = u32::try_from(content.len() - 1).unwrap();
    let diag = variable_not_bound(Span::new(offset, offset + 1), "z");
    let text = render(Some(&source), &diag, ColorMode::Never);
    assert!(text.contains("  --> f.neo:10:17\n"));
    assert!(text.contains("   |\n"));
    assert!(text.contains("10 | let y = true in z\n"));
}

#[test]
fn test_carets_span_label_width() {
    let source = SourceIndex::new("t", "if {} then true else false");
    let diag = Diagnostic::error(ErrorCode::E2004)
        .with_message("condition is not a subtype of Bool: {}")
        .with_label(Span::new(3, 5), "is of type `Void`");
    let text = render(Some(&source), &diag, ColorMode::Never);
    assert!(text.contains("|    ^^ is of type `Void`\n"));
}

#[test]
fn test_carets_clip_to_line_end() {
    let source = SourceIndex::new("t", "{ true;\n false }");
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("m")
        .with_label(Span::new(0, 16), "");
    let text = render(Some(&source), &diag, ColorMode::Never);
    // "{ true;" is seven characters; no trailing space without a message.
    assert!(text.contains("  | ^^^^^^^\n"));
}

#[test]
fn test_empty_span_gets_one_caret() {
    let source = SourceIndex::new("t", "(");
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected <expression>, found <eof>")
        .with_label(Span::point(1), "here");
    let text = render(Some(&source), &diag, ColorMode::Never);
    assert!(text.contains("  |  ^ here\n"));
}

#[test]
fn test_two_labels_render_two_excerpts() {
    let source = SourceIndex::new("t", "if x then true else {}");
    let diag = branch_types_not_equal(Span::new(10, 14), "True", Span::new(20, 22), "Void");
    let text = render(Some(&source), &diag, ColorMode::Never);
    assert_eq!(text.matches("--> t:1:").count(), 2);
    assert!(text.contains("^^^^ is of type `True`"));
    assert!(text.contains("^^ is of type `Void`"));
}

#[test]
fn test_without_source_falls_back_to_spans() {
    let diag = variable_not_bound(Span::new(22, 23), "y");
    let text = render(None, &diag, ColorMode::Never);
    assert!(text.starts_with("error: the variable is not bound: y\n"));
    assert!(text.contains("  --> 22..23: not bound"));
}

#[test]
fn test_colors_always() {
    let source = SourceIndex::new("t", "y");
    let diag = variable_not_bound(Span::new(0, 1), "y");
    let text = render(Some(&source), &diag, ColorMode::Always);
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("\x1b[1mthe variable is not bound: y\x1b[0m"));
    assert!(text.contains("\x1b[1;34m-->\x1b[0m"));
}

#[test]
fn test_note_is_yellow() {
    let diag = Diagnostic::note(ErrorCode::E2001).with_message("n");
    let text = render(None, &diag, ColorMode::Always);
    assert!(text.starts_with("\x1b[1;33mnote\x1b[0m"));
}

#[test]
fn test_color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_emit_all() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E2001).with_message("error 2"),
    ];
    emitter.emit_all(&diagnostics);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(3, 0);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: aborting due to previous error\n\
         error: aborting due to 3 previous errors\n\
         error: aborting due to 2 previous errors; 1 warning emitted\n"
    );
}
