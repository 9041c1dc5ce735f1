//! JSON-lines dumps of tokens and AST nodes, one object per line.
//!
//! ```text
//! {"kind":"Name","span":{"path":"t","begin":{"line":1,"column":0},"end":{"line":1,"column":0},"content":"x"}}
//! {"id":2,"kind":"Var","span":"x"}
//! ```
//!
//! Columns are zero-based. A span's `end` is the position of its last
//! character, or of its start when it is empty.

use std::fmt::Write;

use neo_diagnostic::{escape_json, Position, SourceIndex};
use neo_ir::{AstArena, AstId, AstKind, Span, Token, TokenList};

fn position_json(out: &mut String, pos: Position) {
    let _ = write!(out, "{{\"line\":{},\"column\":{}}}", pos.line, pos.column);
}

fn span_json(out: &mut String, source: &SourceIndex, span: Span) {
    let last = if span.is_empty() {
        span.end
    } else {
        span.end - 1
    };
    let _ = write!(out, "{{\"path\":\"{}\",\"begin\":", escape_json(source.path()));
    position_json(out, source.lookup_position(span.start));
    out.push_str(",\"end\":");
    position_json(out, source.lookup_position(last));
    let _ = write!(
        out,
        ",\"content\":\"{}\"}}",
        escape_json(source.slice(span))
    );
}

/// One token as a JSON object.
pub fn token_json(source: &SourceIndex, token: Token) -> String {
    let mut out = format!("{{\"kind\":\"{}\",\"span\":", token.kind.name());
    span_json(&mut out, source, token.span);
    out.push('}');
    out
}

/// Every token, `Eof` included, one JSON object per line.
pub fn dump_tokens(source: &SourceIndex, tokens: &TokenList) -> String {
    let mut out = String::new();
    for &token in tokens {
        out.push_str(&token_json(source, token));
        out.push('\n');
    }
    out
}

fn id_list(out: &mut String, field: &str, ids: &[AstId]) {
    let _ = write!(out, ",\"{field}\":[");
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", id.raw());
    }
    out.push(']');
}

/// One node as a JSON object: id, kind, source text, then its child ids.
/// Absent children (missing annotations) are written as `0`.
pub fn node_json(arena: &AstArena, source: &str, id: AstId) -> String {
    let node = arena.get(id);
    let mut out = format!(
        "{{\"id\":{},\"kind\":\"{}\",\"span\":\"{}\"",
        id.raw(),
        node.kind.name(),
        escape_json(node.span.text(source))
    );
    match node.kind {
        AstKind::Null
        | AstKind::Invalid
        | AstKind::True
        | AstKind::False
        | AstKind::Integer
        | AstKind::Var
        | AstKind::Type
        | AstKind::Void => {}
        AstKind::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => {
            let _ = write!(
                out,
                ",\"cond\":{},\"then\":{},\"else\":{}",
                cond.raw(),
                then_branch.raw(),
                else_branch.raw()
            );
        }
        AstKind::Let {
            vars,
            types,
            inits,
            body,
        } => {
            id_list(&mut out, "vars", arena.list(vars));
            id_list(&mut out, "types", arena.list(types));
            id_list(&mut out, "inits", arena.list(inits));
            let _ = write!(out, ",\"body\":{}", body.raw());
        }
        AstKind::Lambda {
            params,
            types,
            body,
        } => {
            id_list(&mut out, "params", arena.list(params));
            id_list(&mut out, "types", arena.list(types));
            let _ = write!(out, ",\"body\":{}", body.raw());
        }
        AstKind::Block { exprs } => id_list(&mut out, "exprs", arena.list(exprs)),
        AstKind::Tuple { args } => id_list(&mut out, "args", arena.list(args)),
        AstKind::Call { callee, args } => {
            let _ = write!(out, ",\"callee\":{},\"args\":{}", callee.raw(), args.raw());
        }
        AstKind::Unary { op, operand } => {
            let _ = write!(
                out,
                ",\"op\":\"{}\",\"operand\":{}",
                op.symbol(),
                operand.raw()
            );
        }
        AstKind::Binary { op, lhs, rhs } => {
            let _ = write!(
                out,
                ",\"op\":\"{}\",\"lhs\":{},\"rhs\":{}",
                op.symbol(),
                lhs.raw(),
                rhs.raw()
            );
        }
    }
    out.push('}');
    out
}

/// Ids of `root` and every node below it, in ascending id order.
pub fn reachable(arena: &AstArena, root: AstId) -> Vec<AstId> {
    let mut seen = vec![false; arena.len()];
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut seen[id.index()], true) {
            continue;
        }
        stack.extend(arena.children(id));
    }
    arena
        .iter()
        .map(|(id, _)| id)
        .filter(|id| seen[id.index()])
        .collect()
}

/// Nodes reachable from `root`, one JSON object per line.
pub fn dump_ast(arena: &AstArena, source: &str, root: AstId) -> String {
    let mut out = String::new();
    for id in reachable(arena, root) {
        out.push_str(&node_json(arena, source, id));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
