//! Recursive descent parser for Neo.
//!
//! Consumes a lexed [`TokenList`] and builds nodes into a caller-owned
//! [`AstArena`]. Binary operators are folded with a shunting-yard loop;
//! everything else is plain recursive descent with one token of lookahead,
//! plus a forward scan for the matching delimiter before each `(`/`{` group.
//!
//! Parsing stops at the first syntax error: exactly one diagnostic is pushed
//! and the root is [`AstId::INVALID`].

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use neo_diagnostic::DiagnosticEngine;
use neo_ir::{AstArena, AstId, TokenList};
use tracing::debug;

/// Parser state for one compilation unit.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: &'a mut AstArena,
    diagnostics: &'a mut DiagnosticEngine,
}

impl<'a> Parser<'a> {
    /// `tokens` must come from lexing `source`.
    pub fn new(
        source: &'a str,
        tokens: &'a TokenList,
        arena: &'a mut AstArena,
        diagnostics: &'a mut DiagnosticEngine,
    ) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
            arena,
            diagnostics,
        }
    }

    /// Parse one expression spanning the whole token stream.
    pub fn parse(mut self) -> AstId {
        match self.parse_root() {
            Ok(root) => {
                debug!(root = %root, nodes = self.arena.len(), "parsed");
                root
            }
            Err(error) => {
                debug!(?error, "parse failed");
                self.diagnostics.push(error.to_diagnostic());
                AstId::INVALID
            }
        }
    }

    fn parse_root(&mut self) -> Result<AstId, ParseError> {
        let root = self.parse_expr()?;
        if self.cursor.is_at_end() {
            Ok(root)
        } else {
            Err(self.cursor.unexpected())
        }
    }
}

/// Parse `tokens` (lexed from `source`) into `arena`, reporting into
/// `diagnostics`.
pub fn parse(
    source: &str,
    tokens: &TokenList,
    arena: &mut AstArena,
    diagnostics: &mut DiagnosticEngine,
) -> AstId {
    Parser::new(source, tokens, arena, diagnostics).parse()
}
