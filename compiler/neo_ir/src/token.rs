//! Tokens produced by the lexer.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// Token kinds for Neo.
///
/// The first group are fixed literal tokens, each with an exact spelling
/// (see [`TokenKind::literal`]). The rest are free-form: their text is
/// whatever the span covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    True,
    False,
    If,
    Then,
    Else,
    Elif,
    Let,
    In,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Eq,
    Comma,
    Semicolon,
    Plus,
    Minus,
    Star,
    Slash,
    /// `+>`
    LambdaArrow,

    // Free-form
    Name,
    Integer,
    /// Unrecognized run of characters; diagnosed by the parser.
    Invalid,
    Eof,
}

impl TokenKind {
    /// Every fixed literal token, in table order.
    pub const LITERALS: [TokenKind; 21] = [
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::Elif,
        TokenKind::Let,
        TokenKind::In,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Colon,
        TokenKind::Eq,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::LambdaArrow,
    ];

    /// Exact spelling of a fixed literal token, `None` for free-form kinds.
    pub const fn literal(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Let => "let",
            TokenKind::In => "in",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Eq => "=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LambdaArrow => "+>",
            TokenKind::Name | TokenKind::Integer | TokenKind::Invalid | TokenKind::Eof => {
                return None
            }
        })
    }

    /// Stable name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::If => "If",
            TokenKind::Then => "Then",
            TokenKind::Else => "Else",
            TokenKind::Elif => "Elif",
            TokenKind::Let => "Let",
            TokenKind::In => "In",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Colon => "Colon",
            TokenKind::Eq => "Eq",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::LambdaArrow => "LambdaArrow",
            TokenKind::Name => "Name",
            TokenKind::Integer => "Integer",
            TokenKind::Invalid => "Invalid",
            TokenKind::Eof => "Eof",
        }
    }

    /// How the token is named in "expected ..." messages:
    /// `` `then` `` for literals, `<name>` for free-form kinds.
    pub fn display_name(self) -> String {
        match self.literal() {
            Some(lit) => format!("`{lit}`"),
            None => format!("<{}>", self.name().to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: kind plus the span it covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// A materialized token sequence.
///
/// Produced by `neo_lexer::lex`; always ends with exactly one `Eof` token.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds, for compact assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_table_round_trips_names() {
        for kind in TokenKind::LITERALS {
            assert!(kind.literal().is_some(), "{kind} has no literal");
        }
        assert_eq!(TokenKind::Name.literal(), None);
        assert_eq!(TokenKind::Eof.literal(), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(TokenKind::Then.display_name(), "`then`");
        assert_eq!(TokenKind::LambdaArrow.display_name(), "`+>`");
        assert_eq!(TokenKind::Name.display_name(), "<name>");
        assert_eq!(TokenKind::Eof.display_name(), "<eof>");
    }
}
