//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead, consumption, and the error
//! constructors that need to know what the current token is.

use neo_diagnostic::Expected;
use neo_ir::{Span, Token, TokenKind, TokenList};
use smallvec::SmallVec;
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

/// Cursor over a lexed token stream.
///
/// Invariant: the stream ends in `Eof` and the position never moves past
/// it, so [`Cursor::current`] is always in bounds.
pub struct Cursor<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// # Panics
    /// Panics if `tokens` does not end in `Eof`.
    pub fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        let tokens = tokens.as_slice();
        assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must end in Eof"
        );
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token `n` places ahead, `Eof` past the end.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token. At `Eof` the position stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind` or fail with "expected `kind`".
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.expected(&[Expected::Token(kind)])),
        }
    }

    /// Offset, relative to the current position, of the token closing the
    /// delimiter at the current position. Only `open`/`close` affect depth.
    pub fn find_matching(&self, open: TokenKind, close: TokenKind) -> Option<usize> {
        let mut depth = 0usize;
        for (offset, token) in self.tokens[self.pos..].iter().enumerate() {
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(offset);
                }
            }
        }
        None
    }

    /// Text of the current token as shown in messages.
    fn found(&self) -> String {
        let token = self.current();
        if token.is_eof() {
            "<eof>".to_string()
        } else {
            token.span.text(self.source).to_string()
        }
    }

    /// Error for a position where one of `candidates` was required.
    ///
    /// An `Invalid` token there is reported as such instead.
    #[cold]
    pub fn expected(&self, candidates: &[Expected]) -> ParseError {
        let kind = if self.check(TokenKind::Invalid) {
            ParseErrorKind::InvalidToken
        } else {
            ParseErrorKind::Expected(SmallVec::from_slice(candidates))
        };
        ParseError::new(kind, self.current_span(), self.found())
    }

    /// Error for input left over after a complete expression.
    #[cold]
    pub fn unexpected(&self) -> ParseError {
        let kind = if self.check(TokenKind::Invalid) {
            ParseErrorKind::InvalidToken
        } else {
            ParseErrorKind::UnexpectedToken
        };
        ParseError::new(kind, self.current_span(), self.found())
    }

    /// Error for the delimiter at the current position having no close.
    #[cold]
    pub fn unclosed(&self, delimiter: char) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnclosedDelimiter(delimiter),
            self.current_span(),
            self.found(),
        )
    }
}
