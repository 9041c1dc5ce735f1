//! Lexer for the Neo front end.
//!
//! [`Lexer::next_token`] produces one [`Token`] per call and never fails:
//! unrecognized input becomes an `Invalid` token, and the end of input is an
//! `Eof` token that repeats forever. [`lex`] collects a whole source into a
//! [`TokenList`] terminated by exactly one `Eof`.
//!
//! The lexer reports nothing itself. The parser turns `Invalid` tokens into
//! diagnostics when it reaches them.

mod raw_token;

use logos::Logos;
use neo_ir::{Span, Token, TokenKind, TokenList};

use raw_token::RawToken;

/// Streaming lexer over one source text.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    /// # Panics
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'src str) -> Self {
        assert!(
            u32::try_from(source.len()).is_ok(),
            "source file exceeds {} bytes",
            u32::MAX
        );
        Lexer {
            source,
            raw: RawToken::lexer(source),
        }
    }

    /// Produce the next significant token, skipping whitespace and comments.
    pub fn next_token(&mut self) -> Token {
        while let Some(result) = self.raw.next() {
            match result {
                Ok(raw) => {
                    if let Some(kind) = raw.kind() {
                        return Token::new(kind, Span::from_range(self.raw.span()));
                    }
                }
                Err(()) => return self.invalid_run(),
            }
        }
        self.eof()
    }

    /// Widen a logos error to the whole run of characters up to the next
    /// whitespace or `//`, and return it as one `Invalid` token.
    fn invalid_run(&mut self) -> Token {
        let error = self.raw.span();
        let rest = self.source.get(error.start..).unwrap_or_default();
        let run_len = invalid_run_len(rest);
        self.raw.bump(run_len.saturating_sub(error.len()));
        Token::new(TokenKind::Invalid, Span::from_range(self.raw.span()))
    }

    fn eof(&self) -> Token {
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        Token::new(TokenKind::Eof, Span::point(end))
    }
}

/// Byte length of the leading run of `rest` that contains neither
/// whitespace nor the start of a line comment.
fn invalid_run_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(i, c)| matches!(c, ' ' | '\t' | '\r' | '\n') || rest[i..].starts_with("//"))
        .map_or(rest.len(), |(i, _)| i)
}

/// Lex a whole source text.
///
/// The result always ends in exactly one `Eof` token.
pub fn lex(source: &str) -> TokenList {
    let mut lexer = Lexer::new(source);
    let mut tokens = TokenList::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests;
