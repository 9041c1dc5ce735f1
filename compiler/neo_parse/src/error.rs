//! Parse error type.
//!
//! A `ParseError` is what a failed production returns through `?`. The
//! parser stops at the first one and converts it into a single
//! [`Diagnostic`] at the top level.

use neo_diagnostic::{
    expected, invalid_token, unclosed_delimiter, unexpected_token, Diagnostic, Expected,
};
use neo_ir::Span;
use smallvec::SmallVec;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer produced an `Invalid` token where a real one was needed.
    InvalidToken,
    /// Something else was required at this position.
    Expected(SmallVec<[Expected; 3]>),
    /// A complete expression was followed by more input.
    UnexpectedToken,
    /// An opening delimiter has no matching close.
    UnclosedDelimiter(char),
}

/// A syntax error at one span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Source text of the offending token, `<eof>` at end of input.
    pub found: String,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span, found: impl Into<String>) -> Self {
        ParseError {
            kind,
            span,
            found: found.into(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            ParseErrorKind::InvalidToken => invalid_token(self.span, &self.found),
            ParseErrorKind::Expected(candidates) => expected(self.span, candidates, &self.found),
            ParseErrorKind::UnexpectedToken => unexpected_token(self.span, &self.found),
            ParseErrorKind::UnclosedDelimiter(delimiter) => {
                unclosed_delimiter(self.span, *delimiter)
            }
        }
    }
}

#[cfg(test)]
mod tests;
