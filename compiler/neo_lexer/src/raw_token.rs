//! Raw Token Definition
//!
//! The logos-derived tokenizer output, before conversion to [`TokenKind`].
//! logos picks the longest match and prefers `#[token]` over `#[regex]` on
//! ties, so `true` is a keyword while `truetrue` and `iffy` are names.

use logos::Logos;
use neo_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("elif")]
    Elif,
    #[token("let")]
    Let,
    #[token("in")]
    In,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("+>")]
    LambdaArrow,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
    #[regex(r"[0-9]+")]
    Integer,
}

impl RawToken {
    /// Final token kind, `None` for trivia.
    pub(crate) fn kind(self) -> Option<TokenKind> {
        Some(match self {
            RawToken::LineComment => return None,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::If => TokenKind::If,
            RawToken::Then => TokenKind::Then,
            RawToken::Else => TokenKind::Else,
            RawToken::Elif => TokenKind::Elif,
            RawToken::Let => TokenKind::Let,
            RawToken::In => TokenKind::In,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::LambdaArrow => TokenKind::LambdaArrow,
            RawToken::Name => TokenKind::Name,
            RawToken::Integer => TokenKind::Integer,
        })
    }
}
