//! Neo IR - core data structures shared by every front-end phase.
//!
//! This crate contains:
//! - [`Span`] for source locations
//! - [`Token`] and [`TokenList`] for lexer output
//! - [`AstArena`], the append-only node store, and its [`AstId`] handles
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes refer to each other through `AstId(u32)`,
//!   never through references or boxes, so the tree stays valid while the
//!   arena reallocates.
//! - **Own the lists**: variable-length children (lambda params, tuple
//!   args, ...) live in one flat `Vec<AstId>` inside the arena and are
//!   addressed by [`AstRange`].

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod ast_id;
mod span;
mod token;

pub use ast::{AstArena, AstKind, AstNode, BinaryOp, UnaryOp};
pub use ast_id::{AstId, AstRange};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
