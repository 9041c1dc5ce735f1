//! AST node kinds.
//!
//! Every node is an [`AstNode`]: a kind carrying its payload plus the span
//! it was parsed from. Children are always [`AstId`]s into the owning
//! [`AstArena`]; lists of children are [`AstRange`]s into the arena's flat
//! list storage.

mod arena;

pub use arena::AstArena;

use std::fmt;

use crate::{AstId, AstRange, Span, TokenKind};

/// Binary operators. The operator is part of the node kind, not a child.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator token to its binary operator.
    pub const fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Precedence rank. All binary operators are left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 6,
            BinaryOp::Mul | BinaryOp::Div => 7,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}

/// Node kinds with their payloads.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AstKind {
    /// Reserved at id 0: "absent".
    Null,
    /// Reserved at id 1: "error".
    Invalid,

    True,
    False,
    Integer,
    Var,
    /// Type-name reference, e.g. the `Bool` in `x: Bool`.
    Type,
    /// Value of an empty block or of a trailing `;`.
    Void,

    IfThenElse {
        cond: AstId,
        then_branch: AstId,
        else_branch: AstId,
    },
    /// `let v1 (: t1)? = e1, ... in body`.
    ///
    /// `vars`, `types`, and `inits` are parallel; a missing annotation is
    /// [`AstId::NULL`] in `types`.
    Let {
        vars: AstRange,
        types: AstRange,
        inits: AstRange,
        body: AstId,
    },
    /// `params` and `types` are parallel, like `Let`.
    Lambda {
        params: AstRange,
        types: AstRange,
        body: AstId,
    },
    Block {
        exprs: AstRange,
    },
    Tuple {
        args: AstRange,
    },
    /// `args` is always a `Tuple` node.
    Call {
        callee: AstId,
        args: AstId,
    },
    Unary {
        op: UnaryOp,
        operand: AstId,
    },
    Binary {
        op: BinaryOp,
        lhs: AstId,
        rhs: AstId,
    },
}

impl AstKind {
    /// Stable name used in AST dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            AstKind::Null => "Null",
            AstKind::Invalid => "Invalid",
            AstKind::True => "True",
            AstKind::False => "False",
            AstKind::Integer => "Integer",
            AstKind::Var => "Var",
            AstKind::Type => "Type",
            AstKind::Void => "Void",
            AstKind::IfThenElse { .. } => "IfThenElse",
            AstKind::Let { .. } => "Let",
            AstKind::Lambda { .. } => "Lambda",
            AstKind::Block { .. } => "Block",
            AstKind::Tuple { .. } => "Tuple",
            AstKind::Call { .. } => "Call",
            AstKind::Unary { .. } => "Unary",
            AstKind::Binary { .. } => "Binary",
        }
    }
}

/// A node in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AstNode {
    pub kind: AstKind,
    pub span: Span,
}

impl AstNode {
    #[inline]
    pub const fn new(kind: AstKind, span: Span) -> Self {
        AstNode { kind, span }
    }
}
