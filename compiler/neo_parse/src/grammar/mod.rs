//! Expression grammar.
//!
//! - `mod.rs`: `parse_expr` (shunting-yard over binary operators), prefix
//!   minus, and call postfix
//! - `primary.rs`: literals, `if`, `let`, variables, lambdas, parenthesized
//!   groups, and blocks

mod primary;

use neo_diagnostic::Expected;
use neo_ir::{AstId, BinaryOp, Token, TokenKind, UnaryOp};
use neo_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a full expression, including any binary operator chain.
    pub(crate) fn parse_expr(&mut self) -> Result<AstId, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary())
    }

    /// Shunting-yard: one operand stack, one operator stack. Before pushing
    /// a new operator, every pending operator that binds at least as tightly
    /// is reduced, which makes equal precedence left-associative.
    fn parse_binary(&mut self) -> Result<AstId, ParseError> {
        let mut operands: SmallVec<[AstId; 8]> = SmallVec::new();
        let mut operators: SmallVec<[BinaryOp; 8]> = SmallVec::new();
        operands.push(self.parse_prefix()?);

        while let Some(op) = BinaryOp::from_token(self.cursor.current_kind()) {
            while operators
                .last()
                .is_some_and(|top| top.precedence() >= op.precedence())
            {
                self.reduce(&mut operands, &mut operators);
            }
            self.cursor.advance();
            operators.push(op);
            operands.push(self.parse_prefix()?);
        }

        while !operators.is_empty() {
            self.reduce(&mut operands, &mut operators);
        }
        debug_assert_eq!(operands.len(), 1, "unbalanced operand stack");
        Ok(operands[0])
    }

    /// Pop one operator and its two operands, push the combined node.
    fn reduce(
        &mut self,
        operands: &mut SmallVec<[AstId; 8]>,
        operators: &mut SmallVec<[BinaryOp; 8]>,
    ) {
        let (Some(op), Some(rhs), Some(lhs)) = (operators.pop(), operands.pop(), operands.pop())
        else {
            unreachable!("operand stack holds one more entry than the operator stack");
        };
        let span = self.arena.span(lhs).to(self.arena.span(rhs));
        operands.push(self.arena.push_binary(span, op, lhs, rhs));
    }

    /// `"-" prefix | postfix`
    fn parse_prefix(&mut self) -> Result<AstId, ParseError> {
        match self.cursor.eat(TokenKind::Minus) {
            Some(minus) => ensure_sufficient_stack(|| {
                let operand = self.parse_prefix()?;
                let span = minus.span.to(self.arena.span(operand));
                Ok(self.arena.push_unary(span, UnaryOp::Neg, operand))
            }),
            None => self.parse_postfix(),
        }
    }

    /// `primary ( "(" args ")" )*`
    fn parse_postfix(&mut self) -> Result<AstId, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.cursor.check(TokenKind::LParen) {
            let args = self.parse_call_args()?;
            let span = self.arena.span(expr).to(self.arena.span(args));
            expr = self.arena.push_call(span, expr, args);
        }
        Ok(expr)
    }

    /// `"(" (expr ("," expr)* ","?)? ")"`, always as a `Tuple` node.
    fn parse_call_args(&mut self) -> Result<AstId, ParseError> {
        if self
            .cursor
            .find_matching(TokenKind::LParen, TokenKind::RParen)
            .is_none()
        {
            return Err(self.cursor.unclosed('('));
        }
        let open = self.cursor.advance();

        let mut args: SmallVec<[AstId; 4]> = SmallVec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if self.cursor.eat(TokenKind::Comma).is_none()
                    || self.cursor.check(TokenKind::RParen)
                {
                    break;
                }
            }
        }
        let close = self.expect_close_paren()?;
        Ok(self.arena.push_tuple(open.span.to(close.span), &args))
    }

    /// `)` closing a list; anything else could only have been a `,`.
    pub(super) fn expect_close_paren(&mut self) -> Result<Token, ParseError> {
        match self.cursor.eat(TokenKind::RParen) {
            Some(close) => Ok(close),
            None => Err(self.cursor.expected(&[
                Expected::Token(TokenKind::Comma),
                Expected::Token(TokenKind::RParen),
            ])),
        }
    }
}
