//! Primary expressions.

use neo_diagnostic::Expected;
use neo_ir::{AstId, Span, Token, TokenKind};
use neo_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<AstId, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::True => {
                self.cursor.advance();
                Ok(self.arena.push_true(token.span))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(self.arena.push_false(token.span))
            }
            TokenKind::Integer => {
                self.cursor.advance();
                Ok(self.arena.push_integer(token.span))
            }
            TokenKind::If => ensure_sufficient_stack(|| self.parse_if()),
            TokenKind::Let => ensure_sufficient_stack(|| self.parse_let()),
            TokenKind::Name => self.parse_name(),
            TokenKind::LParen => ensure_sufficient_stack(|| self.parse_paren()),
            TokenKind::LBrace => ensure_sufficient_stack(|| self.parse_block()),
            _ => Err(self.cursor.expected(&[Expected::Node("expression")])),
        }
    }

    /// `"if" expr "then" expr "else" expr`
    fn parse_if(&mut self) -> Result<AstId, ParseError> {
        let start = self.cursor.expect(TokenKind::If)?.span;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::Then)?;
        let then_branch = self.parse_expr()?;
        self.cursor.expect(TokenKind::Else)?;
        let else_branch = self.parse_expr()?;
        let span = start.to(self.arena.span(else_branch));
        Ok(self
            .arena
            .push_if_then_else(span, cond, then_branch, else_branch))
    }

    /// `"let" binding ("," binding)* "in" expr`
    /// where `binding := NAME (":" type)? "=" expr`
    fn parse_let(&mut self) -> Result<AstId, ParseError> {
        let start = self.cursor.expect(TokenKind::Let)?.span;
        let mut vars: SmallVec<[AstId; 4]> = SmallVec::new();
        let mut types: SmallVec<[AstId; 4]> = SmallVec::new();
        let mut inits: SmallVec<[AstId; 4]> = SmallVec::new();

        loop {
            let name = self.cursor.expect(TokenKind::Name)?;
            vars.push(self.arena.push_var(name.span));

            if self.cursor.eat(TokenKind::Colon).is_some() {
                types.push(self.parse_type()?);
                self.cursor.expect(TokenKind::Eq)?;
            } else {
                types.push(AstId::NULL);
                if self.cursor.eat(TokenKind::Eq).is_none() {
                    return Err(self.cursor.expected(&[
                        Expected::Token(TokenKind::Colon),
                        Expected::Token(TokenKind::Eq),
                    ]));
                }
            }
            inits.push(self.parse_expr()?);

            if self.cursor.eat(TokenKind::Comma).is_some() {
                continue;
            }
            if self.cursor.eat(TokenKind::In).is_some() {
                break;
            }
            return Err(self.cursor.expected(&[
                Expected::Token(TokenKind::Comma),
                Expected::Token(TokenKind::In),
            ]));
        }

        let body = self.parse_expr()?;
        let span = start.to(self.arena.span(body));
        Ok(self.arena.push_let(span, &vars, &types, &inits, body))
    }

    /// A name starts a variable or a single-parameter lambda:
    /// `x`, `x +> body`, or `x: T +> body`.
    fn parse_name(&mut self) -> Result<AstId, ParseError> {
        match self.cursor.peek_kind(1) {
            TokenKind::LambdaArrow | TokenKind::Colon => {
                trace!("parse_name -> Lambda");
                let name = self.cursor.advance();
                let param = self.arena.push_var(name.span);
                let ty = if self.cursor.eat(TokenKind::Colon).is_some() {
                    self.parse_type()?
                } else {
                    AstId::NULL
                };
                self.parse_lambda_body(name.span, &[param], &[ty])
            }
            _ => {
                let name = self.cursor.advance();
                Ok(self.arena.push_var(name.span))
            }
        }
    }

    /// `"+>" expr`, completing a lambda that started at `start`.
    fn parse_lambda_body(
        &mut self,
        start: Span,
        params: &[AstId],
        types: &[AstId],
    ) -> Result<AstId, ParseError> {
        self.cursor.expect(TokenKind::LambdaArrow)?;
        let body = self.parse_expr()?;
        let span = start.to(self.arena.span(body));
        Ok(self.arena.push_lambda(span, params, types, body))
    }

    /// `type := NAME`
    fn parse_type(&mut self) -> Result<AstId, ParseError> {
        match self.cursor.eat(TokenKind::Name) {
            Some(name) => Ok(self.arena.push_type(name.span)),
            None => Err(self.cursor.expected(&[Expected::Node("type")])),
        }
    }

    /// A group starting with `(`. The token after the matching `)` decides
    /// its shape: `+>` makes it a lambda parameter list, anything else a
    /// grouping or tuple.
    fn parse_paren(&mut self) -> Result<AstId, ParseError> {
        let Some(close) = self
            .cursor
            .find_matching(TokenKind::LParen, TokenKind::RParen)
        else {
            return Err(self.cursor.unclosed('('));
        };

        if self.cursor.peek_kind(close + 1) == TokenKind::LambdaArrow {
            trace!("parse_paren -> Lambda");
            self.parse_lambda_params()
        } else {
            self.parse_group_or_tuple()
        }
    }

    /// `"(" (NAME (":" type)? ("," NAME (":" type)?)*)? ")" "+>" expr`
    fn parse_lambda_params(&mut self) -> Result<AstId, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?;
        let mut params: SmallVec<[AstId; 4]> = SmallVec::new();
        let mut types: SmallVec<[AstId; 4]> = SmallVec::new();

        while !self.cursor.check(TokenKind::RParen) {
            let name = self.cursor.expect(TokenKind::Name)?;
            params.push(self.arena.push_var(name.span));
            if self.cursor.eat(TokenKind::Colon).is_some() {
                types.push(self.parse_type()?);
            } else {
                types.push(AstId::NULL);
            }
            if self.cursor.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect_close_paren()?;
        self.parse_lambda_body(open.span, &params, &types)
    }

    /// `"(" expr ")"` is a grouping and yields the inner node.
    /// `"(" ")"`, `"(" expr "," ")"`, and `"(" expr ("," expr)+ ","? ")"`
    /// are tuples.
    fn parse_group_or_tuple(&mut self) -> Result<AstId, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?;
        if let Some(close) = self.cursor.eat(TokenKind::RParen) {
            return Ok(self.arena.push_tuple(open.span.to(close.span), &[]));
        }

        let first = self.parse_expr()?;
        if self.cursor.eat(TokenKind::RParen).is_some() {
            return Ok(first);
        }

        let mut elems: SmallVec<[AstId; 4]> = SmallVec::new();
        elems.push(first);
        while self.cursor.eat(TokenKind::Comma).is_some() {
            if self.cursor.check(TokenKind::RParen) {
                break;
            }
            elems.push(self.parse_expr()?);
        }
        let close = self.expect_close_paren()?;
        Ok(self.arena.push_tuple(open.span.to(close.span), &elems))
    }

    /// `"{" (expr (";" expr)*)? ";"? "}"`
    ///
    /// A trailing `;` appends a `Void` node spanning it, and `{}` holds a
    /// single `Void`.
    fn parse_block(&mut self) -> Result<AstId, ParseError> {
        if self
            .cursor
            .find_matching(TokenKind::LBrace, TokenKind::RBrace)
            .is_none()
        {
            return Err(self.cursor.unclosed('{'));
        }
        let open = self.cursor.advance();
        let mut exprs: SmallVec<[AstId; 8]> = SmallVec::new();

        if let Some(close) = self.cursor.eat(TokenKind::RBrace) {
            exprs.push(self.arena.push_void(Span::point(close.span.start)));
            return Ok(self.arena.push_block(open.span.to(close.span), &exprs));
        }

        loop {
            exprs.push(self.parse_expr()?);
            let Some(semi) = self.cursor.eat(TokenKind::Semicolon) else {
                break;
            };
            if self.cursor.check(TokenKind::RBrace) {
                exprs.push(self.arena.push_void(semi.span));
                break;
            }
        }

        let close = self.expect_close_brace()?;
        Ok(self.arena.push_block(open.span.to(close.span), &exprs))
    }

    fn expect_close_brace(&mut self) -> Result<Token, ParseError> {
        match self.cursor.eat(TokenKind::RBrace) {
            Some(close) => Ok(close),
            None => Err(self.cursor.expected(&[
                Expected::Token(TokenKind::Semicolon),
                Expected::Token(TokenKind::RBrace),
            ])),
        }
    }
}
