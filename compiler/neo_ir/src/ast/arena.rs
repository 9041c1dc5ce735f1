//! Append-only AST arena.
//!
//! Nodes are never removed or mutated after creation, so an [`AstId`] stays
//! valid for the arena's whole lifetime even while the backing `Vec`s
//! reallocate.

use super::{AstKind, AstNode, BinaryOp, UnaryOp};
use crate::{AstId, AstRange, Span};

/// Convert a storage length to `u32`, panicking past the id space.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena {what} exceeded u32::MAX entries"))
}

/// Owns every node and every child list of one compilation unit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AstArena {
    nodes: Vec<AstNode>,
    /// Flat storage for child lists, addressed by `AstRange`.
    lists: Vec<AstId>,
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

impl AstArena {
    /// Create an arena holding only the two reserved sentinels.
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create an arena with room for roughly `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = AstArena {
            nodes: Vec::with_capacity(capacity.max(2)),
            lists: Vec::with_capacity(capacity),
        };
        let null = arena.push(AstKind::Null, Span::DUMMY);
        let invalid = arena.push(AstKind::Invalid, Span::DUMMY);
        debug_assert_eq!(null, AstId::NULL);
        debug_assert_eq!(invalid, AstId::INVALID);
        arena
    }

    /// Number of nodes, sentinels included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no real node has been pushed (only the sentinels exist).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 2
    }

    // Access

    /// Get a node.
    ///
    /// # Panics
    /// Panics on an id this arena did not produce.
    #[inline]
    pub fn get(&self, id: AstId) -> &AstNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: AstId) -> &AstKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn span(&self, id: AstId) -> Span {
        self.get(id).span
    }

    /// Resolve a child list.
    #[inline]
    pub fn list(&self, range: AstRange) -> &[AstId] {
        &self.lists[range.to_range()]
    }

    /// All nodes with their ids, in push order.
    pub fn iter(&self) -> impl Iterator<Item = (AstId, &AstNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (AstId::new(to_u32(i, "nodes")), node))
    }

    /// Direct children of a node in source order, skipping `NULL` slots.
    pub fn children(&self, id: AstId) -> Vec<AstId> {
        let mut out = Vec::new();
        match *self.kind(id) {
            AstKind::Null
            | AstKind::Invalid
            | AstKind::True
            | AstKind::False
            | AstKind::Integer
            | AstKind::Var
            | AstKind::Type
            | AstKind::Void => {}
            AstKind::IfThenElse {
                cond,
                then_branch,
                else_branch,
            } => out.extend([cond, then_branch, else_branch]),
            AstKind::Let {
                vars,
                types,
                inits,
                body,
            } => {
                let vars = self.list(vars);
                let types = self.list(types);
                let inits = self.list(inits);
                for ((&var, &ty), &init) in vars.iter().zip(types).zip(inits) {
                    out.push(var);
                    if !ty.is_null() {
                        out.push(ty);
                    }
                    out.push(init);
                }
                out.push(body);
            }
            AstKind::Lambda {
                params,
                types,
                body,
            } => {
                for (&param, &ty) in self.list(params).iter().zip(self.list(types)) {
                    out.push(param);
                    if !ty.is_null() {
                        out.push(ty);
                    }
                }
                out.push(body);
            }
            AstKind::Block { exprs } => out.extend_from_slice(self.list(exprs)),
            AstKind::Tuple { args } => out.extend_from_slice(self.list(args)),
            AstKind::Call { callee, args } => out.extend([callee, args]),
            AstKind::Unary { operand, .. } => out.push(operand),
            AstKind::Binary { lhs, rhs, .. } => out.extend([lhs, rhs]),
        }
        out
    }

    // Allocation

    fn push(&mut self, kind: AstKind, span: Span) -> AstId {
        let id = AstId::new(to_u32(self.nodes.len(), "nodes"));
        self.nodes.push(AstNode::new(kind, span));
        id
    }

    fn alloc_list(&mut self, ids: &[AstId]) -> AstRange {
        let start = to_u32(self.lists.len(), "lists");
        self.lists.extend_from_slice(ids);
        AstRange::new(start, to_u32(ids.len(), "lists"))
    }

    pub fn push_true(&mut self, span: Span) -> AstId {
        self.push(AstKind::True, span)
    }

    pub fn push_false(&mut self, span: Span) -> AstId {
        self.push(AstKind::False, span)
    }

    pub fn push_integer(&mut self, span: Span) -> AstId {
        self.push(AstKind::Integer, span)
    }

    pub fn push_var(&mut self, span: Span) -> AstId {
        self.push(AstKind::Var, span)
    }

    pub fn push_type(&mut self, span: Span) -> AstId {
        self.push(AstKind::Type, span)
    }

    pub fn push_void(&mut self, span: Span) -> AstId {
        self.push(AstKind::Void, span)
    }

    pub fn push_if_then_else(
        &mut self,
        span: Span,
        cond: AstId,
        then_branch: AstId,
        else_branch: AstId,
    ) -> AstId {
        self.push(
            AstKind::IfThenElse {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )
    }

    /// Push a `let`. The three slices must have equal length.
    pub fn push_let(
        &mut self,
        span: Span,
        vars: &[AstId],
        types: &[AstId],
        inits: &[AstId],
        body: AstId,
    ) -> AstId {
        assert!(
            vars.len() == types.len() && vars.len() == inits.len(),
            "let binding lists must be parallel"
        );
        let vars = self.alloc_list(vars);
        let types = self.alloc_list(types);
        let inits = self.alloc_list(inits);
        self.push(
            AstKind::Let {
                vars,
                types,
                inits,
                body,
            },
            span,
        )
    }

    /// Push a lambda. `params` and `types` must have equal length.
    pub fn push_lambda(
        &mut self,
        span: Span,
        params: &[AstId],
        types: &[AstId],
        body: AstId,
    ) -> AstId {
        assert_eq!(
            params.len(),
            types.len(),
            "lambda parameter lists must be parallel"
        );
        let params = self.alloc_list(params);
        let types = self.alloc_list(types);
        self.push(
            AstKind::Lambda {
                params,
                types,
                body,
            },
            span,
        )
    }

    pub fn push_block(&mut self, span: Span, exprs: &[AstId]) -> AstId {
        let exprs = self.alloc_list(exprs);
        self.push(AstKind::Block { exprs }, span)
    }

    pub fn push_tuple(&mut self, span: Span, args: &[AstId]) -> AstId {
        let args = self.alloc_list(args);
        self.push(AstKind::Tuple { args }, span)
    }

    pub fn push_call(&mut self, span: Span, callee: AstId, args: AstId) -> AstId {
        self.push(AstKind::Call { callee, args }, span)
    }

    pub fn push_unary(&mut self, span: Span, op: UnaryOp, operand: AstId) -> AstId {
        self.push(AstKind::Unary { op, operand }, span)
    }

    pub fn push_binary(&mut self, span: Span, op: BinaryOp, lhs: AstId, rhs: AstId) -> AstId {
        self.push(AstKind::Binary { op, lhs, rhs }, span)
    }
}
