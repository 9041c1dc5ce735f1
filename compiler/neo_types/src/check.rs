//! Memoized type checker.
//!
//! `type_of` computes a node's type once and caches it in a table indexed
//! by `AstId`. Every rule returns [`TypeId::INVALID`] on failure instead of
//! aborting, so sibling subtrees keep getting checked; an `Invalid` child
//! never causes a second report.

use neo_diagnostic::{
    branch_types_not_equal, condition_not_bool, invalid_type, mismatched_types, type_not_bound,
    variable_not_bound, DiagnosticEngine,
};
use neo_ir::{AstArena, AstId, AstKind, AstRange, Span};
use neo_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{TypeId, TypeUniverse};

/// Type checker for one parsed unit.
pub struct TypeChecker<'a> {
    source: &'a str,
    arena: &'a AstArena,
    universe: &'a mut TypeUniverse,
    diagnostics: &'a mut DiagnosticEngine,
    /// Memo table, one slot per arena node, `UNKNOWN` until typed.
    types: Vec<TypeId>,
    /// Let bindings in scope, innermost last. Names compare by source text.
    scope: Vec<(Span, TypeId)>,
}

impl<'a> TypeChecker<'a> {
    /// `arena` must have been parsed from `source`.
    pub fn new(
        source: &'a str,
        arena: &'a AstArena,
        universe: &'a mut TypeUniverse,
        diagnostics: &'a mut DiagnosticEngine,
    ) -> Self {
        TypeChecker {
            source,
            arena,
            universe,
            diagnostics,
            types: vec![TypeId::UNKNOWN; arena.len()],
            scope: Vec::new(),
        }
    }

    /// Type the tree under `root` and return the root's type.
    pub fn check(&mut self, root: AstId) -> TypeId {
        let errors_before = self.diagnostics.error_count();
        let ty = self.type_of(root);
        debug!(
            root = %root,
            ty = %self.universe.display(ty),
            errors = self.diagnostics.error_count() - errors_before,
            "checked"
        );
        ty
    }

    /// Type of `id`, computed on first request and cached after that.
    ///
    /// # Panics
    /// Panics on an id outside the arena.
    pub fn type_of(&mut self, id: AstId) -> TypeId {
        let cached = self.types[id.index()];
        if !cached.is_unknown() {
            trace!(id = %id, ty = ?cached, "memo hit");
            return cached;
        }
        let ty = ensure_sufficient_stack(|| self.infer(id));
        self.types[id.index()] = ty;
        ty
    }

    /// Memo table indexed by `AstId`. Nodes never reached stay `UNKNOWN`.
    pub fn type_map(&self) -> &[TypeId] {
        &self.types
    }

    pub fn into_type_map(self) -> Vec<TypeId> {
        self.types
    }

    fn text(&self, id: AstId) -> &'a str {
        self.arena.span(id).text(self.source)
    }

    fn display(&self, ty: TypeId) -> String {
        self.universe.display(ty)
    }

    fn infer(&mut self, id: AstId) -> TypeId {
        match *self.arena.kind(id) {
            // The parser already reported whatever produced these.
            AstKind::Null | AstKind::Invalid => TypeId::INVALID,
            AstKind::True => TypeId::TRUE,
            AstKind::False => TypeId::FALSE,
            AstKind::Void => TypeId::VOID,
            AstKind::Block { exprs } => self.infer_block(exprs),
            AstKind::IfThenElse {
                cond,
                then_branch,
                else_branch,
            } => self.infer_if(cond, then_branch, else_branch),
            AstKind::Let {
                vars,
                types,
                inits,
                body,
            } => self.infer_let(vars, types, inits, body),
            AstKind::Var => self.infer_var(id),
            AstKind::Type => self.infer_type_name(id),
            AstKind::Integer
            | AstKind::Lambda { .. }
            | AstKind::Tuple { .. }
            | AstKind::Call { .. }
            | AstKind::Unary { .. }
            | AstKind::Binary { .. } => {
                let diag = invalid_type(self.arena.span(id), self.text(id));
                self.diagnostics.push(diag);
                TypeId::INVALID
            }
        }
    }

    fn infer_block(&mut self, exprs: AstRange) -> TypeId {
        let arena = self.arena;
        let mut last = TypeId::VOID;
        let mut any_invalid = false;
        for &expr in arena.list(exprs) {
            last = self.type_of(expr);
            any_invalid |= last.is_invalid();
        }
        if any_invalid {
            TypeId::INVALID
        } else {
            last
        }
    }

    fn infer_if(&mut self, cond: AstId, then_branch: AstId, else_branch: AstId) -> TypeId {
        let cond_ty = self.type_of(cond);
        if cond_ty.is_invalid() {
            return TypeId::INVALID;
        }
        if !self.universe.is_subtype_of(cond_ty, TypeId::BOOL) {
            let diag = condition_not_bool(
                self.arena.span(cond),
                self.text(cond),
                &self.display(cond_ty),
            );
            self.diagnostics.push(diag);
            return TypeId::INVALID;
        }

        // A constant condition selects one branch; the other is not typed.
        match cond_ty {
            TypeId::TRUE => return self.type_of(then_branch),
            TypeId::FALSE => return self.type_of(else_branch),
            _ => {}
        }

        let then_ty = self.type_of(then_branch);
        let else_ty = self.type_of(else_branch);
        if then_ty.is_invalid() || else_ty.is_invalid() {
            return TypeId::INVALID;
        }
        if then_ty == else_ty {
            return then_ty;
        }
        if self.universe.is_subtype_of(then_ty, TypeId::BOOL)
            && self.universe.is_subtype_of(else_ty, TypeId::BOOL)
        {
            return self.universe.push_union(then_ty, else_ty);
        }

        let diag = branch_types_not_equal(
            self.arena.span(then_branch),
            &self.display(then_ty),
            self.arena.span(else_branch),
            &self.display(else_ty),
        );
        self.diagnostics.push(diag);
        TypeId::INVALID
    }

    fn infer_let(
        &mut self,
        vars: AstRange,
        types: AstRange,
        inits: AstRange,
        body: AstId,
    ) -> TypeId {
        let arena = self.arena;
        let depth = self.scope.len();
        let mut failed = false;

        for ((&var, &annotation), &init) in arena
            .list(vars)
            .iter()
            .zip(arena.list(types))
            .zip(arena.list(inits))
        {
            let bound = self.bind_type(annotation, init);
            failed |= bound.is_invalid();
            self.scope.push((arena.span(var), bound));
            self.types[var.index()] = bound;
        }

        let body_ty = self.type_of(body);
        self.scope.truncate(depth);

        if failed {
            TypeId::INVALID
        } else {
            body_ty
        }
    }

    /// Type a binding's variable gets: the declared type when annotated and
    /// the initializer fits it, the initializer's own type otherwise.
    fn bind_type(&mut self, annotation: AstId, init: AstId) -> TypeId {
        let init_ty = self.type_of(init);
        if annotation.is_null() {
            return init_ty;
        }
        let declared = self.type_of(annotation);
        if init_ty.is_invalid() || declared.is_invalid() {
            return TypeId::INVALID;
        }
        if self.universe.is_subtype_of(init_ty, declared) {
            return declared;
        }
        let diag = mismatched_types(
            self.arena.span(init),
            &self.display(declared),
            &self.display(init_ty),
            self.arena.span(annotation),
        );
        self.diagnostics.push(diag);
        TypeId::INVALID
    }

    fn infer_var(&mut self, id: AstId) -> TypeId {
        let name = self.text(id);
        let bound = self
            .scope
            .iter()
            .rev()
            .find(|(span, _)| span.text(self.source) == name)
            .map(|&(_, ty)| ty);
        match bound {
            Some(ty) => ty,
            None => {
                self.diagnostics
                    .push(variable_not_bound(self.arena.span(id), name));
                TypeId::INVALID
            }
        }
    }

    fn infer_type_name(&mut self, id: AstId) -> TypeId {
        match self.text(id) {
            "Bool" => TypeId::BOOL,
            "True" => TypeId::TRUE,
            "False" => TypeId::FALSE,
            "Void" => TypeId::VOID,
            name => {
                self.diagnostics
                    .push(type_not_bound(self.arena.span(id), name));
                TypeId::INVALID
            }
        }
    }
}
