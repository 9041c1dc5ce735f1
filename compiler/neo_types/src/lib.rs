//! Type system for the Neo front end.
//!
//! - [`TypeUniverse`]: interned types with fixed ids for the primitives and
//!   `Bool = False | True`
//! - [`TypeChecker`]: memoized per-node typing over an [`AstArena`](neo_ir::AstArena),
//!   reporting into a [`DiagnosticEngine`](neo_diagnostic::DiagnosticEngine)
//!
//! Only booleans, `Void`, and their unions are typed. Integers, arithmetic,
//! lambdas, tuples, and calls parse but are reported as untypeable.

mod check;
mod type_id;
mod universe;

pub use check::TypeChecker;
pub use type_id::TypeId;
pub use universe::{TypeKind, TypeUniverse};
