//! The type universe: an append-only, structurally deduplicated store of
//! every type one compilation unit mentions.

use rustc_hash::FxHashMap;

use crate::TypeId;

/// Structure of a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Void,
    True,
    False,
    Invalid,
    Unknown,
    /// Canonical form has `left < right`.
    Union { left: TypeId, right: TypeId },
}

/// Owns all types of one unit and answers subtyping queries.
#[derive(Clone, Debug)]
pub struct TypeUniverse {
    types: Vec<TypeKind>,
    unions: FxHashMap<(TypeId, TypeId), TypeId>,
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeUniverse {
    /// A universe holding the primitives and `Bool` at their fixed ids.
    pub fn new() -> Self {
        let mut universe = TypeUniverse {
            types: vec![
                TypeKind::Void,    // TypeId::VOID
                TypeKind::True,    // TypeId::TRUE
                TypeKind::False,   // TypeId::FALSE
                TypeKind::Invalid, // TypeId::INVALID
                TypeKind::Unknown, // TypeId::UNKNOWN
            ],
            unions: FxHashMap::default(),
        };
        let bool_id = universe.push_union(TypeId::FALSE, TypeId::TRUE);
        debug_assert_eq!(bool_id, TypeId::BOOL);
        universe
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: the primitives are pre-seeded.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// # Panics
    /// Panics on an id this universe did not produce.
    pub fn get(&self, id: TypeId) -> &TypeKind {
        &self.types[id.index()]
    }

    /// The union of `a` and `b`.
    ///
    /// `a ∪ a` is `a`; otherwise the pair is ordered and looked up, so every
    /// union is allocated at most once.
    pub fn push_union(&mut self, a: TypeId, b: TypeId) -> TypeId {
        if a == b {
            return a;
        }
        let key = (a.min(b), a.max(b));
        if let Some(&existing) = self.unions.get(&key) {
            return existing;
        }
        let id = TypeId::from_raw(
            u32::try_from(self.types.len())
                .unwrap_or_else(|_| panic!("type universe exceeded u32::MAX types")),
        );
        self.types.push(TypeKind::Union {
            left: key.0,
            right: key.1,
        });
        self.unions.insert(key, id);
        id
    }

    /// `a <: b`.
    ///
    /// Reflexive; a type is below a union if it is below either branch; a
    /// union is below `b` if both branches are.
    pub fn is_subtype_of(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        if let TypeKind::Union { left, right } = *self.get(b) {
            if self.is_subtype_of(a, left) || self.is_subtype_of(a, right) {
                return true;
            }
        }
        if let TypeKind::Union { left, right } = *self.get(a) {
            return self.is_subtype_of(left, b) && self.is_subtype_of(right, b);
        }
        false
    }

    /// Human-readable name: `Bool` for [`TypeId::BOOL`], `A | B` for other
    /// unions.
    pub fn display(&self, id: TypeId) -> String {
        if id == TypeId::BOOL {
            return "Bool".to_string();
        }
        match *self.get(id) {
            TypeKind::Void => "Void".to_string(),
            TypeKind::True => "True".to_string(),
            TypeKind::False => "False".to_string(),
            TypeKind::Invalid => "Invalid".to_string(),
            TypeKind::Unknown => "Unknown".to_string(),
            TypeKind::Union { left, right } => {
                format!("{} | {}", self.display(left), self.display(right))
            }
        }
    }
}

#[cfg(test)]
mod tests;
