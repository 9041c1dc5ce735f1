//! Node IDs and ranges for the flat AST.
//!
//! - `AstId(u32)` instead of `Box<AstNode>`: 4 bytes, O(1) equality
//! - `AstRange` for child lists stored in the arena's flat list storage

use std::fmt;

/// Index into the AST arena.
///
/// Ids are assigned densely by [`AstArena`](crate::AstArena) and never
/// reused. Two ids are reserved before any real node is pushed:
/// [`AstId::NULL`] for absent slots and [`AstId::INVALID`] for errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct AstId(u32);

impl AstId {
    /// Absent node, e.g. a lambda parameter without a type annotation.
    pub const NULL: AstId = AstId(0);

    /// Error sentinel returned by the parser after a diagnostic.
    pub const INVALID: AstId = AstId(1);

    /// Create a new `AstId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        AstId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the null sentinel.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == Self::NULL.0
    }

    /// Check if this is the invalid sentinel.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Debug for AstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AstId::NULL => write!(f, "AstId::NULL"),
            AstId::INVALID => write!(f, "AstId::INVALID"),
            AstId(raw) => write!(f, "AstId({raw})"),
        }
    }
}

impl fmt::Display for AstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Range of ids in the arena's flat list storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct AstRange {
    pub start: u32,
    pub len: u32,
}

impl AstRange {
    /// Empty range.
    pub const EMPTY: AstRange = AstRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        AstRange { start, len }
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of ids in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Convert to a `std::ops::Range` over the list storage.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len as usize
    }
}

impl fmt::Debug for AstRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AstRange({}..{})", self.start, self.start + self.len)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{AstId, AstRange};
    crate::static_assert_size!(AstId, 4);
    crate::static_assert_size!(AstRange, 8);
}
