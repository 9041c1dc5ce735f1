//! Type handle.

use std::fmt;

/// A 32-bit index into the [`TypeUniverse`](crate::TypeUniverse).
///
/// Types are compared by index: the universe deduplicates structurally, so
/// equal ids mean equal types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-seeded at fixed indices by `TypeUniverse::new`.

    /// The value of `{}` and of a trailing `;`.
    pub const VOID: Self = Self(0);
    /// The singleton type of `true`.
    pub const TRUE: Self = Self(1);
    /// The singleton type of `false`.
    pub const FALSE: Self = Self(2);
    /// Result of any ill-typed node. Propagates without further reports.
    pub const INVALID: Self = Self(3);
    /// Memo placeholder for a node not yet typed.
    pub const UNKNOWN: Self = Self(4);
    /// `False | True`.
    pub const BOOL: Self = Self(5);

    /// Number of pre-seeded types.
    pub const PRESEEDED: u32 = 6;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeId::VOID => write!(f, "TypeId::VOID"),
            TypeId::TRUE => write!(f, "TypeId::TRUE"),
            TypeId::FALSE => write!(f, "TypeId::FALSE"),
            TypeId::INVALID => write!(f, "TypeId::INVALID"),
            TypeId::UNKNOWN => write!(f, "TypeId::UNKNOWN"),
            TypeId::BOOL => write!(f, "TypeId::BOOL"),
            TypeId(raw) => write!(f, "TypeId({raw})"),
        }
    }
}

neo_ir::static_assert_size!(TypeId, 4);
