//! On-demand stack growth.
//!
//! The parser recurses once per parenthesized group, block and branch, and
//! the checker recurses once per child node. Input like `((((…))))` nested a
//! hundred thousand deep would overflow a default thread stack, so every
//! recursive entry point runs its body through [`ensure_sufficient_stack`].
//!
//! On wasm32 there is no `stacker` support and the closure runs directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if fewer than
/// [`RED_ZONE`] bytes remain on the current one.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
