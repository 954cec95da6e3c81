//! CursorError: error type for the checked cursor and container APIs
//!
//! The tiered algorithms never fail at runtime; moving a cursor outside its
//! traversable range is a caller precondition. This type only surfaces from
//! the checked accessors (`try_get`, `try_at`) and from
//! [`DebugInvariants::validate_invariants`](crate::DebugInvariants).

use thiserror::Error;

/// Unified error type for cursor-tiers checked operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor sits outside the half-open range of its sequence.
    #[error("cursor position {position} is outside 0..={len}")]
    OutOfRange { position: isize, len: usize },
    /// Dereferenced a past-the-end cursor.
    #[error("cursor is past the end of its sequence")]
    PastTheEnd,
    /// The cursor was default-constructed and refers to no sequence.
    #[error("cursor is not attached to a sequence")]
    Detached,
    /// A linked container has an inconsistent link at `node`.
    #[error("broken link at node {node}: {reason}")]
    BrokenLink { node: usize, reason: &'static str },
}
