//! # cursor-tiers
//!
//! cursor-tiers is a small compile-time capability framework for cursors. It
//! provides a layered taxonomy of predicates describing what a type supports
//! (equality, ordering, copy and construction semantics, dereference,
//! increment, decrement, random access) and tiered algorithms that pick the
//! cheapest implementation a cursor's capabilities allow, with no runtime
//! dispatch and no tagging by the caller.
//!
//! ## Features
//! - Predicates as traits with blanket impls: `T: RandomAccessCursor` holds
//!   exactly when `T` supports every operation of that tier
//! - A strict cursor chain: random access ⇒ bidirectional ⇒ forward ⇒ input ⇒ weak
//! - [`advance`](algs::advance::advance), [`distance`](algs::advance::distance),
//!   `next`, and `prev`, each with a stepping, a two-way stepping, and an
//!   O(1) implementation
//! - Forward-list, list, slice, and back-inserting cursors, plus an
//!   operation-counting adapter for checking which tier ran
//!
//! ## Usage
//!
//! ```rust
//! use cursor_tiers::prelude::*;
//!
//! let list: ForwardList<i32> = (0..10).collect();
//! let mut c = Counted::new(list.begin());
//! advance(&mut c, 3);
//! assert_eq!(*c.get(), 3);
//! assert_eq!(c.counts().increments, 3);
//!
//! let v: Vec<i32> = (0..10).collect();
//! let mut c = Counted::new(SliceCursor::new(&v));
//! advance(&mut c, 7);
//! assert_eq!(*c.get(), 7);
//! assert_eq!(c.counts().offsets, 1);
//! ```
//!
//! ## Invariant checking
//! Containers validate their link structure through [`DebugInvariants`] in
//! debug builds. Enable the `check-invariants` or `strict-invariants` feature
//! to keep those checks in release builds. The movement algorithms themselves
//! never check ranges: keeping a cursor inside its sequence is the caller's
//! job.

pub mod algs;
pub mod concepts;
pub mod cursor_error;
pub mod cursors;
pub mod debug_invariants;

pub use cursor_error::CursorError;
pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::advance::{Advance, Tier, advance, distance, next, prev, tier_of};
    pub use crate::concepts::{
        BidirectionalCursor, CategoryKind, Cursor, CursorCategory, CursorTraits, Decrement,
        Dereference, ForwardCursor, Increment, InputCursor, OutputCursor, RandomAccessCursor,
        Regular, Semiregular, Subscript, WriteThrough,
    };
    pub use crate::cursor_error::CursorError;
    pub use crate::cursors::{
        BackInserter, Counted, ForwardList, ForwardListCursor, List, ListCursor, OpCounts,
        SliceCursor,
    };
    pub use crate::debug_invariants::DebugInvariants;
}
