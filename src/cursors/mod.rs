//! Concrete cursor kinds, one per traversal capability, plus instrumentation.
//!
//! | Type                | Category        |
//! |---------------------|-----------------|
//! | [`ForwardListCursor`] | forward       |
//! | [`ListCursor`]      | bidirectional   |
//! | [`SliceCursor`]     | random access   |
//! | [`BackInserter`]    | output          |
//!
//! [`Counted`] wraps any of them and counts movement operations.

pub mod back_inserter;
pub mod counted;
pub mod forward_list;
pub mod list;
pub mod slice;

pub use back_inserter::BackInserter;
pub use counted::{Counted, OpCounts};
pub use forward_list::{ForwardList, ForwardListCursor};
pub use list::{List, ListCursor};
pub use slice::SliceCursor;
