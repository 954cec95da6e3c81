//! Compile-time capability predicates.
//!
//! This module provides the constraint taxonomy used by the tiered algorithms:
//! - [`bounds`]: predicates over arbitrary types (equality, ordering, copy and
//!   construction semantics, integral-ness)
//! - [`ops`]: the primitive operations a cursor type implements by hand
//! - [`category`]: cursor category tags and their refinement relation
//! - [`cursor`]: cursor predicates from `Readable` up to `RandomAccessCursor`
//!
//! Every predicate is a trait with a blanket impl; asking whether a type
//! satisfies one is writing `T: Predicate` in a bound.

pub mod bounds;
pub mod category;
pub mod cursor;
pub mod ops;

pub use bounds::*;
pub use category::*;
pub use cursor::*;
pub use ops::*;
