//! Primitive cursor operations.
//!
//! These are the building blocks the cursor predicates test for: the declared
//! associated types of a cursor and the operator-like methods a cursor type
//! implements by hand. None of them carries semantics beyond its signature;
//! the predicates in [`cursor`](super::cursor) decide which combinations make
//! a cursor of a given tier.

use super::bounds::SignedIntegral;
use super::category::CursorCategory;

/// Declared types of a cursor.
pub trait CursorTraits {
    /// Type of the elements the cursor traverses.
    type Value;
    /// What dereferencing yields (often `&'a Value`).
    type Reference;
    /// Signed distance between two positions.
    type Difference: SignedIntegral;
    type Category: CursorCategory;
}

/// `*x`: produce whatever the cursor points at.
pub trait Dereference {
    type Output;
    fn get(&self) -> Self::Output;
}

/// `*x = value`: write through the cursor.
pub trait WriteThrough<V> {
    fn put(&mut self, value: V);
}

/// `++x` and `x++`.
///
/// Post-increment returns the old position, possibly as a proxy type.
pub trait Increment: Sized {
    type PostIncrement;
    fn pre_inc(&mut self) -> &mut Self;
    fn post_inc(&mut self) -> Self::PostIncrement;
}

/// `--x` and `x--`.
pub trait Decrement: Sized {
    fn pre_dec(&mut self) -> &mut Self;

    fn post_dec(&mut self) -> Self
    where
        Self: Clone,
    {
        let old = self.clone();
        self.pre_dec();
        old
    }
}

/// `x[n]`: dereference at an offset without moving.
pub trait Subscript<D> {
    type Output;
    fn at(&self, n: D) -> Self::Output;
}
