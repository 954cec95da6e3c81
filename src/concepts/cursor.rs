//! Cursor predicates, from `Readable` up to `RandomAccessCursor`.
//!
//! The supertraits of each predicate name its conjuncts and the operations a
//! generic algorithm may call. Requirements that only constrain result types
//! (exact reference type, proxy readability, category tag) are stated in the
//! blanket impl's `where` clause.
//!
//! For the traversal tiers the predicates form a strict chain:
//!
//! ```text
//! RandomAccessCursor ⇒ BidirectionalCursor ⇒ ForwardCursor ⇒ InputCursor ⇒ WeakCursor
//! ```

use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::bounds::{Copyable, EqualityComparable, Regular, Same, Semiregular, TotallyOrdered};
use super::category::{BidirectionalTag, ForwardTag, InputTag, RandomAccessTag, Refines};
use super::ops::{CursorTraits, Decrement, Dereference, Increment, Subscript, WriteThrough};

/// Dereferencing yields exactly the declared `Reference` type.
pub trait Readable: Semiregular + CursorTraits + Dereference {}
impl<T> Readable for T where
    T: Semiregular + CursorTraits + Dereference<Output = <T as CursorTraits>::Reference>
{
}

/// A `Value` can be written through the cursor.
pub trait Writable: Semiregular + CursorTraits {}
impl<T> Writable for T where
    T: Semiregular + CursorTraits + WriteThrough<<T as CursorTraits>::Value>
{
}

/// Has a difference type and both increments; post-increment may return a
/// proxy as long as it converts back into the cursor.
pub trait WeaklyIncrementable: CursorTraits + Increment {}
impl<T> WeaklyIncrementable for T
where
    T: CursorTraits + Increment,
    <T as Increment>::PostIncrement: Into<T>,
{
}

/// Post-increment returns the cursor type itself, and the cursor is regular.
pub trait Incrementable: Regular + WeaklyIncrementable + Increment<PostIncrement = Self> {}
impl<T> Incrementable for T where T: Regular + WeaklyIncrementable + Increment<PostIncrement = T> {}

/// Incrementable, copyable, and dereferenceable to anything at all.
pub trait WeakCursor: WeaklyIncrementable + Copyable + Dereference {}
impl<T> WeakCursor for T where T: WeaklyIncrementable + Copyable + Dereference {}

pub trait Cursor: WeakCursor + EqualityComparable {}
impl<T> Cursor for T where T: WeakCursor + EqualityComparable {}

pub trait WeakOutputCursor: Writable + WeakCursor {}
impl<T> WeakOutputCursor for T where T: Writable + WeakCursor {}

pub trait OutputCursor: WeakOutputCursor + Cursor {}
impl<T> OutputCursor for T where T: WeakOutputCursor + Cursor {}

/// Readable weak cursor whose post-increment result is itself readable.
pub trait WeakInputCursor: WeakCursor + Readable {}
impl<T> WeakInputCursor for T
where
    T: WeakCursor + Readable,
    <T as Increment>::PostIncrement: Readable,
{
}

pub trait InputCursor: WeakInputCursor + Cursor {}
impl<T> InputCursor for T
where
    T: WeakInputCursor + Cursor,
    <T as CursorTraits>::Category: Refines<InputTag>,
{
}

/// Multi-pass: an input cursor whose copies advance independently.
pub trait ForwardCursor: InputCursor + Incrementable {}
impl<T> ForwardCursor for T
where
    T: InputCursor + Incrementable,
    <T as CursorTraits>::Category: Refines<ForwardTag>,
{
}

/// Adds `--x` and `x--`. Both return the cursor type by signature, so the
/// reference type before and after a decrement is the same.
pub trait BidirectionalCursor: ForwardCursor + Decrement {}
impl<T> BidirectionalCursor for T
where
    T: ForwardCursor + Decrement,
    <T as CursorTraits>::Category: Refines<BidirectionalTag>,
{
}

/// Constant-time jumps, cursor differences, ordering, and subscript.
///
/// Beyond the supertraits, the blanket impl requires `x + n` and `n + x` to
/// produce the same type, `x - n` to produce a cursor, and `x[n]` to yield the
/// declared `Reference`.
pub trait RandomAccessCursor:
    BidirectionalCursor
    + TotallyOrdered
    + Sub<Self, Output = <Self as CursorTraits>::Difference>
    + AddAssign<<Self as CursorTraits>::Difference>
    + SubAssign<<Self as CursorTraits>::Difference>
    + Subscript<<Self as CursorTraits>::Difference>
{
}
impl<T> RandomAccessCursor for T
where
    T: BidirectionalCursor
        + TotallyOrdered
        + Sub<T, Output = <T as CursorTraits>::Difference>
        + Sub<<T as CursorTraits>::Difference, Output = T>
        + Add<<T as CursorTraits>::Difference>
        + AddAssign<<T as CursorTraits>::Difference>
        + SubAssign<<T as CursorTraits>::Difference>
        + Subscript<<T as CursorTraits>::Difference, Output = <T as CursorTraits>::Reference>,
    <T as CursorTraits>::Difference: Add<T>,
    <T as Add<<T as CursorTraits>::Difference>>::Output:
        Same<<<T as CursorTraits>::Difference as Add<T>>::Output>,
    <T as CursorTraits>::Category: Refines<RandomAccessTag>,
{
}
