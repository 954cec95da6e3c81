//! Tiered cursor movement: `advance`, `distance`, `next`, `prev`.
//!
//! Each operation has one implementation per tier, selected through the
//! cursor's declared category tag:
//!
//! | Category tag                  | Tier            | `advance` cost            |
//! |-------------------------------|-----------------|---------------------------|
//! | `InputTag`, `ForwardTag`      | `Input`         | `n` pre-increments        |
//! | `BidirectionalTag`            | `Bidirectional` | `|n|` increments/decrements |
//! | `RandomAccessTag`             | `RandomAccess`  | one `+=`                  |
//!
//! The strategy for a tag is only implemented for cursors satisfying that
//! tag's predicate, so a cursor that claims a category its operations do not
//! back fails to satisfy [`Advance`] at compile time. Output-only cursors have
//! no strategy at all.
//!
//! Moving outside the traversable range is the caller's responsibility and is
//! not checked. In particular a negative `n` on an input-tier cursor is a
//! precondition violation; debug builds assert on it.

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::concepts::category::{BidirectionalTag, ForwardTag, InputTag, RandomAccessTag};
use crate::concepts::cursor::{BidirectionalCursor, ForwardCursor, InputCursor, RandomAccessCursor};
use crate::concepts::ops::CursorTraits;

/// Which specialization moves a cursor.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    /// Forward-only stepping.
    Input,
    /// Stepping in either direction.
    Bidirectional,
    /// Constant-time offset arithmetic.
    RandomAccess,
}

/// Per-category implementation of the tiered operations for cursor `I`.
pub trait AdvanceStrategy<I: CursorTraits> {
    const TIER: Tier;
    fn advance(cursor: &mut I, n: I::Difference);
    fn distance(first: &I, last: &I) -> I::Difference;
}

impl<I: InputCursor> AdvanceStrategy<I> for InputTag {
    const TIER: Tier = Tier::Input;

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) {
        step_forward(cursor, n);
    }

    #[inline]
    fn distance(first: &I, last: &I) -> I::Difference {
        count_steps(first, last)
    }
}

impl<I: ForwardCursor> AdvanceStrategy<I> for ForwardTag {
    const TIER: Tier = Tier::Input;

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) {
        step_forward(cursor, n);
    }

    #[inline]
    fn distance(first: &I, last: &I) -> I::Difference {
        count_steps(first, last)
    }
}

impl<I: BidirectionalCursor> AdvanceStrategy<I> for BidirectionalTag {
    const TIER: Tier = Tier::Bidirectional;

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) {
        step_both_ways(cursor, n);
    }

    #[inline]
    fn distance(first: &I, last: &I) -> I::Difference {
        count_steps(first, last)
    }
}

impl<I: RandomAccessCursor> AdvanceStrategy<I> for RandomAccessTag {
    const TIER: Tier = Tier::RandomAccess;

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) {
        if n != I::Difference::zero() {
            *cursor += n;
        }
    }

    #[inline]
    fn distance(first: &I, last: &I) -> I::Difference {
        last.clone() - first.clone()
    }
}

fn step_forward<I: InputCursor>(cursor: &mut I, mut n: I::Difference) {
    debug_assert!(n >= I::Difference::zero(), "input-tier cursors cannot move backwards");
    while n > I::Difference::zero() {
        cursor.pre_inc();
        n = n - I::Difference::one();
    }
}

fn step_both_ways<I: BidirectionalCursor>(cursor: &mut I, mut n: I::Difference) {
    if n >= I::Difference::zero() {
        while n > I::Difference::zero() {
            cursor.pre_inc();
            n = n - I::Difference::one();
        }
    } else {
        while n < I::Difference::zero() {
            cursor.pre_dec();
            n = n + I::Difference::one();
        }
    }
}

fn count_steps<I: InputCursor>(first: &I, last: &I) -> I::Difference {
    let mut it = first.clone();
    let mut n = I::Difference::zero();
    while it != *last {
        it.pre_inc();
        n = n + I::Difference::one();
    }
    n
}

/// An input cursor with exactly one live movement strategy.
///
/// Implemented for every [`InputCursor`] whose category tag has an
/// [`AdvanceStrategy`]; generic code bounds on `Advance` to call the free
/// functions of this module.
///
/// The tier comes from the declared `Category`, and the declared category
/// must be backed by the operations. A cursor that is a [`ForwardCursor`]
/// but declares `RandomAccessTag` without the random-access operations has
/// no `Advance` impl at all, rather than falling back to stepping.
pub trait Advance: InputCursor {
    const TIER: Tier;
    fn advance_by(&mut self, n: Self::Difference);
    fn distance_to(&self, last: &Self) -> Self::Difference;
}

impl<I> Advance for I
where
    I: InputCursor,
    <I as CursorTraits>::Category: AdvanceStrategy<I>,
{
    const TIER: Tier = <<I as CursorTraits>::Category as AdvanceStrategy<I>>::TIER;

    #[inline]
    fn advance_by(&mut self, n: Self::Difference) {
        <<I as CursorTraits>::Category as AdvanceStrategy<I>>::advance(self, n);
    }

    #[inline]
    fn distance_to(&self, last: &Self) -> Self::Difference {
        <<I as CursorTraits>::Category as AdvanceStrategy<I>>::distance(self, last)
    }
}

/// Move `cursor` by `n` positions using the cheapest strategy its tier allows.
///
/// `n` must keep the cursor inside its traversable range, and must be
/// non-negative for input-tier cursors.
///
/// # Example
/// ```
/// use cursor_tiers::prelude::*;
///
/// let data = [10, 20, 30, 40];
/// let mut c = SliceCursor::new(&data);
/// advance(&mut c, 3);
/// assert_eq!(*c.get(), 40);
/// advance(&mut c, -2);
/// assert_eq!(*c.get(), 20);
/// ```
#[inline]
pub fn advance<I: Advance>(cursor: &mut I, n: I::Difference) {
    cursor.advance_by(n);
}

/// Number of increments taking `first` to `last`.
///
/// `last` must be reachable from `first`.
#[inline]
pub fn distance<I: Advance>(first: &I, last: &I) -> I::Difference {
    first.distance_to(last)
}

/// `cursor` moved forward by `n`.
#[inline]
pub fn next<I: Advance>(mut cursor: I, n: I::Difference) -> I {
    cursor.advance_by(n);
    cursor
}

/// `cursor` moved backward by `n`.
#[inline]
pub fn prev<I>(mut cursor: I, n: I::Difference) -> I
where
    I: Advance + BidirectionalCursor,
{
    cursor.advance_by(-n);
    cursor
}

/// The tier [`advance`] uses for `I`.
pub const fn tier_of<I: Advance>() -> Tier {
    I::TIER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::category::CursorCategory;
    use crate::concepts::ops::{Decrement, Dereference, Increment, Subscript};
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::ops::{Add, AddAssign, Sub, SubAssign};

    /// Unbounded cursor over the integers; dereferences to its position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
    struct Iota<C> {
        at: isize,
        tag: C,
    }

    impl<C: CursorCategory> Iota<C> {
        fn new(at: isize) -> Self {
            Iota { at, tag: C::default() }
        }
    }

    impl<C: CursorCategory> CursorTraits for Iota<C> {
        type Value = isize;
        type Reference = isize;
        type Difference = isize;
        type Category = C;
    }

    impl<C> Dereference for Iota<C> {
        type Output = isize;
        fn get(&self) -> isize {
            self.at
        }
    }

    impl<C: Copy> Increment for Iota<C> {
        type PostIncrement = Self;
        fn pre_inc(&mut self) -> &mut Self {
            self.at += 1;
            self
        }
        fn post_inc(&mut self) -> Self {
            let old = *self;
            self.at += 1;
            old
        }
    }

    impl<C> Decrement for Iota<C> {
        fn pre_dec(&mut self) -> &mut Self {
            self.at -= 1;
            self
        }
    }

    impl<C> AddAssign<isize> for Iota<C> {
        fn add_assign(&mut self, n: isize) {
            self.at += n;
        }
    }

    impl<C> SubAssign<isize> for Iota<C> {
        fn sub_assign(&mut self, n: isize) {
            self.at -= n;
        }
    }

    impl<C> Add<isize> for Iota<C> {
        type Output = Self;
        fn add(mut self, n: isize) -> Self {
            self.at += n;
            self
        }
    }

    impl<C> Add<Iota<C>> for isize {
        type Output = Iota<C>;
        fn add(self, mut c: Iota<C>) -> Iota<C> {
            c.at += self;
            c
        }
    }

    impl<C> Sub<isize> for Iota<C> {
        type Output = Self;
        fn sub(mut self, n: isize) -> Self {
            self.at -= n;
            self
        }
    }

    impl<C> Sub for Iota<C> {
        type Output = isize;
        fn sub(self, other: Self) -> isize {
            self.at - other.at
        }
    }

    impl<C> Subscript<isize> for Iota<C> {
        type Output = isize;
        fn at(&self, n: isize) -> isize {
            self.at + n
        }
    }

    type InputIota = Iota<InputTag>;
    type ForwardIota = Iota<ForwardTag>;
    type BidiIota = Iota<BidirectionalTag>;
    type RandomIota = Iota<RandomAccessTag>;

    assert_impl_all!(RandomIota: RandomAccessCursor, Advance);
    assert_impl_all!(BidiIota: BidirectionalCursor, Advance);
    assert_not_impl_any!(BidiIota: RandomAccessCursor);
    assert_impl_all!(ForwardIota: ForwardCursor, Advance);
    assert_not_impl_any!(ForwardIota: BidirectionalCursor);
    assert_impl_all!(InputIota: InputCursor, Advance);
    assert_not_impl_any!(InputIota: ForwardCursor);

    #[test]
    fn tier_follows_category() {
        assert_eq!(tier_of::<InputIota>(), Tier::Input);
        assert_eq!(tier_of::<ForwardIota>(), Tier::Input);
        assert_eq!(tier_of::<BidiIota>(), Tier::Bidirectional);
        assert_eq!(tier_of::<RandomIota>(), Tier::RandomAccess);
    }

    #[test]
    fn every_tier_reaches_the_same_position() {
        for n in [0isize, 1, 5, 1000] {
            let mut a = InputIota::new(0);
            let mut b = BidiIota::new(0);
            let mut c = RandomIota::new(0);
            advance(&mut a, n);
            advance(&mut b, n);
            advance(&mut c, n);
            assert_eq!(a.get(), n);
            assert_eq!(b.get(), n);
            assert_eq!(c.get(), n);
        }
    }

    #[test]
    fn bidirectional_and_random_access_go_backwards() {
        let mut b = BidiIota::new(0);
        let mut c = RandomIota::new(0);
        advance(&mut b, -2);
        advance(&mut c, -2);
        assert_eq!(b.get(), -2);
        assert_eq!(c.get(), -2);
    }

    #[test]
    fn distance_counts_or_subtracts() {
        let first = ForwardIota::new(3);
        assert_eq!(distance(&first, &ForwardIota::new(10)), 7);
        let first = RandomIota::new(-4);
        assert_eq!(distance(&first, &RandomIota::new(6)), 10);
        assert_eq!(distance(&first, &first), 0);
    }

    #[test]
    fn next_and_prev_are_inverse() {
        let c = BidiIota::new(5);
        assert_eq!(prev(next(c, 9), 9), c);
        let r = RandomIota::new(5);
        assert_eq!(next(prev(r, 12), 12), r);
    }

    #[test]
    fn strategies_match_on_random_access() {
        for n in [-10isize, 0, 10] {
            let mut looped = RandomIota::new(0);
            step_both_ways(&mut looped, n);
            let mut jumped = RandomIota::new(0);
            advance(&mut jumped, n);
            assert_eq!(looped, jumped);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot move backwards")]
    fn input_tier_rejects_negative_offsets_in_debug() {
        let mut c = ForwardIota::new(0);
        advance(&mut c, -1);
    }

    #[test]
    fn tier_json_roundtrip() {
        let s = serde_json::to_string(&Tier::RandomAccess).unwrap();
        let back: Tier = serde_json::from_str(&s).unwrap();
        assert_eq!(back, Tier::RandomAccess);
    }
}
