//! Operation-counting cursor adapter.
//!
//! `Counted<C>` forwards exactly the capabilities of `C`, so it lands in the
//! same tier, and tallies the movement operations performed through it.
//! Copies share one counter, which makes the tallies visible after a cursor
//! has been passed by value.
//!
//! Offset arithmetic is forwarded for `isize` differences, which is what every
//! cursor in this crate uses.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::concepts::ops::{CursorTraits, Decrement, Dereference, Increment, Subscript, WriteThrough};

/// Snapshot of the operations recorded by a [`Counted`] cursor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounts {
    /// Pre- and post-increments.
    pub increments: usize,
    /// Pre- and post-decrements.
    pub decrements: usize,
    /// `+=`, `-=`, `x + n`, `n + x`, `x - n`.
    pub offsets: usize,
}

#[derive(Debug, Default)]
struct OpCounter {
    increments: Cell<usize>,
    decrements: Cell<usize>,
    offsets: Cell<usize>,
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// Cursor wrapper counting increments, decrements, and offset operations.
pub struct Counted<C> {
    inner: C,
    counter: Rc<OpCounter>,
}

impl<C> Counted<C> {
    pub fn new(inner: C) -> Self {
        Counted {
            inner,
            counter: Rc::default(),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    pub fn counts(&self) -> OpCounts {
        OpCounts {
            increments: self.counter.increments.get(),
            decrements: self.counter.decrements.get(),
            offsets: self.counter.offsets.get(),
        }
    }

    /// Zero the shared counter.
    pub fn reset(&self) {
        self.counter.increments.set(0);
        self.counter.decrements.set(0);
        self.counter.offsets.set(0);
    }

    fn with_inner(&self, inner: C) -> Self {
        Counted {
            inner,
            counter: Rc::clone(&self.counter),
        }
    }
}

impl<C: Clone> Clone for Counted<C> {
    fn clone(&self) -> Self {
        self.with_inner(self.inner.clone())
    }
}

impl<C: Default> Default for Counted<C> {
    fn default() -> Self {
        Counted::new(C::default())
    }
}

impl<C: PartialEq> PartialEq for Counted<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: PartialOrd> PartialOrd for Counted<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<C: fmt::Debug> fmt::Debug for Counted<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counted")
            .field("inner", &self.inner)
            .field("counts", &self.counts())
            .finish()
    }
}

impl<C: CursorTraits> CursorTraits for Counted<C> {
    type Value = C::Value;
    type Reference = C::Reference;
    type Difference = C::Difference;
    type Category = C::Category;
}

impl<C: Dereference> Dereference for Counted<C> {
    type Output = C::Output;

    #[inline]
    fn get(&self) -> C::Output {
        self.inner.get()
    }
}

impl<C: WriteThrough<V>, V> WriteThrough<V> for Counted<C> {
    #[inline]
    fn put(&mut self, value: V) {
        self.inner.put(value);
    }
}

impl<C> Increment for Counted<C>
where
    C: Increment<PostIncrement = C>,
{
    type PostIncrement = Self;

    #[inline]
    fn pre_inc(&mut self) -> &mut Self {
        bump(&self.counter.increments);
        self.inner.pre_inc();
        self
    }

    #[inline]
    fn post_inc(&mut self) -> Self {
        bump(&self.counter.increments);
        let old = self.inner.post_inc();
        self.with_inner(old)
    }
}

impl<C: Decrement> Decrement for Counted<C> {
    #[inline]
    fn pre_dec(&mut self) -> &mut Self {
        bump(&self.counter.decrements);
        self.inner.pre_dec();
        self
    }
}

impl<C: Subscript<isize>> Subscript<isize> for Counted<C> {
    type Output = C::Output;

    #[inline]
    fn at(&self, n: isize) -> C::Output {
        self.inner.at(n)
    }
}

impl<C: AddAssign<isize>> AddAssign<isize> for Counted<C> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        bump(&self.counter.offsets);
        self.inner += n;
    }
}

impl<C: SubAssign<isize>> SubAssign<isize> for Counted<C> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        bump(&self.counter.offsets);
        self.inner -= n;
    }
}

impl<C: Add<isize, Output = C>> Add<isize> for Counted<C> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        bump(&self.counter.offsets);
        let Counted { inner, counter } = self;
        Counted {
            inner: inner + n,
            counter,
        }
    }
}

impl<C> Add<Counted<C>> for isize
where
    isize: Add<C, Output = C>,
{
    type Output = Counted<C>;

    #[inline]
    fn add(self, cursor: Counted<C>) -> Counted<C> {
        bump(&cursor.counter.offsets);
        let Counted { inner, counter } = cursor;
        Counted {
            inner: self + inner,
            counter,
        }
    }
}

impl<C: Sub<isize, Output = C>> Sub<isize> for Counted<C> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        bump(&self.counter.offsets);
        let Counted { inner, counter } = self;
        Counted {
            inner: inner - n,
            counter,
        }
    }
}

impl<C: Sub<Output = isize>> Sub for Counted<C> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Self) -> isize {
        self.inner - other.inner
    }
}
