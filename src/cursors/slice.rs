//! Random-access cursor over contiguous storage.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::concepts::category::RandomAccessTag;
use crate::concepts::ops::{CursorTraits, Decrement, Dereference, Increment, Subscript};
use crate::cursor_error::CursorError;
use crate::debug_invariants::DebugInvariants;

/// Position within a borrowed slice.
///
/// Positions are signed so that offset arithmetic may pass through
/// out-of-range values; only dereferencing requires `0 <= position < len`.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: isize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    /// Cursor at `pos` within `slice`.
    pub fn at_position(slice: &'a [T], pos: isize) -> Self {
        let c = SliceCursor { slice, pos };
        crate::debug_invariants!(c.validate_invariants(), "SliceCursor::at_position");
        c
    }

    /// Past-the-end cursor of `slice`.
    ///
    /// # Panics
    /// If `slice.len()` exceeds `isize::MAX`, which only slices of zero-sized
    /// elements can reach.
    pub fn end(slice: &'a [T]) -> Self {
        let pos = match isize::try_from(slice.len()) {
            Ok(pos) => pos,
            Err(_) => panic!(
                "SliceCursor::end: {} elements do not fit an isize position",
                slice.len()
            ),
        };
        SliceCursor { slice, pos }
    }

    pub fn position(&self) -> isize {
        self.pos
    }

    /// Checked dereference at `offset` from the current position.
    pub fn try_at(&self, offset: isize) -> Result<&'a T, CursorError> {
        let Some(position) = self.pos.checked_add(offset) else {
            return Err(CursorError::OutOfRange {
                position: self.pos.saturating_add(offset),
                len: self.slice.len(),
            });
        };
        usize::try_from(position)
            .ok()
            .and_then(|i| self.slice.get(i))
            .ok_or(CursorError::OutOfRange {
                position,
                len: self.slice.len(),
            })
    }

    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        self.try_at(0)
    }

    fn same_slice(&self, other: &Self) -> bool {
        self.slice.as_ptr() == other.slice.as_ptr() && self.slice.len() == other.slice.len()
    }

    fn checked(&self, offset: isize) -> &'a T {
        match self.try_at(offset) {
            Ok(v) => v,
            Err(e) => panic!("SliceCursor: {e}"),
        }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        SliceCursor { slice: &[], pos: 0 }
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_slice(other) && self.pos == other.pos
    }
}

/// Cursors into different slices are unordered.
impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_slice(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> DebugInvariants for SliceCursor<'_, T> {
    fn validate_invariants(&self) -> Result<(), CursorError> {
        if self.pos < 0 || self.pos as usize > self.slice.len() {
            return Err(CursorError::OutOfRange {
                position: self.pos,
                len: self.slice.len(),
            });
        }
        Ok(())
    }
}

impl<'a, T> CursorTraits for SliceCursor<'a, T> {
    type Value = T;
    type Reference = &'a T;
    type Difference = isize;
    type Category = RandomAccessTag;
}

impl<'a, T> Dereference for SliceCursor<'a, T> {
    type Output = &'a T;

    /// # Panics
    ///
    /// Panics unless `0 <= position < len`.
    #[inline]
    fn get(&self) -> &'a T {
        self.checked(0)
    }
}

impl<'a, T> Subscript<isize> for SliceCursor<'a, T> {
    type Output = &'a T;

    #[inline]
    fn at(&self, n: isize) -> &'a T {
        self.checked(n)
    }
}

impl<T> Increment for SliceCursor<'_, T> {
    type PostIncrement = Self;

    #[inline]
    fn pre_inc(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    #[inline]
    fn post_inc(&mut self) -> Self {
        let old = *self;
        self.pos += 1;
        old
    }
}

impl<T> Decrement for SliceCursor<'_, T> {
    #[inline]
    fn pre_dec(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }
}

impl<T> AddAssign<isize> for SliceCursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for SliceCursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T> Add<isize> for SliceCursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, T> Add<SliceCursor<'a, T>> for isize {
    type Output = SliceCursor<'a, T>;

    #[inline]
    fn add(self, cursor: SliceCursor<'a, T>) -> SliceCursor<'a, T> {
        cursor + self
    }
}

impl<T> Sub<isize> for SliceCursor<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Sub for SliceCursor<'_, T> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Self) -> isize {
        debug_assert!(self.same_slice(&other), "difference of cursors into different slices");
        self.pos - other.pos
    }
}
