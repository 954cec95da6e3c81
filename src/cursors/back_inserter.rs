//! Output-only cursor that appends to a shared vector.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::concepts::category::OutputTag;
use crate::concepts::ops::{CursorTraits, Dereference, Increment, WriteThrough};

/// Appends every value written through it to a shared `Vec`.
///
/// Copies alias the same sink, so writing through any copy appends to the
/// same sequence. Incrementing is a no-op and dereferencing yields the
/// inserter itself.
pub struct BackInserter<T> {
    sink: Rc<RefCell<Vec<T>>>,
}

impl<T> BackInserter<T> {
    pub fn new() -> Self {
        BackInserter {
            sink: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Inserter appending to `sink`.
    pub fn into_sink(sink: Rc<RefCell<Vec<T>>>) -> Self {
        BackInserter { sink }
    }

    pub fn len(&self) -> usize {
        self.sink.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sink.borrow().is_empty()
    }

    /// Take everything written so far, leaving the sink empty.
    pub fn take(&self) -> Vec<T> {
        self.sink.take()
    }
}

impl<T> Default for BackInserter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BackInserter<T> {
    fn clone(&self) -> Self {
        BackInserter {
            sink: Rc::clone(&self.sink),
        }
    }
}

impl<T> PartialEq for BackInserter<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}

impl<T> fmt::Debug for BackInserter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackInserter").field("len", &self.len()).finish()
    }
}

impl<T> CursorTraits for BackInserter<T> {
    type Value = T;
    type Reference = ();
    type Difference = isize;
    type Category = OutputTag;
}

impl<T> Dereference for BackInserter<T> {
    type Output = Self;

    fn get(&self) -> Self {
        self.clone()
    }
}

impl<T> WriteThrough<T> for BackInserter<T> {
    fn put(&mut self, value: T) {
        self.sink.borrow_mut().push(value);
    }
}

impl<T> Increment for BackInserter<T> {
    type PostIncrement = Self;

    fn pre_inc(&mut self) -> &mut Self {
        self
    }

    fn post_inc(&mut self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::advance::Advance;
    use crate::concepts::cursor::{InputCursor, OutputCursor, Readable, Writable};
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(BackInserter<String>: Writable, OutputCursor);
    assert_not_impl_any!(BackInserter<String>: Readable, InputCursor, Advance);

    #[test]
    fn writes_through_copies_share_the_sink() {
        let mut out = BackInserter::new();
        let mut alias = out.clone();
        out.put(1);
        out.pre_inc();
        alias.put(2);
        out.get().put(3);
        assert_eq!(out.len(), 3);
        assert_eq!(alias.take(), vec![1, 2, 3]);
        assert!(out.is_empty());
    }

    #[test]
    fn appends_to_existing_sink() {
        let sink = Rc::new(RefCell::new(vec!['a']));
        let mut out = BackInserter::into_sink(Rc::clone(&sink));
        out.put('b');
        assert_eq!(*sink.borrow(), vec!['a', 'b']);
        assert_eq!(out, BackInserter::into_sink(sink));
    }
}
