//! Singly linked list with a forward-only cursor.

use std::fmt;
use std::ptr;

use crate::concepts::category::ForwardTag;
use crate::concepts::ops::{CursorTraits, Dereference, Increment};
use crate::cursor_error::CursorError;
use crate::debug_invariants::DebugInvariants;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly linked list of boxed nodes.
pub struct ForwardList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        ForwardList { head: None, len: 0 }
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Cursor at the first element (equal to [`end`](Self::end) when empty).
    pub fn begin(&self) -> ForwardListCursor<'_, T> {
        ForwardListCursor {
            node: self.head.as_deref(),
        }
    }

    /// Past-the-end cursor.
    pub fn end(&self) -> ForwardListCursor<'_, T> {
        ForwardListCursor { node: None }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = ForwardList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list.debug_assert_invariants();
        log::debug!("built forward list of {} nodes", list.len);
        list
    }
}

impl<T> Drop for ForwardList<T> {
    // Unlink iteratively so long lists do not recurse through `Box` drops.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            list.entry(&node.value);
            cur = node.next.as_deref();
        }
        list.finish()
    }
}

impl<T> DebugInvariants for ForwardList<T> {
    fn validate_invariants(&self) -> Result<(), CursorError> {
        let mut count = 0usize;
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            count += 1;
            if count > self.len {
                return Err(CursorError::BrokenLink {
                    node: count - 1,
                    reason: "more nodes reachable than recorded length",
                });
            }
            cur = node.next.as_deref();
        }
        if count != self.len {
            return Err(CursorError::BrokenLink {
                node: count,
                reason: "fewer nodes reachable than recorded length",
            });
        }
        Ok(())
    }
}

/// Forward-only cursor into a [`ForwardList`].
///
/// The default cursor is the past-the-end position of every list.
pub struct ForwardListCursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> ForwardListCursor<'a, T> {
    /// Checked dereference.
    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        self.node.map(|n| &n.value).ok_or(CursorError::PastTheEnd)
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

impl<T> Clone for ForwardListCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ForwardListCursor<'_, T> {}

impl<T> Default for ForwardListCursor<'_, T> {
    fn default() -> Self {
        ForwardListCursor { node: None }
    }
}

impl<T> PartialEq for ForwardListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardListCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(n) => f.debug_tuple("ForwardListCursor").field(&n.value).finish(),
            None => f.write_str("ForwardListCursor(end)"),
        }
    }
}

impl<'a, T> CursorTraits for ForwardListCursor<'a, T> {
    type Value = T;
    type Reference = &'a T;
    type Difference = isize;
    type Category = ForwardTag;
}

impl<'a, T> Dereference for ForwardListCursor<'a, T> {
    type Output = &'a T;

    /// # Panics
    ///
    /// Panics on the past-the-end cursor.
    fn get(&self) -> &'a T {
        match self.try_get() {
            Ok(v) => v,
            Err(e) => panic!("ForwardListCursor::get: {e}"),
        }
    }
}

impl<T> Increment for ForwardListCursor<'_, T> {
    type PostIncrement = Self;

    #[inline]
    fn pre_inc(&mut self) -> &mut Self {
        self.node = self.node.and_then(|n| n.next.as_deref());
        self
    }

    #[inline]
    fn post_inc(&mut self) -> Self {
        let old = *self;
        self.pre_inc();
        old
    }
}
