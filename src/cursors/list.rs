//! Doubly linked list with a bidirectional cursor.
//!
//! Nodes live in an arena and link to each other by index. Link order is
//! independent of arena order, so `push_front` and `push_back` can interleave.

use std::fmt;
use std::ptr;

use crate::concepts::category::BidirectionalTag;
use crate::concepts::ops::{CursorTraits, Decrement, Dereference, Increment};
use crate::cursor_error::CursorError;
use crate::debug_invariants::DebugInvariants;

#[derive(Clone, Debug)]
struct Link<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list.
#[derive(Clone)]
pub struct List<T> {
    nodes: Vec<Link<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        List {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Link {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Link {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn begin(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: Some(self),
            at: self.head,
        }
    }

    /// Past-the-end cursor; decrementing it reaches the last element.
    pub fn end(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: Some(self),
            at: None,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for value in iter {
            list.push_back(value);
        }
        list.debug_assert_invariants();
        log::debug!("built list of {} nodes", list.len());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_list();
        let mut at = self.head;
        while let Some(i) = at {
            out.entry(&self.nodes[i].value);
            at = self.nodes[i].next;
        }
        out.finish()
    }
}

impl<T> DebugInvariants for List<T> {
    /// Walks forward from `head`, checking that every `prev` link mirrors the
    /// `next` link that led to it and that every node is reached exactly once.
    fn validate_invariants(&self) -> Result<(), CursorError> {
        let mut prev = None;
        let mut at = self.head;
        let mut visited = 0usize;
        while let Some(i) = at {
            let link = self.nodes.get(i).ok_or(CursorError::BrokenLink {
                node: i,
                reason: "link points outside the arena",
            })?;
            if link.prev != prev {
                return Err(CursorError::BrokenLink {
                    node: i,
                    reason: "prev link does not mirror next link",
                });
            }
            visited += 1;
            if visited > self.nodes.len() {
                return Err(CursorError::BrokenLink {
                    node: i,
                    reason: "cycle in next links",
                });
            }
            prev = Some(i);
            at = link.next;
        }
        if prev != self.tail {
            return Err(CursorError::BrokenLink {
                node: prev.unwrap_or(0),
                reason: "tail is not the last reachable node",
            });
        }
        if visited != self.nodes.len() {
            return Err(CursorError::BrokenLink {
                node: visited,
                reason: "unreachable nodes in arena",
            });
        }
        Ok(())
    }
}

/// Bidirectional cursor into a [`List`].
pub struct ListCursor<'a, T> {
    list: Option<&'a List<T>>,
    at: Option<usize>,
}

impl<'a, T> ListCursor<'a, T> {
    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        let list = self.list.ok_or(CursorError::Detached)?;
        let i = self.at.ok_or(CursorError::PastTheEnd)?;
        Ok(&list.nodes[i].value)
    }

    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListCursor<'_, T> {}

impl<T> Default for ListCursor<'_, T> {
    fn default() -> Self {
        ListCursor { list: None, at: None }
    }
}

impl<T> PartialEq for ListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        let same_list = match (self.list, other.list) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_list && self.at == other.at
    }
}

impl<T: fmt::Debug> fmt::Debug for ListCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_get() {
            Ok(v) => f.debug_tuple("ListCursor").field(v).finish(),
            Err(CursorError::Detached) => f.write_str("ListCursor(detached)"),
            Err(_) => f.write_str("ListCursor(end)"),
        }
    }
}

impl<T> DebugInvariants for ListCursor<'_, T> {
    fn validate_invariants(&self) -> Result<(), CursorError> {
        match (self.list, self.at) {
            (Some(list), Some(i)) if i >= list.nodes.len() => Err(CursorError::BrokenLink {
                node: i,
                reason: "cursor points outside the arena",
            }),
            (None, Some(_)) => Err(CursorError::Detached),
            _ => Ok(()),
        }
    }
}

impl<'a, T> CursorTraits for ListCursor<'a, T> {
    type Value = T;
    type Reference = &'a T;
    type Difference = isize;
    type Category = BidirectionalTag;
}

impl<'a, T> Dereference for ListCursor<'a, T> {
    type Output = &'a T;

    fn get(&self) -> &'a T {
        match self.try_get() {
            Ok(v) => v,
            Err(e) => panic!("ListCursor::get: {e}"),
        }
    }
}

impl<T> Increment for ListCursor<'_, T> {
    type PostIncrement = Self;

    #[inline]
    fn pre_inc(&mut self) -> &mut Self {
        if let (Some(list), Some(i)) = (self.list, self.at) {
            self.at = list.nodes[i].next;
        }
        self
    }

    #[inline]
    fn post_inc(&mut self) -> Self {
        let old = *self;
        self.pre_inc();
        old
    }
}

impl<T> Decrement for ListCursor<'_, T> {
    #[inline]
    fn pre_dec(&mut self) -> &mut Self {
        if let Some(list) = self.list {
            self.at = match self.at {
                Some(i) => list.nodes[i].prev,
                None => list.tail,
            };
        }
        self
    }
}
