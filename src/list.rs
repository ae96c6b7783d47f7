use std::fmt;

use tracing::{debug, trace};

use crate::interior::Interior;

/// Returned by [`List::find_first_occurrence`] when the value is absent.
pub const NOT_FOUND: i32 = -1;

pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) data: i32,
    pub(crate) next: Link,
}

impl Node {
    pub(crate) fn new(data: i32, next: Link) -> Box<Self> {
        Box::new(Node { data, next })
    }

    /// Walks `pos` links starting at this node.
    pub(crate) fn nth_mut(&mut self, pos: usize) -> Option<&mut Node> {
        let mut cur = Some(self);
        for _ in 0..pos {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Empty,
    NonEmpty,
}

/// Singly-linked list of `i32` values. The list owns its head slot; every
/// node is owned by exactly one predecessor or by the head.
pub struct List {
    pub(crate) head: Link,
}

impl List {
    pub fn new() -> Self {
        List { head: None }
    }

    pub fn state(&self) -> State {
        match self.head {
            None => State::Empty,
            Some(_) => State::NonEmpty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn peek(&self) -> Option<&i32> {
        self.head.as_ref().map(|node| &node.data)
    }

    pub fn peek_mut(&mut self) -> Option<&mut i32> {
        self.head.as_mut().map(|node| &mut node.data)
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.iter().nth(index).copied()
    }

    /// Restricted handle over the nodes: it can change values and links
    /// behind the first node but can never reseat the head slot.
    pub fn interior(&mut self) -> Interior<'_> {
        Interior::new(self.head.as_deref_mut())
    }

    fn node_at_mut(&mut self, pos: usize) -> Option<&mut Node> {
        self.head.as_deref_mut()?.nth_mut(pos)
    }

    pub fn insert_at_beginning(&mut self, value: i32) {
        let node = Node::new(value, self.head.take());
        self.head = Some(node);
    }

    pub fn insert_at_end(&mut self, value: i32) {
        let len = self.len();
        match len.checked_sub(1).and_then(|last| self.node_at_mut(last)) {
            Some(tail) => tail.next = Some(Node::new(value, None)),
            None => self.insert_at_beginning(value),
        }
    }

    /// Inserts `value` so that it becomes element `index`.
    ///
    /// Indices at or below zero insert at the head. Indices past the end
    /// saturate to an append; this never fails.
    pub fn insert_at_index(&mut self, value: i32, index: i32) {
        let Ok(index) = usize::try_from(index) else {
            return self.insert_at_beginning(value);
        };
        if index == 0 || self.is_empty() {
            return self.insert_at_beginning(value);
        }

        match self.node_at_mut(index - 1) {
            Some(prev) => {
                let next = prev.next.take();
                prev.next = Some(Node::new(value, next));
            }
            None => {
                debug!(index, "insert index past tail, appending");
                self.insert_at_end(value);
            }
        }
    }

    pub fn delete_at_beginning(&mut self) -> Option<i32> {
        self.head.take().map(|node| {
            let Node { data, next } = *node;
            self.head = next;
            trace!(data, "released head node");
            data
        })
    }

    pub fn delete_at_end(&mut self) -> Option<i32> {
        let len = self.len();
        match len {
            0 => {
                trace!("delete_at_end on empty list");
                None
            }
            1 => self.delete_at_beginning(),
            _ => {
                let prev = self.node_at_mut(len - 2)?;
                let tail = prev.next.take()?;
                trace!(data = tail.data, "released tail node");
                Some(tail.data)
            }
        }
    }

    /// Releases every node. Calling it on an empty list does nothing.
    pub fn delete_list(&mut self) {
        let mut released = 0usize;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            released += 1;
        }
        if released > 0 {
            debug!(released, "list torn down");
        }
    }

    pub fn position(&self, value: i32) -> Option<usize> {
        self.iter().position(|&data| data == value)
    }

    /// 0-based index of the first node holding `value`, or [`NOT_FOUND`].
    pub fn find_first_occurrence(&self, value: i32) -> i32 {
        self.position(value)
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(NOT_FOUND)
    }

    /// Bubble sort over the chain. Values are exchanged between adjacent
    /// nodes, the links never change. Only a strictly greater left value
    /// swaps, so equal values keep their relative order.
    pub fn sort_list(&mut self) {
        let mut passes = 0usize;
        let mut swapped = true;
        while swapped {
            swapped = false;
            passes += 1;
            let mut cur = self.head.as_deref_mut();
            while let Some(node) = cur {
                if let Some(next) = node.next.as_deref_mut() {
                    if node.data > next.data {
                        std::mem::swap(&mut node.data, &mut next.data);
                        swapped = true;
                    }
                }
                cur = node.next.as_deref_mut();
            }
        }
        trace!(passes, "sort finished");
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for List {
    fn drop(&mut self) {
        // iterative so long chains do not recurse through Box::drop
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for List {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        // keep a cursor on the tail slot instead of re-walking per value
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        for value in iter {
            let node = slot.insert(Node::new(value, None));
            slot = &mut node.next;
        }
    }
}
