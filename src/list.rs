//! Index-addressed doubly linked list.
//!
//! Nodes live in a slot arena (`Vec<Slot<T>>`) and link to each other by
//! [`SlotId`] instead of by pointer. Vacated slots are threaded onto a free
//! list and reused by later insertions, so a slot id stays valid for exactly
//! as long as its node is in the list.
//!
//! ```text
//!   slots
//!   ┌────┬────────────────────────────────────────────┐
//!   │ 0  │ Occupied { (A, 0), newer: 2,    older: -  }│ ◀── tail (least recent)
//!   │ 1  │ Vacant   { next_free: - }                  │ ◀── free
//!   │ 2  │ Occupied { (C, 2), newer: -,    older: 0  }│ ◀── head (most recent)
//!   └────┴────────────────────────────────────────────┘
//! ```
//!
//! The front of the list is the most recently used end. All link edits are
//! O(1); nothing here is `unsafe`.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Stable handle to a node in a [`List`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

struct Node<T> {
    value: T,
    /// Next entry towards the front (more recently used).
    newer: Option<SlotId>,
    /// Next entry towards the back (less recently used).
    older: Option<SlotId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<SlotId> },
}

/// A doubly linked list whose nodes are stored in a reusable slot arena.
pub(crate) struct List<T> {
    slots: Vec<Slot<T>>,
    free: Option<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// has to grow.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        List {
            slots: Vec::with_capacity(capacity),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Id of the most recently used node.
    #[inline]
    pub(crate) fn front(&self) -> Option<SlotId> {
        self.head
    }

    /// Id of the least recently used node.
    #[inline]
    pub(crate) fn back(&self) -> Option<SlotId> {
        self.tail
    }

    fn node(&self, id: SlotId) -> Option<&Node<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Returns the value stored at `id`, if the slot is occupied.
    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored at `id`.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Inserts `value` at the front and returns its slot id.
    pub(crate) fn push_front(&mut self, value: T) -> SlotId {
        let node = Node {
            value,
            newer: None,
            older: self.head,
        };

        let id = match self.free {
            Some(id) => {
                if let Slot::Vacant { next_free } = &self.slots[id.0] {
                    self.free = *next_free;
                }
                self.slots[id.0] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                SlotId(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(old) = self.node_mut(old_head) {
                    old.newer = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Unlinks `id` from its neighbours without freeing the slot.
    ///
    /// Leaves the node's own links untouched; callers overwrite them.
    fn detach(&mut self, id: SlotId) {
        let (newer, older) = match self.node(id) {
            Some(node) => (node.newer, node.older),
            None => return,
        };

        match newer {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.older = older;
                }
            }
            None => self.head = older,
        }

        match older {
            Some(o) => {
                if let Some(node) = self.node_mut(o) {
                    node.newer = newer;
                }
            }
            None => self.tail = newer,
        }
    }

    /// Moves `id` to the front. No-op if it already is the front or is not
    /// an occupied slot.
    pub(crate) fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) || self.node(id).is_none() {
            return;
        }

        self.detach(id);

        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.newer = None;
            node.older = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.newer = Some(id);
                }
            }
            // sole node, excluded by the head check above
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Removes the node at `id` and returns its value.
    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        self.node(id)?;
        self.detach(id);

        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let slot = core::mem::replace(&mut self.slots[id.0], vacant);
        self.free = Some(id);
        self.len -= 1;

        match slot {
            Slot::Occupied(node) => Some(node.value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Removes and returns the least recently used value.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    /// Drops every node; the arena keeps its allocation.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates values from front (most recent) to back (least recent).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Walks the list and panics if any structural invariant is broken.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        let mut seen = 0usize;
        let mut expected_newer = None;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            let node = self.node(id).expect("linked slot must be occupied");
            assert_eq!(node.newer, expected_newer, "broken newer link at {:?}", id);
            seen += 1;
            assert!(seen <= self.len, "cycle detected");
            expected_newer = Some(id);
            cursor = node.older;
        }

        assert_eq!(seen, self.len);
        assert_eq!(self.tail, expected_newer);
        if let Some(head) = self.head {
            assert_eq!(self.node(head).and_then(|n| n.newer), None);
        }
        if let Some(tail) = self.tail {
            assert_eq!(self.node(tail).and_then(|n| n.older), None);
        }
        if self.len == 1 {
            assert_eq!(self.head, self.tail);
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over list values.
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.node(id)?;
        self.next = node.older;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    fn values<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_front_orders_most_recent_first() {
        let mut list = List::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        list.validate();
        assert_eq!(values(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_single_node_is_head_and_tail() {
        let mut list = List::new();
        let id = list.push_front("only");
        assert_eq!(list.front(), Some(id));
        assert_eq!(list.back(), Some(id));
        list.validate();
    }

    #[test]
    fn test_move_to_front() {
        let mut list = List::new();
        let a = list.push_front('a');
        let b = list.push_front('b');
        let c = list.push_front('c');

        // tail to front
        list.move_to_front(a);
        list.validate();
        assert_eq!(values(&list), vec!['a', 'c', 'b']);

        // middle to front
        list.move_to_front(c);
        list.validate();
        assert_eq!(values(&list), vec!['c', 'a', 'b']);

        // already at front
        list.move_to_front(c);
        list.validate();
        assert_eq!(values(&list), vec!['c', 'a', 'b']);
        assert_eq!(list.back(), Some(b));
    }

    #[test]
    fn test_remove_relinks_neighbours() {
        let mut list = List::new();
        let a = list.push_front(1);
        let b = list.push_front(2);
        let c = list.push_front(3);

        assert_eq!(list.remove(b), Some(2));
        list.validate();
        assert_eq!(values(&list), vec![3, 1]);

        assert_eq!(list.remove(c), Some(3));
        list.validate();
        assert_eq!(list.front(), Some(a));

        assert_eq!(list.remove(a), Some(1));
        list.validate();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_remove_vacant_slot_is_none() {
        let mut list = List::new();
        let a = list.push_front(1);
        assert_eq!(list.remove(a), Some(1));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.get(a), None);
        list.move_to_front(a);
        list.validate();
    }

    #[test]
    fn test_pop_back() {
        let mut list = List::new();
        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        list.validate();
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = List::with_capacity(2);
        let a = list.push_front(1);
        let b = list.push_front(2);
        list.remove(a);
        list.remove(b);

        let c = list.push_front(3);
        let d = list.push_front(4);
        let mut reused = vec![c.0, d.0];
        reused.sort_unstable();
        assert_eq!(reused, vec![0, 1]);
        assert_eq!(list.slots.len(), 2);
        list.validate();
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = List::new();
        let id = list.push_front(String::from("old"));
        if let Some(v) = list.get_mut(id) {
            v.push_str("-new");
        }
        assert_eq!(list.get(id).map(String::as_str), Some("old-new"));
    }

    #[test]
    fn test_clear() {
        let mut list = List::new();
        for i in 0..10 {
            list.push_front(i);
        }
        list.clear();
        list.validate();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        list.push_front(42);
        assert_eq!(values(&list), vec![42]);
    }

    #[test]
    fn test_iter_is_exact_size() {
        let mut list = List::new();
        for i in 0..5 {
            list.push_front(i);
        }
        let iter = list.iter();
        assert_eq!(iter.len(), 5);
        let again = iter.clone();
        assert_eq!(iter.count(), again.count());
    }

    #[test]
    fn test_length_consistency_after_mixed_operations() {
        let mut list = List::new();
        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(list.push_front(i));
        }
        for (n, id) in ids.iter().enumerate() {
            if n % 3 == 0 {
                list.remove(*id);
            } else if n % 3 == 1 {
                list.move_to_front(*id);
            }
            list.validate();
        }
        assert_eq!(list.len(), 13);
        assert_eq!(list.iter().count(), 13);
    }
}
