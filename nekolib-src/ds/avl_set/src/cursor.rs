use std::{fmt, ops::Deref, ptr};

use crate::{node::NodeId, AvlSet};

/// A position in an [`AvlSet`]: either an element or the end, one past the
/// maximum.
///
/// The cursor borrows its set, so the set cannot be modified while the
/// cursor is alive.
pub struct Cursor<'a, T> {
    set: &'a AvlSet<T>,
    node: Option<NodeId>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(set: &'a AvlSet<T>, node: Option<NodeId>) -> Self {
        Self { set, node }
    }

    pub fn is_end(&self) -> bool { self.node.is_none() }

    pub fn get(&self) -> Option<&'a T> {
        let set = self.set;
        self.node.map(|t| &set.arena[t].key)
    }

    /// The number of elements before this position; `len()` at the end.
    pub fn index(&self) -> usize {
        match self.node {
            Some(t) => self.set.arena.position(t),
            None => self.set.len(),
        }
    }

    /// Moves to the next element, or to the end from the maximum.
    ///
    /// # Panics
    /// Panics if the cursor is at the end.
    pub fn move_next(&mut self) {
        let t = self.node.expect("advanced a cursor past the end");
        self.node = self.set.arena.successor(t);
    }

    /// Moves to the previous element; from the end, to the maximum.
    ///
    /// The cursor must not be at the minimum. Moving back from the minimum
    /// leaves the cursor at the end, which is not to be relied on.
    pub fn move_prev(&mut self) {
        let set = self.set;
        self.node = match self.node {
            Some(t) => set.arena.predecessor(t),
            None => set.root.map(|root| set.arena.max(root)),
        };
    }

    pub fn succ(mut self) -> Self {
        self.move_next();
        self
    }
    pub fn pred(mut self) -> Self {
        self.move_prev();
        self
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self { *self }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.set, other.set) && self.node == other.node
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;
    fn deref(&self) -> &T { self.get().expect("dereferenced the end cursor") }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(key) => f.debug_tuple("Cursor").field(key).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
