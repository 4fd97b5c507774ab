//! Ordered set on an AVL tree.
//!
//! Nodes live in an arena and refer to each other by index, including a
//! link to the parent; this lets a [`Cursor`] step to the neighboring
//! element without walking down from the root again. Each node also caches
//! the size of its subtree, which gives [`AvlSet::nth`] and
//! [`AvlSet::rank`] in logarithmic time.
//!
//! ```
//! use avl_set::AvlSet;
//!
//! let mut set: AvlSet<_> = [5, 3, 8, 1, 4, 7, 9].into();
//! assert_eq!(set.len(), 7);
//! assert!(set.find(&6).is_end());
//! assert_eq!(*set.lower_bound(&6), 7);
//!
//! set.erase(&5);
//! assert!(set.iter().eq(&[1, 3, 4, 7, 8, 9]));
//! assert_eq!(*set.end().pred(), 9);
//! ```

use std::{cmp::Ordering, fmt};

mod balance;
mod cursor;
mod debug;
mod iter;
mod node;

pub use cursor::Cursor;
pub use debug::Violation;
pub use iter::{IntoIter, Iter};

use node::{Arena, NodeId};

pub struct AvlSet<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
}

impl<T> AvlSet<T> {
    pub fn new() -> Self { Self { arena: Arena::new(), root: None } }

    pub fn len(&self) -> usize { self.arena.count(self.root) }
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn iter(&self) -> Iter<'_, T> { Iter::new(self) }

    /// A cursor at the minimum, or [`end`](Self::end) if the set is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.root.map(|root| self.arena.min(root)))
    }
    pub fn end(&self) -> Cursor<'_, T> { Cursor::new(self, None) }

    pub fn first(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.arena.min(root)].key)
    }
    pub fn last(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.arena.max(root)].key)
    }

    /// The `i`-th smallest element, 0-indexed.
    pub fn nth(&self, i: usize) -> Option<&T> {
        self.arena.select(self.root, i).map(|t| &self.arena[t].key)
    }
}

impl<T: Ord> AvlSet<T> {
    /// Returns `false` and leaves the set untouched if an equal element is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut par = None;
        let mut cur = self.root;
        let mut dir = Ordering::Equal;
        while let Some(t) = cur {
            dir = value.cmp(&self.arena[t].key);
            cur = match dir {
                Ordering::Equal => return false,
                Ordering::Less => self.arena[t].left,
                Ordering::Greater => self.arena[t].right,
            };
            par = Some(t);
        }

        let new = self.arena.alloc(value, par);
        match (par, dir) {
            (Some(p), Ordering::Less) => self.arena[p].left = Some(new),
            (Some(p), _) => self.arena[p].right = Some(new),
            (None, _) => self.root = Some(new),
        }
        self.arena.retrace(par, &mut self.root);
        true
    }

    /// Returns whether an element was removed.
    ///
    /// A node with two children is replaced by its in-order successor.
    pub fn erase(&mut self, value: &T) -> bool {
        let Some(t) = self.find_node(value) else { return false };
        let node = &self.arena[t];
        let (left, right, par) = (node.left, node.right, node.parent);

        let replacement = match right {
            None => left,
            Some(right) => {
                let (min, rest) = self.arena.detach_min(right);
                self.arena[min].left = left;
                self.arena[min].right = rest;
                Some(min)
            }
        };
        self.arena.relink(par, t, replacement, &mut self.root);
        self.arena.release(t);
        self.arena.retrace(replacement.or(par), &mut self.root);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// A cursor at the element equal to `value`, or [`end`](Self::end).
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        Cursor::new(self, self.find_node(value))
    }

    /// A cursor at the first element not less than `value`, or
    /// [`end`](Self::end).
    pub fn lower_bound(&self, value: &T) -> Cursor<'_, T> {
        let mut res = None;
        let mut cur = self.root;
        while let Some(t) = cur {
            let node = &self.arena[t];
            match value.cmp(&node.key) {
                Ordering::Equal => return Cursor::new(self, Some(t)),
                Ordering::Less => {
                    res = Some(t);
                    cur = node.left;
                }
                Ordering::Greater => cur = node.right,
            }
        }
        Cursor::new(self, res)
    }

    /// The number of elements less than `value`.
    pub fn rank(&self, value: &T) -> usize {
        let mut res = 0;
        let mut cur = self.root;
        while let Some(t) = cur {
            let node = &self.arena[t];
            if &node.key < value {
                res += self.arena.count(node.left) + 1;
                cur = node.right;
            } else {
                cur = node.left;
            }
        }
        res
    }

    fn find_node(&self, value: &T) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(t) = cur {
            let node = &self.arena[t];
            cur = match value.cmp(&node.key) {
                Ordering::Equal => return Some(t),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for AvlSet<T> {
    fn clone(&self) -> Self {
        let mut arena = Arena::with_capacity(self.len());
        let root = arena.clone_subtree(&self.arena, self.root);
        Self { arena, root }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = self.arena.clone_subtree(&source.arena, source.root);
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlSet<T> {
    fn from(arr: [T; N]) -> Self { arr.into_iter().collect() }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.insert(elt);
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for AvlSet<T> {}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
