use std::iter::FusedIterator;

use crate::{
    node::{Arena, NodeId},
    AvlSet,
};

pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(set: &'a AvlSet<T>) -> Self {
        let arena = &set.arena;
        Self {
            arena,
            front: set.root.map(|root| arena.min(root)),
            back: set.root.map(|root| arena.max(root)),
            len: set.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let t = self.front?;
        self.front = self.arena.successor(t);
        self.len -= 1;
        Some(&self.arena[t].key)
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let t = self.back?;
        self.back = self.arena.predecessor(t);
        self.len -= 1;
        Some(&self.arena[t].key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self { Self { ..*self } }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(set: AvlSet<T>) -> Self {
        let AvlSet { mut arena, root } = set;
        let mut order = Vec::with_capacity(arena.count(root));
        let mut cur = root.map(|root| arena.min(root));
        while let Some(t) = cur {
            order.push(t);
            cur = arena.successor(t);
        }
        let keys: Vec<_> = order
            .into_iter()
            .filter_map(|t| arena.take(t))
            .map(|node| node.key)
            .collect();
        Self { inner: keys.into_iter() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.inner.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.inner.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { Iter::new(self) }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter::new(self) }
}
