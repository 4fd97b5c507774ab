use std::ops::{Index, IndexMut};

pub(crate) type NodeId = usize;

pub(crate) struct Node<T> {
    pub key: T,
    pub height: usize,
    pub count: usize,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

/// Owns every node of a tree. Links between nodes are slot indices, and a
/// released slot is recycled by the next allocation.
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<NodeId>,
}

impl<T> Node<T> {
    fn new(key: T, parent: Option<NodeId>) -> Self {
        Self { key, height: 1, count: 1, left: None, right: None, parent }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self { Self { slots: vec![], vacant: vec![] } }
    pub fn with_capacity(n: usize) -> Self {
        Self { slots: Vec::with_capacity(n), vacant: vec![] }
    }

    pub fn alloc(&mut self, key: T, parent: Option<NodeId>) -> NodeId {
        let node = Some(Node::new(key, parent));
        if let Some(i) = self.vacant.pop() {
            self.slots[i] = node;
            i
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    /// # Panics
    /// Panics if `i` is vacant.
    pub fn release(&mut self, i: NodeId) -> T {
        let node = self.slots[i].take().expect("released a vacant slot");
        self.vacant.push(i);
        node.key
    }

    pub fn take(&mut self, i: NodeId) -> Option<Node<T>> {
        self.slots.get_mut(i)?.take()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    pub fn height(&self, t: Option<NodeId>) -> usize {
        t.map_or(0, |i| self[i].height)
    }
    pub fn count(&self, t: Option<NodeId>) -> usize {
        t.map_or(0, |i| self[i].count)
    }

    pub fn balance_factor(&self, t: NodeId) -> isize {
        self.height(self[t].right) as isize - self.height(self[t].left) as isize
    }

    /// Recomputes the cached fields of `t` from its children and points the
    /// children back at `t`. The parent link of `t` itself is left as is.
    pub fn update(&mut self, t: NodeId) {
        let (left, right) = (self[t].left, self[t].right);
        let height = self.height(left).max(self.height(right)) + 1;
        let count = self.count(left) + 1 + self.count(right);
        let node = &mut self[t];
        node.height = height;
        node.count = count;
        for child in [left, right].into_iter().flatten() {
            self[child].parent = Some(t);
        }
    }

    pub fn min(&self, mut t: NodeId) -> NodeId {
        while let Some(left) = self[t].left {
            t = left;
        }
        t
    }
    pub fn max(&self, mut t: NodeId) -> NodeId {
        while let Some(right) = self[t].right {
            t = right;
        }
        t
    }

    pub fn successor(&self, mut t: NodeId) -> Option<NodeId> {
        if let Some(right) = self[t].right {
            return Some(self.min(right));
        }
        while let Some(par) = self[t].parent {
            if self[par].right != Some(t) {
                return Some(par);
            }
            t = par;
        }
        None
    }
    pub fn predecessor(&self, mut t: NodeId) -> Option<NodeId> {
        if let Some(left) = self[t].left {
            return Some(self.max(left));
        }
        while let Some(par) = self[t].parent {
            if self[par].left != Some(t) {
                return Some(par);
            }
            t = par;
        }
        None
    }

    /// Number of nodes preceding `t` in order.
    pub fn position(&self, mut t: NodeId) -> usize {
        let mut res = self.count(self[t].left);
        while let Some(par) = self[t].parent {
            if self[par].right == Some(t) {
                res += self.count(self[par].left) + 1;
            }
            t = par;
        }
        res
    }

    pub fn select(&self, root: Option<NodeId>, mut i: usize) -> Option<NodeId> {
        let mut t = root?;
        if i >= self[t].count {
            return None;
        }
        loop {
            let left = self.count(self[t].left);
            if i < left {
                t = self[t].left?;
            } else if i == left {
                return Some(t);
            } else {
                i -= left + 1;
                t = self[t].right?;
            }
        }
    }

    /// Replaces the link from `par` to `old` by a link to `new`, or makes
    /// `new` the parentless root when `par` is `None`.
    pub fn relink(
        &mut self,
        par: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
        root: &mut Option<NodeId>,
    ) {
        match par {
            Some(p) if self[p].left == Some(old) => self[p].left = new,
            Some(p) => self[p].right = new,
            None => *root = new,
        }
        if let Some(n) = new {
            self[n].parent = par;
        }
    }
}

impl<T: Clone> Arena<T> {
    /// Pre-order copy of the subtree rooted at `t` of `src` into `self`.
    pub fn clone_subtree(
        &mut self,
        src: &Self,
        t: Option<NodeId>,
    ) -> Option<NodeId> {
        let t = t?;
        let new = self.alloc(src[t].key.clone(), None);
        let left = self.clone_subtree(src, src[t].left);
        let right = self.clone_subtree(src, src[t].right);
        self[new].left = left;
        self[new].right = right;
        self.update(new);
        Some(new)
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;
    fn index(&self, i: NodeId) -> &Node<T> {
        self.slots[i].as_ref().expect("dangling node handle")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, i: NodeId) -> &mut Node<T> {
        self.slots[i].as_mut().expect("dangling node handle")
    }
}
