use std::fmt;

use crate::{
    node::{Arena, NodeId},
    AvlSet,
};

/// A broken tree invariant, located by the in-order position of the node
/// where it was detected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    Order(usize),
    Parent(usize),
    Height { position: usize, cached: usize, actual: usize },
    Count { position: usize, cached: usize, actual: usize },
    Unbalanced { position: usize, factor: isize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Order(i) => {
                write!(f, "element {i} is not greater than its predecessor")
            }
            Violation::Parent(i) => {
                write!(f, "parent link of element {i} is inconsistent")
            }
            Violation::Height { position, cached, actual } => write!(
                f,
                "element {position} caches height {cached} but has {actual}"
            ),
            Violation::Count { position, cached, actual } => write!(
                f,
                "element {position} caches count {cached} but has {actual}"
            ),
            Violation::Unbalanced { position, factor } => write!(
                f,
                "element {position} has balance factor {factor}"
            ),
        }
    }
}

struct Validator<'a, T> {
    arena: &'a Arena<T>,
    prev: Option<&'a T>,
    position: usize,
}

impl<'a, T: Ord> Validator<'a, T> {
    // returns the actual (height, count) of the subtree
    fn dfs(
        &mut self,
        t: Option<NodeId>,
        par: Option<NodeId>,
    ) -> Result<(usize, usize), Violation> {
        let Some(t) = t else { return Ok((0, 0)) };
        let arena = self.arena;
        let node = &arena[t];

        let (lh, lc) = self.dfs(node.left, Some(t))?;

        let position = self.position;
        if node.parent != par {
            return Err(Violation::Parent(position));
        }
        if self.prev.is_some_and(|prev| prev >= &node.key) {
            return Err(Violation::Order(position));
        }
        self.prev = Some(&node.key);
        self.position += 1;

        let (rh, rc) = self.dfs(node.right, Some(t))?;

        let height = lh.max(rh) + 1;
        let count = lc + 1 + rc;
        if node.height != height {
            let cached = node.height;
            return Err(Violation::Height { position, cached, actual: height });
        }
        if node.count != count {
            let cached = node.count;
            return Err(Violation::Count { position, cached, actual: count });
        }
        let factor = rh as isize - lh as isize;
        if !(-1..=1).contains(&factor) {
            return Err(Violation::Unbalanced { position, factor });
        }
        Ok((height, count))
    }
}

impl<T: Ord> AvlSet<T> {
    /// Checks the ordering, balance, cached fields and parent links of
    /// every node.
    pub fn validate(&self) -> Result<(), Violation> {
        let mut validator =
            Validator { arena: &self.arena, prev: None, position: 0 };
        validator.dfs(self.root, None).map(|_| ())
    }

    /// # Panics
    /// Panics with the first violation found by [`validate`](Self::validate).
    pub fn assert_invariants(&self) {
        if let Err(e) = self.validate() {
            panic!("{e}");
        }
    }
}

impl<T: fmt::Debug> AvlSet<T> {
    /// Prints the tree sideways to stderr, larger elements on top, each
    /// followed by the size of its subtree.
    pub fn visualize(&self) {
        #[derive(Clone, Copy, Eq, PartialEq)]
        enum Kind {
            Upper,
            Lower,
        }
        use Kind::*;

        fn display<T: fmt::Debug>(path: &[Kind], elt: &T, count: usize) {
            let mut prefix = "".to_owned();
            for w in path.windows(2) {
                prefix += if w[0] == w[1] { "    " } else { "│   " };
            }
            prefix += match path.last() {
                Some(Upper) => "┌── ",
                Some(Lower) => "└── ",
                None => "",
            };
            eprintln!("{prefix}{elt:?} ({count})");
        }

        fn dfs<T: fmt::Debug>(
            arena: &Arena<T>,
            t: Option<NodeId>,
            path: &mut Vec<Kind>,
        ) {
            let Some(t) = t else { return };
            let node = &arena[t];
            path.push(Upper);
            dfs(arena, node.right, path);
            path.pop();
            display(path, &node.key, node.count);
            path.push(Lower);
            dfs(arena, node.left, path);
            path.pop();
        }

        dfs(&self.arena, self.root, &mut vec![]);
    }
}
