use crate::node::{Arena, NodeId};

//          u      rotate_right ->      v
//         / \                         / \
//        v   C                       A   u
//       / \                             / \
//      A   B      <- rotate_left       B   C

impl<T> Arena<T> {
    fn rotate_right(&mut self, u: NodeId) -> NodeId {
        let par = self[u].parent;
        let v = self[u].left.expect("left-heavy node without a left child");
        self[u].left = self[v].right;
        self[v].right = Some(u);
        self.update(u);
        self.update(v);
        self[v].parent = par;
        v
    }

    fn rotate_left(&mut self, v: NodeId) -> NodeId {
        let par = self[v].parent;
        let u = self[v].right.expect("right-heavy node without a right child");
        self[v].right = self[u].left;
        self[u].left = Some(v);
        self.update(v);
        self.update(u);
        self[u].parent = par;
        u
    }

    /// Refreshes `t` and repairs a balance factor of $`\pm 2`$. Returns the
    /// node now occupying the position of `t`, whose parent link is that of
    /// `t`; the caller is responsible for relinking it.
    pub fn rebalance(&mut self, t: NodeId) -> NodeId {
        self.update(t);
        match self.balance_factor(t) {
            2 => {
                let right = self[t].right.expect("right-heavy without child");
                if self.balance_factor(right) < 0 {
                    let right = self.rotate_right(right);
                    self[t].right = Some(right);
                }
                self.rotate_left(t)
            }
            -2 => {
                let left = self[t].left.expect("left-heavy without child");
                if self.balance_factor(left) > 0 {
                    let left = self.rotate_left(left);
                    self[t].left = Some(left);
                }
                self.rotate_right(t)
            }
            _ => t,
        }
    }

    /// Rebalances `t` and every ancestor of it, bottom-up.
    pub fn retrace(&mut self, t: Option<NodeId>, root: &mut Option<NodeId>) {
        let mut cur = t;
        while let Some(t) = cur {
            let par = self[t].parent;
            let new = self.rebalance(t);
            self.relink(par, t, Some(new), root);
            cur = par;
        }
    }

    /// Unlinks the minimum of the subtree rooted at `top`, rebalancing the
    /// left spine on the way back. Returns the detached minimum and the new
    /// root of what remains of the subtree.
    pub fn detach_min(&mut self, top: NodeId) -> (NodeId, Option<NodeId>) {
        let min = self.min(top);
        let rest = self[min].right;
        let Some(mut t) = self[min].parent.filter(|_| min != top) else {
            return (min, rest);
        };
        self[t].left = rest;
        if let Some(rest) = rest {
            self[rest].parent = Some(t);
        }
        loop {
            let par = self[t].parent;
            let new = self.rebalance(t);
            if t == top {
                return (min, Some(new));
            }
            // every node strictly below `top` on the spine is a left child
            let par = par.expect("spine ends before reaching its top");
            self[par].left = Some(new);
            self[new].parent = Some(par);
            t = par;
        }
    }
}
