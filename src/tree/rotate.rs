use super::node::{NodeId, NodePool};
use super::Tree;

impl Tree {
    /// Makes `x`'s right child the new root of `x`'s subtree; `x` becomes
    /// that node's left child. A no-op if `x` has no right child.
    pub(super) fn rotate_left(&mut self, pool: &mut NodePool, x: NodeId) {
        let y = match pool.node(x).right {
            Some(y) => y,
            None => return,
        };

        let y_left = pool.node(y).left;
        pool.node_mut(x).right = y_left;
        if let Some(yl) = y_left {
            pool.node_mut(yl).parent = Some(x);
        }

        let x_parent = pool.node(x).parent;
        pool.node_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) if pool.node(p).left == Some(x) => pool.node_mut(p).left = Some(y),
            Some(p) => pool.node_mut(p).right = Some(y),
        }

        pool.node_mut(y).left = Some(x);
        pool.node_mut(x).parent = Some(y);
    }

    /// Makes `x`'s left child the new root of `x`'s subtree; `x` becomes
    /// that node's right child. A no-op if `x` has no left child.
    pub(super) fn rotate_right(&mut self, pool: &mut NodePool, x: NodeId) {
        let y = match pool.node(x).left {
            Some(y) => y,
            None => return,
        };

        let y_right = pool.node(y).right;
        pool.node_mut(x).left = y_right;
        if let Some(yr) = y_right {
            pool.node_mut(yr).parent = Some(x);
        }

        let x_parent = pool.node(x).parent;
        pool.node_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) if pool.node(p).left == Some(x) => pool.node_mut(p).left = Some(y),
            Some(p) => pool.node_mut(p).right = Some(y),
        }

        pool.node_mut(y).right = Some(x);
        pool.node_mut(x).parent = Some(y);
    }

    /// Disconnects `current` from its parent's slot and puts `new` there
    /// instead. Does not touch `new`'s children — that's the caller's
    /// responsibility.
    pub(super) fn transplant(&mut self, pool: &mut NodePool, current: NodeId, new: Option<NodeId>) {
        let parent = pool.node(current).parent;
        match parent {
            None => self.root = new,
            Some(p) if pool.node(p).left == Some(current) => pool.node_mut(p).left = new,
            Some(p) => pool.node_mut(p).right = new,
        }

        if let Some(n) = new {
            pool.node_mut(n).parent = parent;
        }
    }
}
