use super::node::{ChildSide, NodeId, NodePool};
use super::validate::TreeError;
use super::Tree;

impl Tree {
    /// Returns the node holding `price`, or `PriceNotFound` if it isn't
    /// present. Diagnostic-only: none of the book/market layers above call
    /// this on their hot path.
    ///
    /// O(log n)
    pub fn get(&self, price: u64) -> Result<NodeId, TreeError> {
        let pool = self.pool.borrow();
        let (holder, _, _) = find(&pool, self.root, price);
        holder.ok_or(TreeError::PriceNotFound(price))
    }
}

/// Finds `price` in the tree rooted at `root`. Returns the holding node if
/// present; otherwise returns which side of `parent` a new node for `price`
/// would need to be inserted on.
///
/// If `holder` is `None`, `price` is not in the tree. If `parent` is also
/// `None`, the tree is empty and a new node would become the root.
pub(super) fn find(
    pool: &NodePool,
    root: Option<NodeId>,
    price: u64,
) -> (Option<NodeId>, ChildSide, Option<NodeId>) {
    let root = match root {
        Some(r) => r,
        None => return (None, ChildSide::Left, None),
    };

    if pool.price(root) == price {
        return (Some(root), ChildSide::Left, None);
    }

    let mut parent = root;
    loop {
        if price > pool.price(parent) {
            match pool.node(parent).right {
                None => return (None, ChildSide::Right, Some(parent)),
                Some(r) if pool.price(r) == price => return (Some(r), ChildSide::Right, Some(parent)),
                Some(r) => parent = r,
            }
        } else {
            match pool.node(parent).left {
                None => return (None, ChildSide::Left, Some(parent)),
                Some(l) if pool.price(l) == price => return (Some(l), ChildSide::Left, Some(parent)),
                Some(l) => parent = l,
            }
        }
    }
}

pub(super) fn min(pool: &NodePool, mut n: NodeId) -> NodeId {
    loop {
        match pool.node(n).left {
            Some(l) => n = l,
            None => return n,
        }
    }
}

pub(super) fn max(pool: &NodePool, mut n: NodeId) -> NodeId {
    loop {
        match pool.node(n).right {
            Some(r) => n = r,
            None => return n,
        }
    }
}
