//! A self-balancing ordered search tree over integral prices.
//!
//! Each node carries a reference to a price-level FIFO; the tree caches its
//! "head" (the minimum node for a sell book, the maximum for a buy book) so
//! best-price lookup is O(1) instead of the usual O(log n) tree-minimum walk.

mod delete;
mod insert;
mod node;
mod rotate;
mod search;
mod validate;

pub use node::{NodeId, NodePool};
pub use validate::TreeError;

use std::cell::RefCell;
use std::rc::Rc;

/// Whether a tree's cached head tracks the minimum or the maximum node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    MinFirst,
    MaxFirst,
}

/// An ordered set of prices, red-black balanced, each price augmented with
/// a `PriceLevel`. Nodes are drawn from and returned to a pool shared with
/// the tree's sibling book.
pub struct Tree {
    root: Option<NodeId>,
    orientation: Orientation,
    head: Option<NodeId>,
    pool: Rc<RefCell<NodePool>>,
}

impl Tree {
    pub fn new(orientation: Orientation, pool: Rc<RefCell<NodePool>>) -> Self {
        Tree { root: None, orientation, head: None, pool }
    }

    /// The node holding the tree's minimum price (`MinFirst`) or maximum
    /// price (`MaxFirst`), or `None` if the tree is empty. O(1).
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pool(&self) -> &Rc<RefCell<NodePool>> {
        &self.pool
    }
}

#[cfg(test)]
mod tests;
