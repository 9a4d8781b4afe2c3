//! One side (buy or sell) of a market's order book.
//!
//! Wraps a price-ordered [`Tree`](crate::tree::Tree) with a flat `price ->
//! node` index so a book never has to search the tree to find a price it
//! already knows about, and fires a volume callback whenever a price
//! level's total changes.

mod delete;
mod head;
mod insert;
mod r#match;
mod snapshot;

pub use delete::DeleteError;
pub use insert::InsertError;

use crate::order::Side;
use crate::tree::{NodeId, NodePool, Orientation, Tree};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One side of a market: the price tree, a price-to-node index for O(1)
/// existence checks, and the callback that reports volume changes upward.
pub struct OrderBook {
    side: Side,
    tree: Tree,
    price_map: HashMap<u64, NodeId>,
    volume_update_callback: Box<dyn FnMut(u64, u64)>,
}

impl OrderBook {
    /// `volume_update_callback` is invoked with `(price, new_volume)`
    /// whenever a price level's volume changes, including when it drops to
    /// zero (immediately before the level is removed from the tree).
    pub fn new(side: Side, pool: Rc<RefCell<NodePool>>, volume_update_callback: Box<dyn FnMut(u64, u64)>) -> Self {
        let orientation = match side {
            Side::Buy => Orientation::MaxFirst,
            Side::Sell => Orientation::MinFirst,
        };
        OrderBook { side, tree: Tree::new(orientation, pool), price_map: HashMap::new(), volume_update_callback }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    fn insert_price_node(&mut self, price: u64) -> NodeId {
        let node = self.tree.insert(price);
        self.price_map.insert(price, node);
        node
    }

    fn delete_price_node(&mut self, node: NodeId, price: u64) {
        self.price_map.remove(&price);
        self.tree.delete_node(node);
    }
}
