use super::OrderBook;
use std::collections::HashMap;

impl OrderBook {
    /// An up-to-date `price -> volume` map of every resting level.
    ///
    /// O(n)
    pub fn snapshot(&self) -> HashMap<u64, u64> {
        let pool = self.tree.pool().borrow();
        self.price_map.iter().map(|(&price, &node)| (price, pool.level(node).volume())).collect()
    }
}
