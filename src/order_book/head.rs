use super::OrderBook;

impl OrderBook {
    /// The price at the head of this side of the book — the lowest price
    /// for a sell book, the highest for a buy book. `None` if the book is
    /// empty.
    ///
    /// O(1)
    pub fn head_price(&self) -> Option<u64> {
        let head = self.tree.head()?;
        Some(self.tree.pool().borrow().price(head))
    }
}
