use super::OrderBook;
use crate::order::Order;
use crate::price_level;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsertError {
    #[error("order side {order_side:?} does not match book side {book_side:?}")]
    SideMismatch { book_side: crate::order::Side, order_side: crate::order::Side },
    #[error(transparent)]
    DuplicateId(#[from] price_level::InsertError),
}

impl OrderBook {
    /// Colocates `order` in its price level, creating the level if it
    /// doesn't yet exist.
    ///
    /// O(log n): O(1) if the price already exists, O(log n) to create one.
    pub fn insert(&mut self, order: Order) -> Result<(), InsertError> {
        if order.side != self.side {
            return Err(InsertError::SideMismatch { book_side: self.side, order_side: order.side });
        }

        let node = match self.price_map.get(&order.price) {
            Some(&n) => n,
            None => self.insert_price_node(order.price),
        };

        let price = order.price;
        let mut pool = self.tree.pool().borrow_mut();
        pool.level_mut(node).insert(order)?;
        let volume = pool.level(node).volume();
        drop(pool);

        (self.volume_update_callback)(price, volume);
        Ok(())
    }
}
