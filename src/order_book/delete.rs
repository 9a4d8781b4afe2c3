use super::OrderBook;
use crate::order::Order;
use crate::price_level;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("order side {order_side:?} does not match book side {book_side:?}")]
    SideMismatch { book_side: crate::order::Side, order_side: crate::order::Side },
    #[error("no price level at {0}")]
    UnknownPrice(u64),
    #[error(transparent)]
    UnknownId(#[from] price_level::RemoveError),
}

impl OrderBook {
    /// Finds `order`'s price level and removes it. If the level's volume
    /// drops to zero as a result, the level itself is removed from the
    /// tree.
    ///
    /// O(log n): O(1) if the level survives, O(log n) if it's removed.
    pub fn delete(&mut self, order: &Order) -> Result<(), DeleteError> {
        if order.side != self.side {
            return Err(DeleteError::SideMismatch { book_side: self.side, order_side: order.side });
        }

        let node = match self.price_map.get(&order.price) {
            Some(&n) => n,
            None => return Err(DeleteError::UnknownPrice(order.price)),
        };

        let mut pool = self.tree.pool().borrow_mut();
        pool.level_mut(node).remove(&order.id)?;
        let volume = pool.level(node).volume();
        drop(pool);

        (self.volume_update_callback)(order.price, volume);
        if volume == 0 {
            self.delete_price_node(node, order.price);
        }

        Ok(())
    }
}
