use super::PriceLevel;
use crate::order::Order;
use thiserror::Error;

/// An error which can occur when inserting an order into a price level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    #[error("price level received duplicate order id {0:?}")]
    DuplicateId(String),
}

impl PriceLevel {
    /// Appends an order to the tail of the queue and updates the volume.
    ///
    /// O(1).
    pub fn insert(&mut self, order: Order) -> Result<(), InsertError> {
        if self.order_ids.contains_key(&order.id) {
            return Err(InsertError::DuplicateId(order.id));
        }

        self.volume += order.volume;
        let id = order.id.clone();
        let idx = self.push_back(order);
        self.order_ids.insert(id, idx);

        Ok(())
    }
}
