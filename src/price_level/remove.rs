use super::PriceLevel;
use thiserror::Error;

/// An error which can occur when removing an order from a price level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoveError {
    #[error("price level has no order with id {0:?}")]
    UnknownId(String),
}

impl PriceLevel {
    /// Removes the order with this id and updates the volume.
    ///
    /// O(1).
    pub fn remove(&mut self, id: &str) -> Result<(), RemoveError> {
        let idx = self
            .order_ids
            .remove(id)
            .ok_or_else(|| RemoveError::UnknownId(id.to_string()))?;

        let removed = self.remove_slot(idx);
        self.volume -= removed.volume;

        Ok(())
    }
}
