use super::event::OrderEventType;
use super::validate::MarketError;
use super::Market;
use crate::order::Order;

impl Market {
    /// Removes a resting order from its side's book. `order.volume` is
    /// ignored — only `id`, `side`, and `price` are used to locate it.
    pub fn cancel(&mut self, order: Option<Order>) -> Result<(), MarketError> {
        let order = self.validate_order(order)?;

        let id = order.id.clone();
        let side = order.side;
        self.book_mut(side).delete(&order)?;
        self.emit_order_event(OrderEventType::OrderCancelled, id);
        Ok(())
    }
}
