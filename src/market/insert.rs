use super::event::OrderEventType;
use super::validate::MarketError;
use super::Market;
use crate::order::{Order, Side};

impl Market {
    /// Rests `order` in its side's book, unless its price crosses the
    /// opposite side's head — in which case it is transparently
    /// reclassified as a taker and no `MakerOrderInserted` event is emitted
    /// for it.
    pub fn insert_maker(&mut self, order: Option<Order>) -> Result<(), MarketError> {
        let order = self.validate_order(order)?;

        let crosses = match order.side {
            Side::Buy => self.sell_book.head_price().map_or(false, |h| order.price >= h),
            Side::Sell => self.buy_book.head_price().map_or(false, |h| order.price <= h),
        };

        if crosses {
            let opposite = order.side.opposite();
            return self.execute_taker(order, opposite);
        }

        let id = order.id.clone();
        let side = order.side;
        match self.book_mut(side).insert(order) {
            Ok(()) => {
                self.emit_order_event(OrderEventType::MakerOrderInserted, id);
                Ok(())
            }
            Err(err) => {
                self.emit_rejected(id);
                Err(err.into())
            }
        }
    }
}
