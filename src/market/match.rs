use super::event::{MatchEvent, OrderEventType};
use super::validate::MarketError;
use super::Market;
use crate::order::{MatchType, Order, Side};
use chrono::Utc;

impl Market {
    /// Consumes resting liquidity from the opposite side for an explicit
    /// taker order (price 0, or a non-zero price the caller already knows
    /// crosses). Price is not validated — a taker settles at the maker's
    /// price, never its own.
    pub fn match_taker(&mut self, order: Option<Order>) -> Result<(), MarketError> {
        let order = self.validate_taker_order(order)?;
        let opposite = order.side.opposite();
        self.execute_taker(order, opposite)
    }

    /// Shared by the public `match_taker` entry point and by
    /// `insert_maker`'s reclassification of a crossing maker intent.
    /// `opposite` names the book to consume from, which the caller already
    /// determined from the original (not necessarily the taker's own) side.
    pub(super) fn execute_taker(
        &mut self,
        order: Order,
        opposite: Side,
    ) -> Result<(), MarketError> {
        let t = Utc::now();
        let (matches, residual) = self.book_mut(opposite).match_and_extract(order.volume);

        if residual > 0 {
            self.emit_order_event_at(t, OrderEventType::TakerOrderUnfulfilled, order.id.clone());
        }

        let last = matches.len().saturating_sub(1);
        for (i, m) in matches.into_iter().enumerate() {
            let taker_match_type =
                if i == last && residual == 0 { MatchType::Fulfilled } else { MatchType::PartiallyFulfilled };

            let _ = self.match_events.send(MatchEvent {
                pair: self.pair.clone(),
                taker_order_id: order.id.clone(),
                taker_match_type,
                maker_order_id: m.maker_order.id,
                maker_match_type: m.match_type,
                matched_volume: m.volume_taken,
                settlement_price: m.maker_order.price,
                timestamp: t,
            });
        }

        Ok(())
    }
}
