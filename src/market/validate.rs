use super::event::{OrderEvent, OrderEventType};
use super::Market;
use crate::order::Order;
use crate::order_book;
use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("nil order")]
    NilOrder,
    #[error("order has no id")]
    MissingId,
    #[error("order pair {got:?} does not match market pair {expected:?}")]
    PairMismatch { expected: String, got: String },
    #[error("order has zero volume")]
    ZeroVolume,
    #[error("order has zero price")]
    ZeroPrice,
    #[error(transparent)]
    Insert(#[from] order_book::InsertError),
    #[error(transparent)]
    Delete(#[from] order_book::DeleteError),
}

impl Market {
    pub(super) fn emit_rejected(&self, order_id: String) {
        let _ = self.order_events.send(OrderEvent {
            event_type: OrderEventType::OrderRejected,
            order_id,
            timestamp: Utc::now(),
        });
    }

    /// Shared validation for cancel and match-taker: the order must exist,
    /// carry an id, and belong to this market with positive volume. Price
    /// is not checked here — a taker order settles at the maker's price.
    pub(super) fn validate_taker_order(&self, order: Option<Order>) -> Result<Order, MarketError> {
        let order = order.ok_or(MarketError::NilOrder)?;

        if order.id.is_empty() {
            self.emit_rejected(String::new());
            return Err(MarketError::MissingId);
        }

        if order.pair != self.pair {
            self.emit_rejected(order.id);
            return Err(MarketError::PairMismatch { expected: self.pair.clone(), got: order.pair });
        }

        if order.volume == 0 {
            self.emit_rejected(order.id);
            return Err(MarketError::ZeroVolume);
        }

        Ok(order)
    }

    /// Full validation for maker orders: everything `validate_taker_order`
    /// checks, plus a positive price.
    pub(super) fn validate_order(&self, order: Option<Order>) -> Result<Order, MarketError> {
        let order = self.validate_taker_order(order)?;

        if order.price == 0 {
            self.emit_rejected(order.id);
            return Err(MarketError::ZeroPrice);
        }

        Ok(order)
    }
}
