//! A single trading pair: two order books and the event sinks that report
//! what happens to them.

mod cancel;
mod event;
mod insert;
mod r#match;
mod validate;

pub use event::{MatchEvent, OrderEvent, OrderEventType, VolumeEvent};
pub use validate::MarketError;

use crate::order::Side;
use crate::order_book::OrderBook;
use crate::tree::NodePool;
use chrono::Utc;
use crossbeam_channel::Sender;
use std::cell::RefCell;
use std::rc::Rc;

/// Owns both sides of one trading pair's book and fans out order, volume,
/// and match events as they occur. Not `Send` — a market is driven from a
/// single thread, with one `Market` per pair cooperatively scheduled
/// alongside the others.
pub struct Market {
    pair: String,
    buy_book: OrderBook,
    sell_book: OrderBook,
    order_events: Sender<OrderEvent>,
    match_events: Sender<MatchEvent>,
}

impl Market {
    pub fn new(
        pair: impl Into<String>,
        order_events: Sender<OrderEvent>,
        volume_events: Sender<VolumeEvent>,
        match_events: Sender<MatchEvent>,
    ) -> Self {
        let pair = pair.into();
        let pool = Rc::new(RefCell::new(NodePool::new()));

        let buy_events = volume_events.clone();
        let buy_pair = pair.clone();
        let buy_book = OrderBook::new(
            Side::Buy,
            Rc::clone(&pool),
            Box::new(move |price, volume| {
                let _ = buy_events.send(VolumeEvent {
                    pair: buy_pair.clone(),
                    side: Side::Buy,
                    price,
                    volume,
                    timestamp: Utc::now(),
                });
            }),
        );

        let sell_events = volume_events;
        let sell_pair = pair.clone();
        let sell_book = OrderBook::new(
            Side::Sell,
            Rc::clone(&pool),
            Box::new(move |price, volume| {
                let _ = sell_events.send(VolumeEvent {
                    pair: sell_pair.clone(),
                    side: Side::Sell,
                    price,
                    volume,
                    timestamp: Utc::now(),
                });
            }),
        );

        Market { pair, buy_book, sell_book, order_events, match_events }
    }

    pub fn pair(&self) -> &str {
        &self.pair
    }

    pub(super) fn emit_order_event(&self, event_type: OrderEventType, order_id: String) {
        self.emit_order_event_at(Utc::now(), event_type, order_id);
    }

    /// Used within `match_taker` so every event from one call shares the
    /// single timestamp captured at entry.
    pub(super) fn emit_order_event_at(
        &self,
        timestamp: chrono::DateTime<Utc>,
        event_type: OrderEventType,
        order_id: String,
    ) {
        let _ = self.order_events.send(OrderEvent { event_type, order_id, timestamp });
    }

    pub(super) fn book_mut(&mut self, side: Side) -> &mut OrderBook {
        match side {
            Side::Buy => &mut self.buy_book,
            Side::Sell => &mut self.sell_book,
        }
    }

    pub(super) fn book(&self, side: Side) -> &OrderBook {
        match side {
            Side::Buy => &self.buy_book,
            Side::Sell => &self.sell_book,
        }
    }
}
