use crate::order::{MatchType, Side};
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// A change in the resting volume at a particular price on one side of a
/// market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeEvent {
    pub pair: String,
    pub side: Side,
    pub price: u64,
    /// The volume now resting at `price`, not the delta. A price with no
    /// remaining orders reports 0.
    pub volume: u64,
    pub timestamp: DateTime<Utc>,
}

/// Records which two orders were matched and at what settlement terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub pair: String,
    pub taker_order_id: String,
    pub taker_match_type: MatchType,
    pub maker_order_id: String,
    pub maker_match_type: MatchType,
    pub matched_volume: u64,
    /// The settlement price, always the maker's resting price.
    pub settlement_price: u64,
    pub timestamp: DateTime<Utc>,
}

/// What happened to an order as it moved through the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderEventType {
    /// Accepted and resting in the book. Taker orders never produce this —
    /// they are matched immediately, never inserted.
    MakerOrderInserted,
    /// Removed from the book, normally by an explicit user action.
    OrderCancelled,
    /// Failed validation; never entered the market.
    OrderRejected,
    /// A taker order could not be fully filled for lack of opposing volume.
    TakerOrderUnfulfilled,
}

/// Signals an order's lifecycle transition. Multi-order operations fire one
/// `OrderEvent` per order so each keeps its own timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub event_type: OrderEventType,
    pub order_id: String,
    pub timestamp: DateTime<Utc>,
}
