//! The order type shared by every layer of the matching core.
//!
//! Kept deliberately lightweight: no user metadata, no timestamps, nothing
//! the book doesn't need to maintain price-time priority and volume
//! accounting.

use serde_derive::{Deserialize, Serialize};

/// Which side of the market an order belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// An exchange order for buying or selling the market's single asset.
///
/// `price == 0` means "market order — settle at the maker's price". `volume`
/// is mutated downward by matching to represent the remaining quantity; an
/// order whose volume reaches 0 is fulfilled and dropped from its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub pair: String,
    pub side: Side,
    pub price: u64,
    pub volume: u64,
}

/// The kind of a match, from the perspective of the order it describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum MatchType {
    /// The order was fulfilled completely, whether this was its only match
    /// or the last of several partial ones.
    Fulfilled,
    /// The order was partially filled and remains unresolved after this
    /// match (it keeps resting, or — for a taker — more matches follow).
    PartiallyFulfilled,
}

/// One maker order consumed while extracting volume from a price level.
///
/// `volume_taken` is always reported even for a full fill, at which point
/// `maker_order.volume` has already been zeroed out by the extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub maker_order: Order,
    pub match_type: MatchType,
    pub volume_taken: u64,
}
