//! A single-pair limit order matching core: a red-black price tree, a
//! price-level FIFO, a shared node pool, the two-sided order book built on
//! them, and the market that owns a pair's books and event sinks.
//!
//! Request and event transport, service bootstrap, and multi-market
//! fan-out are left to the host — this crate exposes
//! `Market::insert_maker`/`cancel`/`match_taker` and three
//! `crossbeam_channel::Receiver`s for a host to drive and drain.

pub mod config;
pub mod market;
pub mod order;
pub mod order_book;
pub mod price_level;
pub mod tree;

pub use config::Config;
pub use market::{Market, MarketError, MatchEvent, OrderEvent, OrderEventType, VolumeEvent};
pub use order::{Match, MatchType, Order, Side};
