//! End-to-end walkthroughs driven entirely through the public `Market` API,
//! one bounded channel set per market as a host would wire it.

use matching_core::{Market, MatchType, Order, OrderEventType, Side};

const PAIR: &str = "USD/GBP";

fn order(id: &str, side: Side, price: u64, volume: u64) -> Option<Order> {
    Some(Order { id: id.into(), pair: PAIR.into(), side, price, volume })
}

fn market() -> Market {
    let (ot, _) = crossbeam_channel::bounded(64);
    let (vt, _) = crossbeam_channel::bounded(64);
    let (mt, _) = crossbeam_channel::bounded(64);
    Market::new(PAIR, ot, vt, mt)
}

/// Rebuilds the market with channels the test can actually drain.
fn market_with_sinks() -> (
    Market,
    crossbeam_channel::Receiver<matching_core::OrderEvent>,
    crossbeam_channel::Receiver<matching_core::VolumeEvent>,
    crossbeam_channel::Receiver<matching_core::MatchEvent>,
) {
    let (ot, or) = crossbeam_channel::bounded(64);
    let (vt, vr) = crossbeam_channel::bounded(64);
    let (mt, mr) = crossbeam_channel::bounded(64);
    (Market::new(PAIR, ot, vt, mt), or, vr, mr)
}

#[test]
fn maker_insertion_builds_book() {
    let (mut m, order_rx, volume_rx, match_rx) = market_with_sinks();

    m.insert_maker(order("100", Side::Buy, 10, 15)).unwrap();
    m.insert_maker(order("101", Side::Buy, 10, 15)).unwrap();
    m.insert_maker(order("102", Side::Buy, 10, 15)).unwrap();

    let order_events: Vec<_> = order_rx.try_iter().collect();
    assert_eq!(order_events.len(), 3);
    assert!(order_events.iter().all(|e| e.event_type == OrderEventType::MakerOrderInserted));

    let volume_events: Vec<_> = volume_rx.try_iter().map(|e| (e.price, e.volume)).collect();
    assert_eq!(volume_events, vec![(10, 15), (10, 30), (10, 45)]);

    assert!(match_rx.try_iter().next().is_none());
}

#[test]
fn cancel_decreases_level_volume() {
    let (mut m, order_rx, volume_rx, _match_rx) = market_with_sinks();
    m.insert_maker(order("100", Side::Buy, 10, 15)).unwrap();
    m.insert_maker(order("101", Side::Buy, 10, 15)).unwrap();
    m.insert_maker(order("102", Side::Buy, 10, 15)).unwrap();
    order_rx.try_iter().for_each(drop);
    volume_rx.try_iter().for_each(drop);

    m.cancel(order("100", Side::Buy, 10, 1)).unwrap();

    let order_events: Vec<_> = order_rx.try_iter().collect();
    assert_eq!(order_events.len(), 1);
    assert_eq!(order_events[0].event_type, OrderEventType::OrderCancelled);
    assert_eq!(order_events[0].order_id, "100");

    let volume_events: Vec<_> = volume_rx.try_iter().map(|e| (e.price, e.volume)).collect();
    assert_eq!(volume_events, vec![(10, 30)]);
}

#[test]
fn crossing_maker_intent_is_reclassified_as_taker() {
    let (mut m, order_rx, volume_rx, match_rx) = market_with_sinks();
    m.insert_maker(order("100", Side::Buy, 10, 15)).unwrap();
    order_rx.try_iter().for_each(drop);
    volume_rx.try_iter().for_each(drop);

    m.insert_maker(order("1", Side::Sell, 8, 10)).unwrap();

    let matches: Vec<_> = match_rx.try_iter().collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].taker_order_id, "1");
    assert_eq!(matches[0].taker_match_type, MatchType::Fulfilled);
    assert_eq!(matches[0].maker_order_id, "100");
    assert_eq!(matches[0].maker_match_type, MatchType::PartiallyFulfilled);
    assert_eq!(matches[0].settlement_price, 10);
    assert_eq!(matches[0].matched_volume, 10);

    let volume_events: Vec<_> = volume_rx.try_iter().map(|e| (e.price, e.volume)).collect();
    assert_eq!(volume_events, vec![(10, 5)]);

    assert!(order_rx.try_iter().next().is_none());
}

#[test]
fn multi_level_taker_walk_with_residual() {
    let (mut m, order_rx, volume_rx, match_rx) = market_with_sinks();
    m.insert_maker(order("100", Side::Sell, 10, 15)).unwrap();
    m.insert_maker(order("101", Side::Sell, 11, 15)).unwrap();
    m.insert_maker(order("102", Side::Sell, 12, 15)).unwrap();
    order_rx.try_iter().for_each(drop);
    volume_rx.try_iter().for_each(drop);

    m.match_taker(order("1", Side::Buy, 0, 70)).unwrap();

    let matches: Vec<_> = match_rx.try_iter().collect();
    assert_eq!(matches.len(), 3);
    let expected_prices = [10, 11, 12];
    for (m, &price) in matches.iter().zip(expected_prices.iter()) {
        assert_eq!(m.settlement_price, price);
        assert_eq!(m.maker_match_type, MatchType::Fulfilled);
        assert_eq!(m.taker_match_type, MatchType::PartiallyFulfilled);
    }

    let volume_events: Vec<_> = volume_rx.try_iter().map(|e| (e.price, e.volume)).collect();
    assert_eq!(volume_events, vec![(10, 0), (11, 0), (12, 0)]);

    let order_events: Vec<_> = order_rx.try_iter().collect();
    assert_eq!(order_events.len(), 1);
    assert_eq!(order_events[0].event_type, OrderEventType::TakerOrderUnfulfilled);
    assert_eq!(order_events[0].order_id, "1");
}

#[test]
fn exact_fill_is_fulfilled_on_both_sides() {
    let (mut m, order_rx, volume_rx, match_rx) = market_with_sinks();
    m.insert_maker(order("100", Side::Sell, 10, 15)).unwrap();
    order_rx.try_iter().for_each(drop);
    volume_rx.try_iter().for_each(drop);

    m.match_taker(order("1", Side::Buy, 0, 15)).unwrap();

    let matches: Vec<_> = match_rx.try_iter().collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].taker_match_type, MatchType::Fulfilled);
    assert_eq!(matches[0].maker_match_type, MatchType::Fulfilled);
    assert_eq!(matches[0].matched_volume, 15);
    assert_eq!(matches[0].settlement_price, 10);

    let volume_events: Vec<_> = volume_rx.try_iter().map(|e| (e.price, e.volume)).collect();
    assert_eq!(volume_events, vec![(10, 0)]);

    assert!(order_rx.try_iter().next().is_none());
}

#[test]
fn duplicate_id_is_rejected_and_book_state_is_unchanged() {
    let mut m = market();
    m.insert_maker(order("1", Side::Buy, 10, 5)).unwrap();

    let err = m.insert_maker(order("1", Side::Buy, 10, 7));
    assert!(err.is_err());
}
