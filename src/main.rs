use anyhow::Result;
use log::info;
use matching_core::{Config, Market, Order, Side};

/// Minimal host loop: wires one market's bounded event sinks, feeds it a
/// handful of requests, and drains what it emits. Real transport (message
/// bus ingress/egress, multi-market fan-out, service bootstrap) is left to
/// the host.
fn main() -> Result<()> {
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();

    let config = Config::from_env();
    let (order_tx, order_rx) = crossbeam_channel::bounded(config.sink_capacity);
    let (volume_tx, volume_rx) = crossbeam_channel::bounded(config.sink_capacity);
    let (match_tx, match_rx) = crossbeam_channel::bounded(config.sink_capacity);

    let mut market = Market::new("USD/GBP", order_tx, volume_tx, match_tx);
    info!("market initialized for {}", market.pair());

    let maker = |id: &str, side: Side, price: u64, volume: u64| {
        Some(Order { id: id.to_string(), pair: "USD/GBP".to_string(), side, price, volume })
    };

    market.insert_maker(maker("100", Side::Buy, 10, 15))?;
    market.insert_maker(maker("101", Side::Buy, 10, 15))?;

    // Crosses the resting buy orders at 10 and is reclassified as a taker.
    market.insert_maker(maker("1", Side::Sell, 8, 10))?;

    while let Ok(event) = order_rx.try_recv() {
        info!("order event: {:?}", event);
    }
    while let Ok(event) = volume_rx.try_recv() {
        info!("volume event: {:?}", event);
    }
    while let Ok(event) = match_rx.try_recv() {
        info!("match event: {:?}", event);
    }

    Ok(())
}
