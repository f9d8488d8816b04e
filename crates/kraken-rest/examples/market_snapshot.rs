//! Example: Public market snapshot and optional account summary
//!
//! Fetches server time, tickers and recent trades. When `KRAKEN_API_KEY` and
//! `KRAKEN_PRIVATE_KEY` are set, also prints balances and open orders.
//!
//! Run with: RUST_LOG=kraken_rest=debug cargo run -p kraken-rest --example market_snapshot

use kraken_rest::{pairs, Credentials, KrakenRestClient, Params};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Kraken Market Snapshot ===\n");

    let client = KrakenRestClient::new()?;

    let time = client.get_server_time().await?;
    println!("Server time: {} ({})\n", time.rfc1123, time.unixtime);

    println!("--- Tickers ---");
    let watched = [pairs::XXBTZEUR, pairs::XXBTZUSD, pairs::XETHZEUR];
    let tickers = client.get_ticker(&watched).await?;
    for pair in watched {
        match tickers.get(pair) {
            Some(ticker) => {
                let last = ticker.last_price().map(|p| p.to_string()).unwrap_or_default();
                let spread = ticker
                    .spread_bps()
                    .map(|s| format!("{:.1} bps", s))
                    .unwrap_or_default();
                println!("  {:<10} last {:>12}  spread {}", pair, last, spread);
            }
            None => println!("  {:<10} no data", pair),
        }
    }
    println!();

    println!("--- Recent trades ({}) ---", pairs::XXBTZEUR);
    let trades = client.get_recent_trades(pairs::XXBTZEUR, None).await?;
    for trade in trades.trades.iter().rev().take(10) {
        println!(
            "  {:>4} {:>6} {:>14} @ {}",
            trade.side,
            if trade.is_market() { "market" } else { "limit" },
            trade.volume,
            trade.price
        );
    }
    println!("  next cursor: {}\n", trades.last);

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("Skipping private endpoints: {}", e);
            return Ok(());
        }
    };

    let client = KrakenRestClient::with_credentials(credentials)?;

    println!("--- Balances ---");
    for (asset, amount) in client.get_balance().await?.non_zero() {
        println!("  {:<6} {}", asset, amount);
    }
    println!();

    println!("--- Open orders ---");
    let orders = client.get_open_orders(&Params::new()).await?;
    if orders.open.is_empty() {
        println!("  none");
    }
    for (txid, order) in &orders.open {
        println!("  {} {}", txid, order.descr.order);
    }

    Ok(())
}
