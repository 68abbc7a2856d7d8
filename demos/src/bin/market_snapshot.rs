//! Demo 1: Market Snapshot
//!
//! Showcases: public spot and futures endpoints, no credentials needed
//!
//! Run: cargo run --bin market_snapshot -- ethusdt

use binance_rest::{BinanceRestClient, KlineInterval, KlineOptions};
use colored::*;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "BTCUSDT".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  MARKET SNAPSHOT".cyan().bold());
    println!("{}", format!("  {}", symbol.to_uppercase()).cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BinanceRestClient::new()?;
    client.ping().await?;
    println!("{} Spot API reachable", "✓".green());

    let spot = client.market().ticker_price(Some(symbol.as_str())).await?;
    let mark = client.futures_market().mark_price(Some(symbol.as_str())).await?;

    println!();
    println!("  {:<18} {:>16}", "Spot price".white().bold(), field(&spot, "price"));
    println!("  {:<18} {:>16}", "Mark price".white().bold(), field(&mark, "markPrice"));
    println!("  {:<18} {:>16}", "Funding rate".white().bold(), field(&mark, "lastFundingRate"));

    let depth = client.market().depth(symbol.as_str(), Some(5)).await?;
    println!();
    println!("  {:>14}  {:>14}    {:>14}  {:>14}", "BID QTY", "BID", "ASK", "ASK QTY");
    println!("  {}", "─".repeat(62));

    let bids = levels(&depth, "bids");
    let asks = levels(&depth, "asks");
    for (bid, ask) in bids.iter().zip(asks.iter()) {
        println!(
            "  {:>14}  {:>14}    {:>14}  {:>14}",
            bid.1.to_string(),
            bid.0.to_string().green(),
            ask.0.to_string().red(),
            ask.1.to_string()
        );
    }

    if let (Some(best_bid), Some(best_ask)) = (bids.first(), asks.first()) {
        let spread = best_ask.0 - best_bid.0;
        println!();
        println!("  {:<18} {:>16}", "Spread".white().bold(), spread.to_string().yellow());
    }

    let options = KlineOptions::default().with_limit(6);
    let klines = client
        .market()
        .klines(symbol.as_str(), KlineInterval::H1, &options)
        .await?;

    println!();
    println!("  {}", "Last 6 hourly closes".white().bold());
    for bar in klines.as_array().into_iter().flatten() {
        // [open time, open, high, low, close, ...]
        if let Some(close) = bar.get(4).and_then(Value::as_str) {
            println!("    {close}");
        }
    }

    Ok(())
}

fn field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}

/// Price levels are `[["price", "qty"], ...]`
fn levels(depth: &Value, side: &str) -> Vec<(Decimal, Decimal)> {
    depth
        .get(side)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|level| {
            let price = Decimal::from_str(level.get(0)?.as_str()?).ok()?;
            let qty = Decimal::from_str(level.get(1)?.as_str()?).ok()?;
            Some((price, qty))
        })
        .collect()
}
