//! Demo 2: Futures Position Report
//!
//! Showcases: signed GET requests, position risk, futures balances
//!
//! Run: BINANCE_API_KEY=... BINANCE_API_SECRET=... cargo run --bin futures_positions -- btcusdt
//! Set BINANCE_TESTNET=1 to use the futures testnet.

use binance_rest::{BinanceRestClient, ClientConfig, Credentials, RestError};
use colored::*;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "BTCUSDT".to_string());

    let config = if std::env::var("BINANCE_TESTNET").is_ok() {
        ClientConfig::testnet()
    } else {
        ClientConfig::new()
    };
    let client = BinanceRestClient::with_config(
        config
            .with_credentials(Credentials::from_env()?)
            .with_recv_window(5000),
    )?;

    println!("{}", "═".repeat(72).cyan());
    println!("{}", "  FUTURES POSITION REPORT".cyan().bold());
    println!("{}", format!("  {}", client.futures_base_url()).cyan());
    println!("{}", "═".repeat(72).cyan());
    println!();

    let positions = match client.futures_trade().position_risk(symbol.as_str()).await {
        Ok(positions) => positions,
        Err(e @ RestError::Api { .. }) => {
            warn!(error = %e, "Position request rejected");
            println!("{} {}", "✗".red(), e);
            if let Some(code) = e.error_code() {
                println!("  Suggested recovery: {:?}", code.recovery_strategy());
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "  {:<12} {:>6} {:>14} {:>14} {:>14} {:>12}",
        "SYMBOL".white().bold(),
        "SIDE".white().bold(),
        "SIZE".white().bold(),
        "ENTRY".white().bold(),
        "MARK".white().bold(),
        "UPNL".white().bold()
    );
    println!("  {}", "─".repeat(77));

    let mut total_pnl = Decimal::ZERO;
    for position in positions.as_array().into_iter().flatten() {
        let size = decimal(position, "positionAmt");
        let pnl = decimal(position, "unRealizedProfit");
        total_pnl += pnl;

        let pnl_text = if pnl.is_sign_negative() {
            pnl.to_string().red()
        } else {
            pnl.to_string().green()
        };

        println!(
            "  {:<12} {:>6} {:>14} {:>14} {:>14} {:>12}",
            text(position, "symbol"),
            text(position, "positionSide"),
            size.to_string(),
            text(position, "entryPrice"),
            text(position, "markPrice"),
            pnl_text
        );
    }

    println!();
    println!("  {:<20} {}", "Unrealized PnL".white().bold(), total_pnl);

    let balances = client.futures_trade().balance().await?;
    for balance in balances.as_array().into_iter().flatten() {
        let amount = decimal(balance, "balance");
        if !amount.is_zero() {
            println!("  {:<20} {} {}", "Wallet".white().bold(), amount, text(balance, "asset"));
        }
    }

    Ok(())
}

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn decimal(value: &Value, key: &str) -> Decimal {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| Decimal::from_str(s).ok())
        .unwrap_or_default()
}
