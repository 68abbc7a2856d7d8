//! Demo 3: Listen Key Keepalive
//!
//! Showcases: API-key-only endpoints, listen key lifecycle
//!
//! Creates a futures listen key, renews it on an interval and closes it on
//! Ctrl-C. Only the API key is needed; the secret may be unset.
//!
//! Run: BINANCE_API_KEY=... cargo run --bin listen_key_keepalive -- 1800

use binance_rest::{BinanceRestClient, Credentials, RestError};
use chrono::Local;
use colored::*;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Listen keys expire after 60 minutes; renew at half that by default
const DEFAULT_RENEW_SECS: u64 = 30 * 60;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("binance_rest=info".parse()?))
        .init();

    let renew_secs = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RENEW_SECS);

    let client = BinanceRestClient::with_credentials(Credentials::from_env()?)?;
    let stream = client.futures_stream();

    let created = stream.create_listen_key().await?;
    let Some(listen_key) = created.get("listenKey").and_then(|v| v.as_str()).map(str::to_owned)
    else {
        return Err(format!("unexpected response: {created}").into());
    };

    println!("{} Listen key created at {}", "✓".green(), Local::now().format("%H:%M:%S"));
    println!("  wss://fstream.binance.com/ws/{}", listen_key.dimmed());
    println!("  Renewing every {renew_secs}s, Ctrl-C to close\n");

    let mut ticker = tokio::time::interval(Duration::from_secs(renew_secs));
    // First tick fires immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match stream.renew_listen_key(listen_key.as_str()).await {
                    Ok(_) => println!(
                        "{} Renewed at {}",
                        "↻".cyan(),
                        Local::now().format("%H:%M:%S")
                    ),
                    Err(e @ RestError::Api { .. }) => {
                        // -1125: the key expired or was closed elsewhere
                        error!(error = %e, "Renewal rejected, stopping");
                        return Err(e.into());
                    }
                    Err(e) => error!(error = %e, retryable = e.is_retryable(), "Renewal failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    stream.close_listen_key(listen_key.as_str()).await?;
    println!("{} Listen key closed", "✓".green());

    Ok(())
}
