//! REST API client for Binance
//!
//! This crate provides a REST API client for Binance spot, margin and USD-M
//! futures, including market data, account queries, order management and
//! user data stream listen keys.
//!
//! # Features
//!
//! - **Spot**: Market data, orders, account, trade history
//! - **Futures**: Market data, orders, positions, leverage and margin
//! - **Streams**: Listen key create/renew/close for spot and futures
//! - **Wallet**: Coin info, deposit addresses, deposits and withdrawals
//! - **Margin**: Borrow, repay, orders
//!
//! # Authentication
//!
//! Signed endpoints append `timestamp` and an HMAC-SHA256 `signature` over
//! the form-encoded parameters. The API key travels in the `X-MBX-APIKEY`
//! header on every request when one is configured.
//!
//! # Example
//!
//! ```no_run
//! use binance_rest::{BinanceRestClient, Credentials, FuturesOrderOptions, Side, OrderType};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BinanceRestClient::new()?;
//!     let depth = client.market().depth("btcusdt", Some(5)).await?;
//!     println!("Order book: {depth}");
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BinanceRestClient::with_credentials(creds)?;
//!     let options = FuturesOrderOptions::new()
//!         .with_quantity(Decimal::new(1, 3))
//!         .with_price(Decimal::new(30_000, 0))
//!         .with_time_in_force(binance_rest::TimeInForce::GoodTillCancelled);
//!     let order = auth_client
//!         .futures_trade()
//!         .new_order("BTCUSDT", Side::Buy, OrderType::Limit, &options)
//!         .await?;
//!     println!("Order: {order}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! Endpoint methods return the exchange's JSON unchanged as
//! [`serde_json::Value`]. Use [`BinanceRestClient::execute_as`] with your own
//! types when a typed response is wanted.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod types;

// Re-export main types
pub use binance_auth::Credentials;
pub use client::{BinanceRestClient, ClientConfig, API_KEY_HEADER};
pub use error::{RestError, RestResult, TransportError};
pub use request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};

pub use binance_types::{
    BinanceErrorCode, KlineInterval, MarginModification, MarginType, NewOrderRespType, OrderType,
    PositionSide, RecoveryStrategy, Side, Symbol, TimeInForce, WorkingType, MAX_RECV_WINDOW,
};

// Re-export endpoint option types
pub use types::{
    // Shared
    OrderIdOptions, RecvWindow,
    // Market data
    KlineOptions,
    // Spot and margin trading
    MarginOrderOptions, NewOrderOptions, TradeHistoryOptions,
    // Futures
    FuturesOrderOptions, PositionMarginOptions,
    // Wallet
    DepositAddressOptions, TransferHistoryOptions, WithdrawOptions,
};
