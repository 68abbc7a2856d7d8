//! USD-M futures endpoints (`fapi.binance.com`)

pub mod market;
pub mod stream;
pub mod trade;

pub use market::FuturesMarketEndpoints;
pub use stream::FuturesStreamEndpoints;
pub use trade::FuturesTradeEndpoints;
