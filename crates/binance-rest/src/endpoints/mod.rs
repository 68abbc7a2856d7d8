//! API endpoint implementations

pub mod futures;
pub mod margin;
pub mod market;
pub mod stream;
pub mod trade;
pub mod wallet;

pub use futures::{FuturesMarketEndpoints, FuturesStreamEndpoints, FuturesTradeEndpoints};
pub use margin::MarginEndpoints;
pub use market::MarketEndpoints;
pub use stream::UserStreamEndpoints;
pub use trade::TradeEndpoints;
pub use wallet::WalletEndpoints;
