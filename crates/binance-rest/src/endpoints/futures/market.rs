//! USD-M futures market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use crate::types::KlineOptions;
use binance_types::KlineInterval;
use serde_json::Value;
use tracing::instrument;

/// USD-M futures market data endpoints
pub struct FuturesMarketEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> FuturesMarketEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn get(&self, path: &'static str, params: Params) -> RestResult<Value> {
        let request =
            Request::new(Method::GET, ApiHost::Futures, path, Security::None).with_params(params);
        self.client.execute(request).await
    }

    /// Test connectivity
    #[instrument(skip(self))]
    pub async fn ping(&self) -> RestResult<Value> {
        self.get("/fapi/v1/ping", Params::new()).await
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn time(&self) -> RestResult<Value> {
        self.get("/fapi/v1/time", Params::new()).await
    }

    /// Contract rules and symbol information
    #[instrument(skip(self))]
    pub async fn exchange_info(&self) -> RestResult<Value> {
        self.get("/fapi/v1/exchangeInfo", Params::new()).await
    }

    /// Order book
    ///
    /// # Arguments
    /// * `symbol` - Contract (e.g., "BTCUSDT")
    /// * `limit` - Depth: 5, 10, 20, 50, 100, 500 or 1000
    #[instrument(skip(self))]
    pub async fn depth(&self, symbol: impl ParamValue, limit: Option<u16>) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .optional("limit", limit)
            .build()?;
        self.get("/fapi/v1/depth", params).await
    }

    /// Kline/candlestick bars
    #[instrument(skip(self, options))]
    pub async fn klines(
        &self,
        symbol: impl ParamValue,
        interval: KlineInterval,
        options: &KlineOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required("interval", interval)
            .options(options)
            .build()?;
        self.get("/fapi/v1/klines", params).await
    }

    /// Mark price and funding rate, for one or all contracts
    #[instrument(skip(self))]
    pub async fn mark_price(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.get("/fapi/v1/premiumIndex", params).await
    }

    /// Latest price for one or all contracts
    #[instrument(skip(self))]
    pub async fn ticker_price(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.get("/fapi/v1/ticker/price", params).await
    }
}
