//! Spot market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use crate::types::KlineOptions;
use binance_types::KlineInterval;
use serde_json::Value;
use tracing::{debug, instrument};

/// Spot market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn get(&self, path: &'static str, params: Params) -> RestResult<Value> {
        let request = Request::new(Method::GET, ApiHost::Spot, path, Security::None).with_params(params);
        self.client.execute(request).await
    }

    /// Test connectivity
    #[instrument(skip(self))]
    pub async fn ping(&self) -> RestResult<Value> {
        self.get("/api/v3/ping", Params::new()).await
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn time(&self) -> RestResult<Value> {
        debug!("Fetching server time");
        self.get("/api/v3/time", Params::new()).await
    }

    /// Exchange trading rules and symbol information
    ///
    /// # Arguments
    /// * `symbol` - Limit the response to one symbol
    #[instrument(skip(self))]
    pub async fn exchange_info(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.get("/api/v3/exchangeInfo", params).await
    }

    /// Order book
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "BTCUSDT")
    /// * `limit` - Depth (default 100, max 5000)
    #[instrument(skip(self))]
    pub async fn depth(&self, symbol: impl ParamValue, limit: Option<u16>) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .optional("limit", limit)
            .build()?;
        self.get("/api/v3/depth", params).await
    }

    /// Recent trades
    #[instrument(skip(self))]
    pub async fn trades(&self, symbol: impl ParamValue, limit: Option<u16>) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .optional("limit", limit)
            .build()?;
        self.get("/api/v3/trades", params).await
    }

    /// Kline/candlestick bars
    #[instrument(skip(self, options))]
    pub async fn klines(
        &self,
        symbol: impl ParamValue,
        interval: KlineInterval,
        options: &KlineOptions,
    ) -> RestResult<Value> {
        // interval is case-sensitive, so it is not upper-cased
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required("interval", interval)
            .options(options)
            .build()?;
        debug!("Fetching klines");
        self.get("/api/v3/klines", params).await
    }

    /// Current average price
    #[instrument(skip(self))]
    pub async fn avg_price(&self, symbol: impl ParamValue) -> RestResult<Value> {
        let params = ParamsBuilder::new().required_upper("symbol", symbol).build()?;
        self.get("/api/v3/avgPrice", params).await
    }

    /// 24 hour rolling price change statistics
    ///
    /// Without a symbol, returns every symbol (heavy request weight).
    #[instrument(skip(self))]
    pub async fn ticker_24hr(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.get("/api/v3/ticker/24hr", params).await
    }

    /// Latest price for one or all symbols
    #[instrument(skip(self))]
    pub async fn ticker_price(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.get("/api/v3/ticker/price", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinanceRestClient, ClientConfig, KlineOptions, RestError};
    use binance_types::KlineInterval;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BinanceRestClient {
        BinanceRestClient::with_config(ClientConfig::new().with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_ticker_price_uppercases_symbol() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/ticker/price"))
            .and(query_param("symbol", "BTCUSDT"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"symbol": "BTCUSDT", "price": "42000.10"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.market().ticker_price(Some("btcusdt")).await.unwrap();
        assert_eq!(result["price"], "42000.10");
    }

    #[tokio::test]
    async fn test_ping_empty_object() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.ping().await.unwrap();
        assert!(result.as_object().is_some_and(|o| o.is_empty()));
    }

    #[tokio::test]
    async fn test_klines_interval_keeps_case() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/klines"))
            .and(query_param("symbol", "ETHUSDT"))
            .and(query_param("interval", "1M"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = KlineOptions::default().with_limit(2);
        let result = client
            .market()
            .klines("ethusdt", KlineInterval::Mo1, &options)
            .await
            .unwrap();
        assert!(result.as_array().is_some_and(|a| a.is_empty()));
    }

    #[tokio::test]
    async fn test_depth_requires_symbol() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.market().depth("", Some(5)).await.unwrap_err();
        assert!(matches!(err, RestError::MissingParameter(ref name) if name == "symbol"));
    }
}
