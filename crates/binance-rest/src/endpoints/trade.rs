//! Spot trading endpoints for order management
//!
//! These endpoints are signed (`TRADE` and `USER_DATA` security).

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use crate::types::{NewOrderOptions, OrderIdOptions, TradeHistoryOptions};
use serde_json::Value;
use tracing::{debug, instrument};

/// Spot trading endpoints
pub struct TradeEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> TradeEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn signed(&self, method: Method, path: &'static str, params: Params) -> RestResult<Value> {
        let request = Request::new(method, ApiHost::Spot, path, Security::Signed).with_params(params);
        self.client.execute(request).await
    }

    fn order_params(
        symbol: impl ParamValue,
        side: impl ParamValue,
        order_type: impl ParamValue,
        options: &NewOrderOptions,
    ) -> RestResult<Params> {
        ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required_upper("side", side)
            .required_upper("type", order_type)
            .options(options)
            .build()
    }

    /// Place a new order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "BTCUSDT")
    /// * `side` - `Side` or "buy"/"sell"
    /// * `order_type` - `OrderType` or its wire name
    /// * `options` - Quantity, price, time in force and the rest
    #[instrument(skip(self, options))]
    pub async fn new_order(
        &self,
        symbol: impl ParamValue,
        side: impl ParamValue,
        order_type: impl ParamValue,
        options: &NewOrderOptions,
    ) -> RestResult<Value> {
        let params = Self::order_params(symbol, side, order_type, options)?;
        debug!(
            symbol = params.get("symbol"),
            side = params.get("side"),
            "Placing spot order"
        );
        self.signed(Method::POST, "/api/v3/order", params).await
    }

    /// Validate an order without sending it to the matching engine
    #[instrument(skip(self, options))]
    pub async fn test_new_order(
        &self,
        symbol: impl ParamValue,
        side: impl ParamValue,
        order_type: impl ParamValue,
        options: &NewOrderOptions,
    ) -> RestResult<Value> {
        let params = Self::order_params(symbol, side, order_type, options)?;
        self.signed(Method::POST, "/api/v3/order/test", params).await
    }

    /// Cancel an active order by `orderId` or `origClientOrderId`
    #[instrument(skip(self, options))]
    pub async fn cancel_order(
        &self,
        symbol: impl ParamValue,
        options: &OrderIdOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::DELETE, "/api/v3/order", params).await
    }

    /// Cancel every open order on a symbol
    #[instrument(skip(self))]
    pub async fn cancel_open_orders(&self, symbol: impl ParamValue) -> RestResult<Value> {
        let params = ParamsBuilder::new().required_upper("symbol", symbol).build()?;
        self.signed(Method::DELETE, "/api/v3/openOrders", params).await
    }

    /// Check an order's status
    #[instrument(skip(self, options))]
    pub async fn get_order(
        &self,
        symbol: impl ParamValue,
        options: &OrderIdOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::GET, "/api/v3/order", params).await
    }

    /// Open orders on one symbol, or on all symbols when `None`
    #[instrument(skip(self))]
    pub async fn open_orders(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.signed(Method::GET, "/api/v3/openOrders", params).await
    }

    /// All orders on a symbol: active, cancelled or filled
    #[instrument(skip(self, options))]
    pub async fn all_orders(
        &self,
        symbol: impl ParamValue,
        options: &TradeHistoryOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::GET, "/api/v3/allOrders", params).await
    }

    /// Account balances and permissions
    #[instrument(skip(self))]
    pub async fn account(&self) -> RestResult<Value> {
        debug!("Fetching spot account");
        self.signed(Method::GET, "/api/v3/account", Params::new()).await
    }

    /// Trade history for a symbol
    #[instrument(skip(self, options))]
    pub async fn my_trades(
        &self,
        symbol: impl ParamValue,
        options: &TradeHistoryOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::GET, "/api/v3/myTrades", params).await
    }
}
