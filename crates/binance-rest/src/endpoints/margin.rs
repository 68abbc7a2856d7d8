//! Margin account endpoints
//!
//! These endpoints are signed (`MARGIN` and `USER_DATA` security).

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use crate::types::{MarginOrderOptions, OrderIdOptions};
use serde_json::Value;
use tracing::{debug, instrument};

/// Margin endpoints
pub struct MarginEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> MarginEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn signed(&self, method: Method, path: &'static str, params: Params) -> RestResult<Value> {
        let request = Request::new(method, ApiHost::Spot, path, Security::Signed).with_params(params);
        self.client.execute(request).await
    }

    fn asset_amount(asset: impl ParamValue, amount: impl ParamValue) -> RestResult<Params> {
        ParamsBuilder::new()
            .required_upper("asset", asset)
            .required("amount", amount)
            .build()
    }

    /// Borrow an asset against the cross margin account
    #[instrument(skip(self))]
    pub async fn borrow(&self, asset: impl ParamValue, amount: impl ParamValue) -> RestResult<Value> {
        let params = Self::asset_amount(asset, amount)?;
        debug!(asset = params.get("asset"), "Borrowing on margin");
        self.signed(Method::POST, "/sapi/v1/margin/loan", params).await
    }

    /// Repay a margin loan
    #[instrument(skip(self))]
    pub async fn repay(&self, asset: impl ParamValue, amount: impl ParamValue) -> RestResult<Value> {
        let params = Self::asset_amount(asset, amount)?;
        self.signed(Method::POST, "/sapi/v1/margin/repay", params).await
    }

    /// Cross margin account details
    #[instrument(skip(self))]
    pub async fn account(&self) -> RestResult<Value> {
        self.signed(Method::GET, "/sapi/v1/margin/account", Params::new()).await
    }

    /// Place a margin order
    #[instrument(skip(self, options))]
    pub async fn new_order(
        &self,
        symbol: impl ParamValue,
        side: impl ParamValue,
        order_type: impl ParamValue,
        options: &MarginOrderOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required_upper("side", side)
            .required_upper("type", order_type)
            .options(options)
            .build()?;
        self.signed(Method::POST, "/sapi/v1/margin/order", params).await
    }

    /// Cancel a margin order
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
        self.signed(Method::DELETE, "/sapi/v1/margin/order", params).await
    }

    /// Open margin orders on one symbol, or on all symbols when `None`
    #[instrument(skip(self))]
    pub async fn open_orders(&self, symbol: Option<&str>) -> RestResult<Value> {
        let params = ParamsBuilder::new().optional_upper("symbol", symbol).build()?;
        self.signed(Method::GET, "/sapi/v1/margin/openOrders", params).await
    }
}
