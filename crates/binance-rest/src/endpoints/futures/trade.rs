//! USD-M futures trading endpoints
//!
//! Orders, positions and the futures account. All signed.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use crate::types::{FuturesOrderOptions, OrderIdOptions, PositionMarginOptions, RecvWindow};
use serde_json::Value;
use tracing::{debug, instrument};

/// USD-M futures trading endpoints
pub struct FuturesTradeEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> FuturesTradeEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn signed(&self, method: Method, path: &'static str, params: Params) -> RestResult<Value> {
        let request =
            Request::new(method, ApiHost::Futures, path, Security::Signed).with_params(params);
        self.client.execute(request).await
    }

    /// Place a new futures order
    ///
    /// # Arguments
    /// * `symbol` - Contract (e.g., "BTCUSDT")
    /// * `side` - `Side` or "buy"/"sell"
    /// * `order_type` - `OrderType` or its wire name
    /// * `options` - Quantity, price, reduce-only and the rest
    ///
    /// # Returns
    /// The order as accepted by the exchange
    #[instrument(skip(self, options))]
    pub async fn new_order(
        &self,
        symbol: impl ParamValue,
        side: impl ParamValue,
        order_type: impl ParamValue,
        options: &FuturesOrderOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required_upper("side", side)
            .required_upper("type", order_type)
            .options(options)
            .build()?;

        debug!(
            symbol = params.get("symbol"),
            side = params.get("side"),
            order_type = params.get("type"),
            "Placing futures order"
        );

        self.signed(Method::POST, "/fapi/v1/order", params).await
    }

    /// Cancel an order by client order id
    ///
    /// `orig_client_order_id` may be `None` when `options` carries an
    /// `order_id` instead.
    #[instrument(skip(self, options))]
    pub async fn cancel_order(
        &self,
        symbol: impl ParamValue,
        orig_client_order_id: impl ParamValue,
        options: &OrderIdOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .optional("origClientOrderId", orig_client_order_id)
            .options(options)
            .build()?;
        self.signed(Method::DELETE, "/fapi/v1/order", params).await
    }

    /// Cancel every open order on a symbol
    #[instrument(skip(self, options))]
    pub async fn cancel_all_open_orders(
        &self,
        symbol: impl ParamValue,
        options: &RecvWindow,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::DELETE, "/fapi/v1/allOpenOrders", params).await
    }

    /// Open orders on a symbol
    #[instrument(skip(self, options))]
    pub async fn open_orders(&self, symbol: impl ParamValue, options: &RecvWindow) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::GET, "/fapi/v1/openOrders", params).await
    }

    /// Position information for a symbol
    #[instrument(skip(self))]
    pub async fn position_risk(&self, symbol: impl ParamValue) -> RestResult<Value> {
        let params = ParamsBuilder::new().required_upper("symbol", symbol).build()?;
        self.signed(Method::GET, "/fapi/v2/positionRisk", params).await
    }

    /// Add or remove isolated position margin
    ///
    /// # Arguments
    /// * `symbol` - Contract
    /// * `amount` - Margin amount
    /// * `modification` - `MarginModification` or the raw `1`/`2`; sent as given
    #[instrument(skip(self, options))]
    pub async fn modify_position_margin(
        &self,
        symbol: impl ParamValue,
        amount: impl ParamValue,
        modification: impl ParamValue,
        options: &PositionMarginOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required("amount", amount)
            .required("type", modification)
            .options(options)
            .build()?;
        self.signed(Method::POST, "/fapi/v1/positionMargin", params).await
    }

    /// Check an order's status
    #[instrument(skip(self, options))]
    pub async fn query_order(
        &self,
        symbol: impl ParamValue,
        options: &OrderIdOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .options(options)
            .build()?;
        self.signed(Method::GET, "/fapi/v1/order", params).await
    }

    /// Futures account: assets, positions and margin totals
    #[instrument(skip(self))]
    pub async fn account(&self) -> RestResult<Value> {
        debug!("Fetching futures account");
        self.signed(Method::GET, "/fapi/v2/account", Params::new()).await
    }

    /// Futures wallet balances
    #[instrument(skip(self))]
    pub async fn balance(&self) -> RestResult<Value> {
        self.signed(Method::GET, "/fapi/v2/balance", Params::new()).await
    }

    /// Change initial leverage (1 to 125)
    #[instrument(skip(self))]
    pub async fn change_leverage(&self, symbol: impl ParamValue, leverage: u8) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required("leverage", leverage)
            .build()?;
        self.signed(Method::POST, "/fapi/v1/leverage", params).await
    }

    /// Switch between isolated and crossed margin
    #[instrument(skip(self))]
    pub async fn change_margin_type(
        &self,
        symbol: impl ParamValue,
        margin_type: impl ParamValue,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("symbol", symbol)
            .required_upper("marginType", margin_type)
            .build()?;
        self.signed(Method::POST, "/fapi/v1/marginType", params).await
    }
}
