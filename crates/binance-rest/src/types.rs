//! Option structs for Binance REST endpoints
//!
//! Each struct lists the optional parameters of one endpoint family. Fields
//! serialize as camelCase; unset fields are dropped by the request builder,
//! so a `Default` value sends nothing extra.

use binance_types::{NewOrderRespType, PositionSide, TimeInForce, WorkingType};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Shared
// ============================================================================

/// Options for endpoints whose only optional parameter is `recvWindow`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecvWindow {
    /// Request validity window in ms (max 60000)
    pub recv_window: Option<u64>,
}

impl RecvWindow {
    pub fn new(recv_window: u64) -> Self {
        Self {
            recv_window: Some(recv_window),
        }
    }
}

/// Identifies an existing order by exchange id or client id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdOptions {
    /// Exchange-assigned order id
    pub order_id: Option<u64>,
    /// Client-assigned order id
    pub orig_client_order_id: Option<String>,
    /// New client id for the cancellation (spot and margin)
    pub new_client_order_id: Option<String>,
    pub recv_window: Option<u64>,
}

impl OrderIdOptions {
    /// Look up by exchange order id
    pub fn by_order_id(order_id: u64) -> Self {
        Self {
            order_id: Some(order_id),
            ..Default::default()
        }
    }

    /// Look up by client order id
    pub fn by_client_order_id(id: impl Into<String>) -> Self {
        Self {
            orig_client_order_id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

// ============================================================================
// Market Data
// ============================================================================

/// Kline/candlestick range options
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineOptions {
    /// Start time in ms
    pub start_time: Option<u64>,
    /// End time in ms
    pub end_time: Option<u64>,
    /// Number of klines (default 500, max 1000 spot / 1500 futures)
    pub limit: Option<u16>,
}

impl KlineOptions {
    pub fn with_limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }
}

// ============================================================================
// Spot / Margin Trading
// ============================================================================

/// Optional parameters for a spot order (`POST /api/v3/order`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderOptions {
    pub time_in_force: Option<TimeInForce>,
    /// Base asset quantity
    pub quantity: Option<Decimal>,
    /// Quote asset amount (market orders only)
    pub quote_order_qty: Option<Decimal>,
    pub price: Option<Decimal>,
    pub new_client_order_id: Option<String>,
    /// Trigger price for stop and take-profit orders
    pub stop_price: Option<Decimal>,
    /// Trailing delta in basis points
    pub trailing_delta: Option<u64>,
    pub iceberg_qty: Option<Decimal>,
    pub new_order_resp_type: Option<NewOrderRespType>,
    pub recv_window: Option<u64>,
}

impl NewOrderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Good-till-cancelled limit order parameters
    pub fn limit(quantity: Decimal, price: Decimal) -> Self {
        Self {
            quantity: Some(quantity),
            price: Some(price),
            time_in_force: Some(TimeInForce::GoodTillCancelled),
            ..Default::default()
        }
    }

    /// Market order parameters sized in base asset
    pub fn market(quantity: Decimal) -> Self {
        Self {
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_quote_order_qty(mut self, amount: Decimal) -> Self {
        self.quote_order_qty = Some(amount);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn with_stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    pub fn with_iceberg_qty(mut self, qty: Decimal) -> Self {
        self.iceberg_qty = Some(qty);
        self
    }

    pub fn with_response_type(mut self, resp: NewOrderRespType) -> Self {
        self.new_order_resp_type = Some(resp);
        self
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Margin order options: spot options plus margin side effects
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginOrderOptions {
    #[serde(flatten)]
    pub order: NewOrderOptions,
    /// `"TRUE"` for isolated margin; the API expects a string
    pub is_isolated: Option<String>,
    /// `NO_SIDE_EFFECT`, `MARGIN_BUY` or `AUTO_REPAY`
    pub side_effect_type: Option<String>,
}

impl MarginOrderOptions {
    pub fn new(order: NewOrderOptions) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }

    pub fn isolated(mut self) -> Self {
        self.is_isolated = Some("TRUE".to_string());
        self
    }

    pub fn with_side_effect(mut self, side_effect: impl Into<String>) -> Self {
        self.side_effect_type = Some(side_effect.into().to_ascii_uppercase());
        self
    }
}

/// History filters for `allOrders` and `myTrades`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryOptions {
    pub order_id: Option<u64>,
    pub from_id: Option<u64>,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    /// Default 500, max 1000
    pub limit: Option<u16>,
    pub recv_window: Option<u64>,
}

// ============================================================================
// Futures
// ============================================================================

/// Optional parameters for a USD-M futures order (`POST /fapi/v1/order`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderOptions {
    pub position_side: Option<PositionSide>,
    pub time_in_force: Option<TimeInForce>,
    pub quantity: Option<Decimal>,
    pub reduce_only: Option<bool>,
    pub price: Option<Decimal>,
    pub new_client_order_id: Option<String>,
    pub stop_price: Option<Decimal>,
    /// Close the whole position (STOP_MARKET / TAKE_PROFIT_MARKET only)
    pub close_position: Option<bool>,
    /// Activation price for TRAILING_STOP_MARKET
    pub activation_price: Option<Decimal>,
    /// Callback rate in percent for TRAILING_STOP_MARKET (0.1 to 5)
    pub callback_rate: Option<Decimal>,
    pub working_type: Option<WorkingType>,
    pub price_protect: Option<bool>,
    pub new_order_resp_type: Option<NewOrderRespType>,
    /// Auto-cancel time in ms for GTD orders
    pub good_till_date: Option<u64>,
    pub recv_window: Option<u64>,
}

impl FuturesOrderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    pub fn with_position_side(mut self, side: PositionSide) -> Self {
        self.position_side = Some(side);
        self
    }

    pub fn reduce_only(mut self) -> Self {
        self.reduce_only = Some(true);
        self
    }

    pub fn with_stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn with_working_type(mut self, working_type: WorkingType) -> Self {
        self.working_type = Some(working_type);
        self
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Options for `POST /fapi/v1/positionMargin`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMarginOptions {
    /// Required in hedge mode
    pub position_side: Option<PositionSide>,
    pub recv_window: Option<u64>,
}

// ============================================================================
// Wallet
// ============================================================================

/// Options for `GET /sapi/v1/capital/deposit/address`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddressOptions {
    /// Network, defaults to the coin's default network
    pub network: Option<String>,
    pub recv_window: Option<u64>,
}

/// Filters for deposit and withdrawal history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferHistoryOptions {
    pub coin: Option<String>,
    /// Numeric status filter; meanings differ between deposits and withdrawals
    pub status: Option<u8>,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub offset: Option<u32>,
    /// Default 1000, max 1000
    pub limit: Option<u16>,
    pub recv_window: Option<u64>,
}

/// Options for `POST /sapi/v1/capital/withdraw/apply`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawOptions {
    /// Client id for the withdrawal
    pub withdraw_order_id: Option<String>,
    pub network: Option<String>,
    /// Secondary address identifier (memo, tag)
    pub address_tag: Option<String>,
    /// Deduct the fee from the amount when sending to a Binance address
    pub transaction_fee_flag: Option<bool>,
    /// Address book label
    pub name: Option<String>,
    /// 0 = spot wallet, 1 = funding wallet
    pub wallet_type: Option<u8>,
    pub recv_window: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_order_options() {
        let opts = NewOrderOptions::limit(dec!(0.5), dec!(42000))
            .with_client_order_id("abc")
            .with_recv_window(5000);

        assert_eq!(opts.quantity, Some(dec!(0.5)));
        assert_eq!(opts.price, Some(dec!(42000)));
        assert_eq!(opts.time_in_force, Some(TimeInForce::GoodTillCancelled));
        assert_eq!(opts.new_client_order_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let opts = FuturesOrderOptions::new()
            .with_quantity(dec!(1))
            .with_position_side(PositionSide::Long)
            .reduce_only();
        let value = serde_json::to_value(&opts).unwrap();

        assert_eq!(value["quantity"], "1");
        assert_eq!(value["positionSide"], "LONG");
        assert_eq!(value["reduceOnly"], true);
        assert!(value["price"].is_null());
    }

    #[test]
    fn test_margin_options_flatten() {
        let opts = MarginOrderOptions::new(NewOrderOptions::market(dec!(2)))
            .isolated()
            .with_side_effect("margin_buy");
        let value = serde_json::to_value(&opts).unwrap();

        assert_eq!(value["quantity"], "2");
        assert_eq!(value["isIsolated"], "TRUE");
        assert_eq!(value["sideEffectType"], "MARGIN_BUY");
        assert!(value.get("order").is_none());
    }
}
