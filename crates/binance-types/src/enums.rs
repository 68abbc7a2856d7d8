//! Side, OrderType, TimeInForce and the other enum-valued request fields
//!
//! Every enum renders to the exact upper-case token Binance expects on the
//! wire. They all implement `AsRef<str>`, so endpoint methods can take either
//! the typed value or a plain string.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_str {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the side as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

wire_str!(Side);

/// Order types across spot, margin and USD-M futures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum OrderType {
    /// Executes at the specified price or better
    Limit,
    /// Executes immediately at the best available price
    Market,
    /// Spot stop-loss (market on trigger)
    StopLoss,
    /// Spot stop-loss limit
    StopLossLimit,
    /// Spot take-profit (market on trigger)
    TakeProfit,
    /// Spot take-profit limit
    TakeProfitLimit,
    /// Spot limit order rejected if it would take liquidity
    LimitMaker,
    /// Futures stop-limit
    Stop,
    /// Futures stop-market
    StopMarket,
    /// Futures take-profit market
    TakeProfitMarket,
    /// Futures trailing stop
    TrailingStopMarket,
}

impl OrderType {
    /// Returns the order type as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::StopLoss => "STOP_LOSS",
            Self::StopLossLimit => "STOP_LOSS_LIMIT",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            Self::LimitMaker => "LIMIT_MAKER",
            Self::Stop => "STOP",
            Self::StopMarket => "STOP_MARKET",
            Self::TakeProfitMarket => "TAKE_PROFIT_MARKET",
            Self::TrailingStopMarket => "TRAILING_STOP_MARKET",
        }
    }

    /// Returns true if the order type needs a `price`
    pub fn requires_price(&self) -> bool {
        matches!(
            self,
            Self::Limit
                | Self::StopLossLimit
                | Self::TakeProfitLimit
                | Self::LimitMaker
                | Self::Stop
        )
    }
}

wire_str!(OrderType);

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
    /// Good till crossing (futures post-only)
    #[serde(rename = "GTX")]
    GoodTillCrossing,
    /// Good till date (futures)
    #[serde(rename = "GTD")]
    GoodTillDate,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCancelled => "GTC",
            Self::ImmediateOrCancel => "IOC",
            Self::FillOrKill => "FOK",
            Self::GoodTillCrossing => "GTX",
            Self::GoodTillDate => "GTD",
        }
    }
}

wire_str!(TimeInForce);

/// Futures position side (hedge mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionSide {
    /// One-way mode
    #[default]
    Both,
    /// Hedge mode long leg
    Long,
    /// Hedge mode short leg
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "BOTH",
            Self::Long => "LONG",
            Self::Short => "SHORT",
        }
    }
}

wire_str!(PositionSide);

/// Price used to trigger futures conditional orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkingType {
    #[default]
    ContractPrice,
    MarkPrice,
}

impl WorkingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContractPrice => "CONTRACT_PRICE",
            Self::MarkPrice => "MARK_PRICE",
        }
    }
}

wire_str!(WorkingType);

/// Amount of detail returned when an order is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewOrderRespType {
    /// Order id and transact time only
    Ack,
    /// Order state after matching
    Result,
    /// Result plus fills (spot only)
    Full,
}

impl NewOrderRespType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ack => "ACK",
            Self::Result => "RESULT",
            Self::Full => "FULL",
        }
    }
}

wire_str!(NewOrderRespType);

/// Futures margin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginType {
    Isolated,
    Crossed,
}

impl MarginType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Isolated => "ISOLATED",
            Self::Crossed => "CROSSED",
        }
    }
}

wire_str!(MarginType);

/// Direction of an isolated position margin change
///
/// Sent as `type=1` (add) or `type=2` (reduce) on `/fapi/v1/positionMargin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginModification {
    /// Add margin to the position
    Add = 1,
    /// Reduce margin from the position
    Reduce = 2,
}

impl MarginModification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::Reduce => "2",
        }
    }
}

wire_str!(MarginModification);

/// Kline/candlestick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "3m")]
    M3,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "30m")]
    M30,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "2h")]
    H2,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "6h")]
    H6,
    #[serde(rename = "8h")]
    H8,
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "3d")]
    D3,
    #[serde(rename = "1w")]
    W1,
    #[serde(rename = "1M")]
    Mo1,
}

impl KlineInterval {
    /// Interval token; case-sensitive (`1m` is one minute, `1M` one month)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M3 => "3m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::H2 => "2h",
            Self::H4 => "4h",
            Self::H6 => "6h",
            Self::H8 => "8h",
            Self::H12 => "12h",
            Self::D1 => "1d",
            Self::D3 => "3d",
            Self::W1 => "1w",
            Self::Mo1 => "1M",
        }
    }
}

wire_str!(KlineInterval);
